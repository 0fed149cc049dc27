use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "./logs/";
pub const LOG_SUFFIX: &str = ".log";
pub const DEFAULT_CONFIG_FILE_NAME: &str = "logsweep.toml";

pub fn get_default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}
