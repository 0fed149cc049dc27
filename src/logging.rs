#[derive(clap::Args, Debug, Clone)]
#[group()]
pub struct LoggingArgs {
    /// Enable debug logging.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl LoggingArgs {
    pub fn init(&self) {
        init_logging(self.debug);
    }
}

pub fn init_logging(debug_mode: bool) {
    if debug_mode {
        env_logger::builder()
            .filter(None, log::LevelFilter::Debug)
            .parse_default_env()
            .init();
    } else {
        env_logger::builder()
            .filter(None, log::LevelFilter::Warn)
            .init();
    }
}
