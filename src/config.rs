use std::{fs, io, path::Path};

use serde::Deserialize;

use crate::{cli::FailurePolicy, prelude::*};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// What to do when a log file cannot be truncated
    #[serde(default)]
    on_error: FailurePolicy,

    /// Print a summary to stderr once the sweep is finished
    #[serde(default)]
    summary: bool,
}

impl SweepConfig {
    pub fn on_error(&self) -> FailurePolicy {
        self.on_error
    }

    pub fn summary(&self) -> bool {
        self.summary
    }

    /// Loads the config file at `path`.
    ///
    /// A missing file yields the defaults unless `required` is set.
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self> {
        let path = path.as_ref();

        let file_contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound && !required => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("Could not read config file {}", path.display()))
            }
        };

        Self::parse(&file_contents)
            .with_context(|| format!("Could not parse config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
