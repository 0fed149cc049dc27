use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::{constants, logging::LoggingArgs};

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Relative path to the config file
    #[clap(short, long, default_value = constants::DEFAULT_CONFIG_FILE_NAME)]
    pub config: String,

    /// What to do when a log file cannot be truncated.
    /// Overrides `on_error` from the config file
    #[clap(long, value_enum)]
    pub on_error: Option<FailurePolicy>,

    /// Print a summary to stderr once the sweep is finished
    #[clap(short, long, default_value_t = false)]
    pub summary: bool,

    #[clap(flatten)]
    pub logging: LoggingArgs,
}

impl Args {
    pub fn config(&self) -> &str {
        &self.config
    }

    /// Whether the config path was given explicitly rather than defaulted
    pub fn is_custom_config(&self) -> bool {
        self.config != constants::DEFAULT_CONFIG_FILE_NAME
    }

    pub fn on_error(&self) -> Option<FailurePolicy> {
        self.on_error
    }

    pub fn summary(&self) -> bool {
        self.summary
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the sweep at the first file that cannot be truncated
    #[default]
    Abort,

    /// Report the failure and keep sweeping the remaining files
    Skip,
}
