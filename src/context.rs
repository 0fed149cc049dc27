use std::path::{Path, PathBuf};

use crate::{
    cli::{Args, FailurePolicy},
    config::SweepConfig,
    constants,
};

#[derive(Debug)]
pub struct Context {
    args: Args,
    config: SweepConfig,
    root: PathBuf,
}

impl Context {
    pub fn new(args: Args, config: SweepConfig) -> Self {
        Self {
            args,
            config,
            root: constants::get_default_root(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.args
            .on_error()
            .unwrap_or_else(|| self.config.on_error())
    }

    pub fn should_print_summary(&self) -> bool {
        self.args.summary() || self.config.summary()
    }
}
