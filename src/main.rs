use std::io;

use clap::Parser;

mod cli;
mod config;
mod constants;
mod context;
mod logging;
mod prelude;
mod presentation;
mod sweep;
mod utils;

use prelude::*;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    args.logging().init();

    let config = match config::SweepConfig::load(args.config(), args.is_custom_config()) {
        Ok(config) => config,
        Err(error) => {
            if let Some(io_error) = error.downcast_ref::<io::Error>() {
                if io_error.kind() == io::ErrorKind::NotFound {
                    presentation::print_config_not_found_error(args.config());
                }
            }
            return Err(error);
        }
    };

    let context = context::Context::new(args, config);

    log::debug!("{:#?}", context);

    let mut stdout = io::stdout().lock();
    let report = sweep::sweep(context.root(), context.failure_policy(), &mut stdout)?;

    if context.should_print_summary() {
        presentation::print_summary(&report);
    }

    if !report.is_clean() {
        bail!("{} log file(s) could not be truncated", report.failed().len());
    }

    Ok(())
}
