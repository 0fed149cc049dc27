use std::{
    io::{self, Write},
    path::Path,
};

use console::style;

use crate::sweep::SweepReport;

/// Stdout carries nothing but swept paths, one per line.
#[inline]
pub fn write_swept_path(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())
}

#[inline]
pub fn print_config_not_found_error(path: &str) {
    eprintln!("It seems that the config file {} does not exist.", style(path).cyan());
    eprintln!("Please make sure the file exists or omit the --config flag.\n");
}

#[inline]
pub fn print_truncate_failed(path: &Path, error: &io::Error) {
    eprintln!(
        "[{}] {} {}",
        style(path.display()).cyan(),
        style("Failed to truncate:").red(),
        error
    );
}

#[inline]
pub fn print_summary(report: &SweepReport) {
    let truncated = report.truncated().len();
    let failed = report.failed().len();

    if failed == 0 {
        eprintln!(
            "{} {} log file(s)",
            style("Truncated").green(),
            style(truncated).cyan()
        );
    } else {
        eprintln!(
            "{} {} log file(s), {} {}",
            style("Truncated").green(),
            style(truncated).cyan(),
            style(failed).red(),
            style("failed").red()
        );
    }
}
