use std::{
    ffi::OsStr,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{cli::FailurePolicy, constants, prelude::*, presentation, utils::file};

#[derive(Debug, Default)]
pub struct SweepReport {
    truncated: Vec<PathBuf>,
    failed: Vec<(PathBuf, io::Error)>,
}

impl SweepReport {
    /// Paths that were cleared, in traversal order
    pub fn truncated(&self) -> &[PathBuf] {
        &self.truncated
    }

    /// Paths that could not be cleared. Only populated with [`FailurePolicy::Skip`]
    pub fn failed(&self) -> &[(PathBuf, io::Error)] {
        &self.failed
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Truncates every `*.log` file under `root` to zero length,
/// writing each path to `out` before it is truncated.
///
/// A missing root is not an error: the sweep simply finds nothing.
pub fn sweep(root: &Path, policy: FailurePolicy, out: &mut impl Write) -> Result<SweepReport> {
    sweep_with(root, policy, out, file::truncate_file)
}

fn sweep_with<F>(
    root: &Path,
    policy: FailurePolicy,
    out: &mut impl Write,
    mut truncate: F,
) -> Result<SweepReport>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut report = SweepReport::default();

    if !is_sweepable_root(root) {
        return Ok(report);
    }

    log::debug!("Sweeping {}", root.display());

    for entry in create_walker(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                log::warn!("Skipping unreadable entry: {error}");
                continue;
            }
        };

        if !is_sweepable_file(&entry) {
            continue;
        }

        if !is_log_file_name(entry.file_name()) {
            log::debug!("Leaving {} untouched", entry.path().display());
            continue;
        }

        let path = entry.path();

        presentation::write_swept_path(out, path).context("Could not write to stdout")?;
        out.flush().context("Could not write to stdout")?;

        match truncate(path) {
            Ok(()) => report.truncated.push(path.to_path_buf()),
            Err(error) => match policy {
                FailurePolicy::Abort => {
                    return Err(error)
                        .with_context(|| format!("Could not truncate {}", path.display()))
                }
                FailurePolicy::Skip => {
                    presentation::print_truncate_failed(path, &error);
                    report.failed.push((path.to_path_buf(), error));
                }
            },
        }
    }

    Ok(report)
}

fn is_sweepable_root(root: &Path) -> bool {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => true,
        Ok(_) => {
            log::debug!("{} is not a directory, nothing to sweep", root.display());
            false
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} does not exist, nothing to sweep", root.display());
            false
        }
        Err(error) => {
            log::warn!("Cannot access {}: {error}", root.display());
            false
        }
    }
}

/// Regular files, and symlinks that resolve to one. Directory symlinks,
/// dangling links, FIFOs and other special files are left alone.
fn is_sweepable_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(file_type) if file_type.is_file() => true,
        Some(file_type) if file_type.is_symlink() => fs::metadata(entry.path())
            .is_ok_and(|metadata| metadata.is_file()),
        _ => false,
    }
}

/// Case-sensitive, so `x.LOG` and `x.logs` do not match
fn is_log_file_name(name: &OsStr) -> bool {
    name.as_encoded_bytes()
        .ends_with(constants::LOG_SUFFIX.as_bytes())
}

fn create_walker(root: &Path) -> ignore::Walk {
    ignore::WalkBuilder::new(root)
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .build()
}
