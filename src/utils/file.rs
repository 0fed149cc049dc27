use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

/// Clears the contents of an existing file, keeping its path and permissions.
/// Symlinks are followed to their target. Never creates the file.
pub fn truncate_file(path: &Path) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)?;

    file.write_all(b"")?;
    file.flush()?;

    Ok(())
}
