//! Whole-file operations: access probes, backups, reads and overwrites.

use crate::error::{MigrateError, Result};
use crate::layout::backup_path;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Returns `true` if `path` can be opened for reading.
pub fn is_readable(path: &Path) -> bool {
    File::open(path).is_ok()
}

/// Returns `true` if `path` can be opened for writing.
///
/// The file is opened without truncation or creation, so probing never
/// alters it.
pub fn is_writable(path: &Path) -> bool {
    OpenOptions::new().write(true).open(path).is_ok()
}

/// Copies `path` byte-for-byte to `<path>.backup` and returns the backup path.
///
/// An existing backup from an earlier attempt is overwritten.
pub fn backup_file(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);

    fs::copy(path, &backup).map_err(|source| MigrateError::Backup {
        path: backup.clone(),
        source,
    })?;

    log::debug!("Backed up {} → {}", path.display(), backup.display());
    Ok(backup)
}

/// Reads the full content of `path` as UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| MigrateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the full content of `path` with `content`.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| MigrateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
