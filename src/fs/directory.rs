//! Directory rename.
//!
//! The move is a single `rename(2)`. There is no copy+delete fallback for
//! cross-device moves: the directory is either fully at the old path or
//! fully at the new one.

use crate::error::{MigrateError, Result};
use std::fs;
use std::path::Path;

/// Renames directory `from` to `to`.
///
/// Existence is re-checked right before acting, since the tree may have
/// changed after the precondition phase.
///
/// # Errors
///
/// - `DirectoryNotFound`: `from` is not a directory
/// - `DirectoryExists`: `to` already exists
/// - `RenameFailed`: the underlying rename failed (permissions, cross-device, ...)
pub fn rename_directory(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        return Err(MigrateError::DirectoryNotFound(from.to_path_buf()));
    }
    if to.exists() {
        return Err(MigrateError::DirectoryExists(to.to_path_buf()));
    }

    fs::rename(from, to).map_err(|source| MigrateError::RenameFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    log::info!("Moved: {} → {}", from.display(), to.display());
    Ok(())
}
