//! Error types for mautic-webroot.
//!
//! All operations return `Result<T>` which aliases `Result<T, MigrateError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from migration phases.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// One or more precondition checks failed. Nothing was modified.
    #[error("Prerequisite checks failed:\n- {}", .0.join("\n- "))]
    Preconditions(Vec<String>),

    /// Source directory vanished between the checks and the rename.
    #[error("Directory {0} not found. Already migrated? Exiting.")]
    DirectoryNotFound(PathBuf),

    /// Target directory appeared between the checks and the rename.
    #[error("Directory {0} already exists. Already migrated? Exiting.")]
    DirectoryExists(PathBuf),

    #[error("Failed to rename {from} to {to}: {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backup copy could not be created; the original is untouched.
    #[error("Failed to create {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write updated {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Substitution pattern failed to compile (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for migration operations.
pub type Result<T> = std::result::Result<T, MigrateError>;
