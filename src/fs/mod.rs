//! File system primitives used by the migration phases.
//!
//! Each helper performs exactly one whole operation (a copy, a full-file
//! overwrite, a single rename) and maps failures onto a `MigrateError`
//! variant that names the path involved.

pub mod directory;
pub mod file;

pub use directory::rename_directory;
pub use file::{backup_file, is_readable, is_writable, read_text, write_text};
