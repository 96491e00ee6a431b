//! Pre-flight checks performed before any file system mutation.
//!
//! Unlike the later phases, which stop at the first error, every check here
//! runs and all failures are reported together so the user can fix the tree
//! in one go.

use crate::error::{MigrateError, Result};
use crate::fs::{is_readable, is_writable};
use crate::layout::{CONFIG_FILE, LEGACY_DIR, MANIFEST_FILE, TARGET_DIR, WebrootLayout};

/// Inspects the project tree and returns every violated precondition.
///
/// # Checks Performed
///
/// 1. Legacy directory exists
/// 2. Target directory does not exist
/// 3. Manifest exists, is readable, is writable
/// 4. Config file, if present, is readable and writable
///
/// Pure inspection: nothing on disk is created or modified.
pub fn check_preconditions(layout: &WebrootLayout) -> Vec<String> {
    let mut errors = Vec::new();

    if !layout.legacy_dir().is_dir() {
        errors.push(format!(
            "Directory {LEGACY_DIR}/ not found (already migrated?)."
        ));
    }
    if layout.target_dir().is_dir() {
        errors.push(format!(
            "Directory {TARGET_DIR}/ already exists (already migrated?)."
        ));
    }

    let manifest = layout.manifest_path();
    if !manifest.is_file() {
        errors.push(format!("{MANIFEST_FILE} not found."));
    } else {
        if !is_readable(&manifest) {
            errors.push(format!("{MANIFEST_FILE} is not readable."));
        }
        if !is_writable(&manifest) {
            errors.push(format!("{MANIFEST_FILE} is not writable."));
        }
    }

    let config = layout.config_path();
    if config.is_file() {
        if !is_readable(&config) {
            errors.push(format!("{CONFIG_FILE} is not readable."));
        }
        if !is_writable(&config) {
            errors.push(format!("{CONFIG_FILE} is not writable."));
        }
    }

    errors
}

/// Runs [`check_preconditions`] and turns any violation into an error.
///
/// # Errors
///
/// `Preconditions` carrying the full ordered list of violations.
pub fn preflight_checks(layout: &WebrootLayout) -> Result<()> {
    let errors = check_preconditions(layout);

    if errors.is_empty() {
        log::debug!("All preconditions hold in {}", layout.root().display());
        return Ok(());
    }

    for error in &errors {
        log::debug!("Precondition failed: {}", error);
    }
    Err(MigrateError::Preconditions(errors))
}
