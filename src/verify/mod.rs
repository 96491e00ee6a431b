//! Validation performed before the migration touches the project tree.

pub mod preflight;

pub use preflight::{check_preconditions, preflight_checks};
