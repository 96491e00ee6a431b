//! Command implementations.

pub mod migrate;
pub mod report;

pub use migrate::{MigrateArgs, Phase, execute, migrate};
pub use report::{MigrationReport, PatchOutcome};
