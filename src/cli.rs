use clap::{Parser, Subcommand};

use crate::steps::MigrateArgs;

#[derive(Parser)]
#[command(name = "mautic-webroot", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rename docroot/ to public/ and update composer.json and config/local.php references.
    #[command(name = "migrate-webroot")]
    MigrateWebroot(MigrateArgs),
}
