#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod fs;
pub mod layout;
pub mod rewrite;
pub mod steps;
pub mod verify;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use cli::Command;

    let cli = cli::Cli::parse();
    match cli.command {
        Command::MigrateWebroot(args) => steps::execute(args),
    }
}
