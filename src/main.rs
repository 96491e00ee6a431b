//! Binary entry point for `mautic-webroot`.

use colored::Colorize;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = mautic_webroot::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
