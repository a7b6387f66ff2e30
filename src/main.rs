//! shalias - Shell Alias Manager

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use env_logger::Env;

use shalias::cli::Cli;
use shalias::AliasError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", level)).init();

    match shalias::cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(alias_err) = err.downcast_ref::<AliasError>() {
                eprintln!("{} {}", "⚠".yellow(), alias_err);
            } else {
                eprintln!("{} {:#}", "✗".red(), err);
            }
            ExitCode::FAILURE
        }
    }
}
