mod analyze_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod report;
mod workdays_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    // Variables from .env must be set before clap reads its `env` fallbacks.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Ok(path) = &dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Workdays(args) => workdays_cmd::run(args),
    }
}
