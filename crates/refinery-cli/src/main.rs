//! Refinery CLI - column profiling and cleaning for CSV data.

mod cli;
mod commands;
mod logging;

use std::io::IsTerminal;

use clap::Parser;
use cli::{Cli, Commands};
use logging::LogConfig;

fn main() {
    let cli = Cli::parse();

    let log_config =
        LogConfig::from_flags(cli.verbose, cli.quiet).with_ansi(std::io::stderr().is_terminal());
    if let Err(e) = logging::init_logging(&log_config) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Actions { json } => commands::actions::run(json),

        Commands::Profile { file, json } => commands::profile::run(file, json, cli.quiet),

        Commands::Select {
            file,
            choices,
            column,
            actions,
        } => commands::select::run(file, choices, column, actions, cli.quiet),

        Commands::Apply {
            file,
            choices,
            output,
        } => commands::apply::run(file, choices, output, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
