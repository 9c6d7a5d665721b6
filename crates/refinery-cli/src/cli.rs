//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use refinery::Action;
use std::path::PathBuf;

/// Refinery: profile columns and apply cleaning actions to CSV data
#[derive(Parser)]
#[command(name = "refinery")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available column actions
    Actions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Profile each column and print cleaning suggestions
    Profile {
        /// Path to the data file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the actions for one column and preview the result
    Select {
        /// Path to the data file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Choices file (default: <file>.choices.json)
        #[arg(long)]
        choices: Option<PathBuf>,

        /// Column to configure
        #[arg(short, long)]
        column: String,

        /// Action to apply, in order; repeat for more. None clears the column.
        #[arg(short, long = "action", value_name = "ACTION")]
        actions: Vec<Action>,
    },

    /// Apply all selected actions and export the cleaned data
    Apply {
        /// Path to the data file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Choices file (default: <file>.choices.json)
        #[arg(long)]
        choices: Option<PathBuf>,

        /// Output file or directory (default: processed_features.csv next to FILE)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
