//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolve and validate the inputs of the commit action
#[derive(Parser, Debug)]
#[command(name = "commit-action")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with input values; INPUT_* variables take precedence
    #[arg(long, global = true, value_name = "FILE", env = "COMMIT_ACTION_INPUTS_FILE")]
    pub inputs_file: Option<PathBuf>,

    /// The command to run (defaults to `resolve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve defaults and validate the inputs
    ///
    /// Step outputs are declared with their safe defaults before anything
    /// else runs.
    Resolve {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the git commands the resolved inputs translate to
    Plan {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Only declare the step outputs with their safe defaults
    Outputs,
}
