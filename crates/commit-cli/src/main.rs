//! Commit action CLI
//!
//! Reads the step's inputs from the environment (and an optional TOML file),
//! resolves defaults and validates them before any git command runs.

mod cli;
mod commands;
mod error;
mod inputs;

use clap::Parser;
use colored::Colorize;
use commit_core::RunnerContext;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let context = RunnerContext::from_env();

    commit_github::logging::init(cli.verbose, context.in_actions)?;
    tracing::debug!(?context, "Runner context");

    let load_inputs = || inputs::load(cli.inputs_file.as_deref(), std::env::vars());
    match cli.command.unwrap_or(Commands::Resolve { json: false }) {
        Commands::Resolve { json } => commands::run_resolve(load_inputs()?, &context, json).await,
        Commands::Plan { json } => commands::run_plan(load_inputs()?, &context, json).await,
        Commands::Outputs => commands::run_outputs(&context),
    }
}
