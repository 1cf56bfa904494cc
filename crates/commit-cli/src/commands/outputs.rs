//! Output declaration

use std::io;

use commit_core::{OutputSink, Outputs, RunnerContext};
use commit_github::{GithubOutputFile, StdoutSink};

use crate::error::Result;

/// `$GITHUB_OUTPUT` when the runner provides one, otherwise `name=value`
/// lines. Those go to stderr when stdout is reserved for JSON.
pub fn output_sink(context: &RunnerContext, json: bool) -> Box<dyn OutputSink> {
    match &context.output_file {
        Some(path) => Box::new(GithubOutputFile::new(path)),
        None if json => Box::new(StdoutSink::to_writer(io::stderr())),
        None => Box::new(StdoutSink::new()),
    }
}

/// Publish every output with its safe default.
pub fn declare_outputs(context: &RunnerContext, json: bool) -> Result<Outputs<Box<dyn OutputSink>>> {
    let outputs = Outputs::declare(output_sink(context, json))?;
    tracing::debug!("Outputs declared");
    Ok(outputs)
}

pub fn run_outputs(context: &RunnerContext) -> Result<()> {
    declare_outputs(context, false)?;
    Ok(())
}
