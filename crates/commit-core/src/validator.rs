//! Guard stages and the resolution entry point.
//!
//! [`ConfigValidator`] is what the binary calls before anything touches the
//! repository. It runs every resolution stage once, in order, and hands back
//! the typed [`ResolvedConfig`] together with the diagnostics collected along
//! the way.

use crate::config::{DefaultAuthor, PathspecErrorHandling, ResolvedConfig};
use crate::context::RunnerContext;
use crate::diagnostic::ResolutionReport;
use crate::error::{Error, Result};
use crate::identity::IdentityLookup;
use crate::key::InputKey;
use crate::resolver::{DefaultResolver, StageOutcome};
use crate::store::{Inputs, KeyValueStore};

/// Stage 1: there must be something to add or remove.
pub fn check_selection<S: KeyValueStore>(inputs: &Inputs<S>) -> Result<StageOutcome> {
    if !inputs.is_set(InputKey::Add) && !inputs.is_set(InputKey::Remove) {
        return Err(Error::NothingToDo);
    }
    Ok(StageOutcome::new())
}

/// Parse `default_author` into its variant.
pub fn check_default_author_value<S: KeyValueStore>(inputs: &Inputs<S>) -> Result<DefaultAuthor> {
    inputs.get(InputKey::DefaultAuthor).parse()
}

/// Stage 3: `default_author` must be a known strategy.
pub fn check_default_author<S: KeyValueStore>(inputs: &Inputs<S>) -> Result<StageOutcome> {
    check_default_author_value(inputs).map(|_| StageOutcome::new())
}

/// Stage 8: `pathspec_error_handling` must be a known policy.
pub fn check_pathspec_error_handling<S: KeyValueStore>(
    inputs: &Inputs<S>,
) -> Result<StageOutcome> {
    inputs
        .get(InputKey::PathspecErrorHandling)
        .parse::<PathspecErrorHandling>()
        .map(|_| StageOutcome::new())
}

/// Single entry point for resolving and validating the inputs.
pub struct ConfigValidator<'a> {
    resolver: DefaultResolver<'a>,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(context: &'a RunnerContext, lookup: &'a dyn IdentityLookup) -> Self {
        Self {
            resolver: DefaultResolver::new(context, lookup),
        }
    }

    /// Resolve `inputs` in place and return the typed configuration.
    ///
    /// On error nothing after the failing stage has run; the store keeps the
    /// values written by the stages before it.
    pub async fn validate<S: KeyValueStore>(
        &self,
        inputs: &mut Inputs<S>,
    ) -> Result<(ResolvedConfig, ResolutionReport)> {
        let report = self.resolver.resolve(inputs).await?;
        let config = ResolvedConfig::from_inputs(inputs, &report)?;
        tracing::debug!(
            author = %config.author,
            committer = %config.committer,
            target_ref = ?config.target_ref,
            "Inputs resolved"
        );
        Ok((config, report))
    }
}
