//! Default resolution for unset inputs.
//!
//! Resolution is an ordered list of named [`Stage`]s. Each stage reads the
//! current inputs (and, for the identity stage, the result of a user lookup)
//! and returns a [`StageOutcome`]: defaults to fill, entries to drop, facts
//! learned, and diagnostics. Guard stages return an error instead and halt
//! resolution before anything else is touched.
//!
//! # Stage order
//!
//! 1. Selection guard (`add`/`remove`)
//! 2. List shape check
//! 3. `default_author` enumeration
//! 4. `fetch`/`push` probe
//! 5. Author identity
//! 6. Committer identity
//! 7. Commit message
//! 8. `pathspec_error_handling` enumeration
//! 9. Credential presence
//! 10. Legacy `pull` value
//! 11. Target ref
//!
//! Later stages read what earlier ones wrote (the committer defaults to the
//! author filled in by stage 5), so the order is fixed.

mod identity;
mod stages;

use crate::config::GitArg;
use crate::context::RunnerContext;
use crate::diagnostic::{Diagnostic, ResolutionReport};
use crate::error::Result;
use crate::identity::IdentityLookup;
use crate::key::InputKey;
use crate::store::{Inputs, KeyValueStore};
use crate::validator;

pub use identity::resolve_identity;
pub use stages::{
    check_credential, check_list_shape, default_committer, default_message, drop_legacy_pull,
    probe_fetch_push, resolve_target_ref,
};

/// A named step of resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectionGuard,
    ListShape,
    DefaultAuthor,
    FetchPushProbe,
    Identity,
    Committer,
    Message,
    PathspecErrorHandling,
    Credential,
    LegacyPull,
    TargetRef,
}

impl Stage {
    pub const ORDER: [Stage; 11] = [
        Stage::SelectionGuard,
        Stage::ListShape,
        Stage::DefaultAuthor,
        Stage::FetchPushProbe,
        Stage::Identity,
        Stage::Committer,
        Stage::Message,
        Stage::PathspecErrorHandling,
        Stage::Credential,
        Stage::LegacyPull,
        Stage::TargetRef,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::SelectionGuard => "selection_guard",
            Stage::ListShape => "list_shape",
            Stage::DefaultAuthor => "default_author",
            Stage::FetchPushProbe => "fetch_push_probe",
            Stage::Identity => "identity",
            Stage::Committer => "committer",
            Stage::Message => "message",
            Stage::PathspecErrorHandling => "pathspec_error_handling",
            Stage::Credential => "credential",
            Stage::LegacyPull => "legacy_pull",
            Stage::TargetRef => "target_ref",
        }
    }
}

/// Something a stage learned that is not a store update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    GitArg(InputKey, GitArg),
    TargetRef(String),
}

/// What a stage wants done. Applied by [`DefaultResolver`] in stage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutcome {
    /// Values to write if the key is still unset
    pub defaults: Vec<(InputKey, String)>,
    /// Keys to delete
    pub removals: Vec<InputKey>,
    pub facts: Vec<Fact>,
    pub diagnostics: Vec<Diagnostic>,
}

impl StageOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_value(mut self, key: InputKey, value: impl Into<String>) -> Self {
        self.defaults.push((key, value.into()));
        self
    }

    pub fn remove(mut self, key: InputKey) -> Self {
        self.removals.push(key);
        self
    }

    pub fn fact(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }

    pub fn diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Apply to `inputs`: defaults first (never overwriting), then removals.
    pub fn apply_to<S: KeyValueStore>(&self, inputs: &mut Inputs<S>) {
        for (key, value) in &self.defaults {
            inputs.set_default(*key, value);
        }
        for key in &self.removals {
            inputs.set(*key, None);
        }
    }
}

/// Runs the resolution stages against a store.
pub struct DefaultResolver<'a> {
    context: &'a RunnerContext,
    lookup: &'a dyn IdentityLookup,
}

impl<'a> DefaultResolver<'a> {
    pub fn new(context: &'a RunnerContext, lookup: &'a dyn IdentityLookup) -> Self {
        Self { context, lookup }
    }

    pub fn context(&self) -> &RunnerContext {
        self.context
    }

    /// Compute one stage's outcome without applying it.
    pub async fn run_stage<S: KeyValueStore>(
        &self,
        stage: Stage,
        inputs: &Inputs<S>,
    ) -> Result<StageOutcome> {
        match stage {
            Stage::SelectionGuard => validator::check_selection(inputs),
            Stage::ListShape => Ok(check_list_shape(inputs)),
            Stage::DefaultAuthor => validator::check_default_author(inputs),
            Stage::FetchPushProbe => Ok(probe_fetch_push(inputs)),
            Stage::Identity => {
                let default_author = validator::check_default_author_value(inputs)?;
                let user_info = match identity::lookup_target(inputs, self.context, default_author)
                {
                    Some(username) => {
                        tracing::debug!(username, "Fetching user info");
                        self.lookup.user_info(&username).await
                    }
                    None => None,
                };
                resolve_identity(inputs, self.context, default_author, user_info)
            }
            Stage::Committer => Ok(default_committer(inputs)),
            Stage::Message => Ok(default_message(inputs, self.context)),
            Stage::PathspecErrorHandling => validator::check_pathspec_error_handling(inputs),
            Stage::Credential => Ok(check_credential(inputs)),
            Stage::LegacyPull => Ok(drop_legacy_pull(inputs)),
            Stage::TargetRef => Ok(resolve_target_ref(inputs, self.context)),
        }
    }

    /// Run every stage in order, applying each outcome before the next stage
    /// starts. Stops at the first fatal error.
    pub async fn resolve<S: KeyValueStore>(
        &self,
        inputs: &mut Inputs<S>,
    ) -> Result<ResolutionReport> {
        let mut report = ResolutionReport::default();
        for stage in Stage::ORDER {
            tracing::trace!(stage = stage.name(), "Running resolution stage");
            let outcome = self.run_stage(stage, inputs).await?;
            outcome.apply_to(inputs);
            for diagnostic in &outcome.diagnostics {
                diagnostic.emit();
            }
            for fact in outcome.facts {
                match fact {
                    Fact::GitArg(key, arg) => report.record_git_arg(key, arg),
                    Fact::TargetRef(target) => report.target_ref = Some(target),
                }
            }
            report.diagnostics.extend(outcome.diagnostics);
        }
        Ok(report)
    }
}
