//! Author identity resolution (stage 5).

use crate::config::DefaultAuthor;
use crate::context::RunnerContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::{Error, Result};
use crate::identity::{Identity, UserInfo, actor_email};
use crate::key::InputKey;
use crate::store::{Inputs, KeyValueStore};

use super::StageOutcome;

/// Username to look up, if this run needs a lookup at all.
///
/// Only `user_info` looks anyone up, and only when the author is not
/// already fully specified.
pub(super) fn lookup_target<S: KeyValueStore>(
    inputs: &Inputs<S>,
    context: &RunnerContext,
    default_author: DefaultAuthor,
) -> Option<String> {
    if default_author != DefaultAuthor::UserInfo || author_fully_set(inputs) {
        return None;
    }
    context.actor.clone()
}

fn author_fully_set<S: KeyValueStore>(inputs: &Inputs<S>) -> bool {
    inputs.is_set(InputKey::AuthorName) && inputs.is_set(InputKey::AuthorEmail)
}

/// Compute the default author for `default_author`.
///
/// `user_info` is the lookup result, if one was made. Fields it lacks fall
/// back to the actor formula. Explicit `author_name`/`author_email` values
/// always win over the computed defaults.
pub fn resolve_identity<S: KeyValueStore>(
    inputs: &Inputs<S>,
    context: &RunnerContext,
    default_author: DefaultAuthor,
    user_info: Option<UserInfo>,
) -> Result<StageOutcome> {
    let actor = || {
        context.actor.clone().ok_or_else(|| Error::MissingActor {
            default_author: default_author.to_string(),
        })
    };
    let mut outcome = StageOutcome::new();

    let identity = match default_author {
        _ if author_fully_set(inputs) => None,
        DefaultAuthor::GithubActor => Some(Identity::github_actor(&actor()?)),
        DefaultAuthor::UserInfo => {
            let info = user_info.unwrap_or_default();
            let name = match info.name.filter(|n| !n.trim().is_empty()) {
                Some(name) => name,
                None if inputs.is_set(InputKey::AuthorName) => String::new(),
                None => {
                    outcome = outcome.diagnostic(Diagnostic::warning(
                        DiagnosticKind::MissingIdentityField,
                        "Couldn't fetch author name, filling with github_actor.",
                    ));
                    actor()?
                }
            };
            let email = match info.email.filter(|e| !e.trim().is_empty()) {
                Some(email) => email,
                None if inputs.is_set(InputKey::AuthorEmail) => String::new(),
                None => {
                    outcome = outcome.diagnostic(Diagnostic::warning(
                        DiagnosticKind::MissingIdentityField,
                        "Couldn't fetch author email, filling with github_actor.",
                    ));
                    actor_email(&actor()?)
                }
            };
            Some(Identity::new(name, email))
        }
        DefaultAuthor::GithubActions => Some(Identity::github_actions()),
    };

    if let Some(identity) = identity {
        for (key, value) in [
            (InputKey::AuthorName, identity.name),
            (InputKey::AuthorEmail, identity.email),
        ] {
            if !value.is_empty() {
                outcome = outcome.default_value(key, value);
            }
        }
    }

    let name = effective(inputs, &outcome, InputKey::AuthorName);
    let email = effective(inputs, &outcome, InputKey::AuthorEmail);
    Ok(outcome.diagnostic(Diagnostic::info(format!(
        "> Using '{name} <{email}>' as author."
    ))))
}

/// Value `key` will hold once `outcome` is applied.
fn effective<S: KeyValueStore>(inputs: &Inputs<S>, outcome: &StageOutcome, key: InputKey) -> String {
    inputs.get_opt(key).unwrap_or_else(|| {
        outcome
            .defaults
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    })
}
