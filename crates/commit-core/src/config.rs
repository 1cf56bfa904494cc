//! The fully resolved, typed configuration.
//!
//! Enumerated inputs are parsed once into their variants here; nothing
//! downstream looks at the raw strings again.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::args::tokenize;
use crate::diagnostic::ResolutionReport;
use crate::error::{Error, Result};
use crate::identity::Identity;
use crate::key::InputKey;
use crate::list::parse_list;
use crate::store::{Inputs, KeyValueStore};

/// Where the default author identity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultAuthor {
    /// The triggering user's handle and noreply address
    GithubActor,
    /// The triggering user's public profile
    UserInfo,
    /// The GitHub Actions bot
    GithubActions,
}

impl DefaultAuthor {
    pub const VALID: [&'static str; 3] = ["github_actor", "user_info", "github_actions"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultAuthor::GithubActor => "github_actor",
            DefaultAuthor::UserInfo => "user_info",
            DefaultAuthor::GithubActions => "github_actions",
        }
    }
}

impl FromStr for DefaultAuthor {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "github_actor" => Ok(DefaultAuthor::GithubActor),
            "user_info" => Ok(DefaultAuthor::UserInfo),
            "github_actions" => Ok(DefaultAuthor::GithubActions),
            _ => Err(Error::invalid_enum(InputKey::DefaultAuthor, s, &Self::VALID)),
        }
    }
}

impl fmt::Display for DefaultAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when a pathspec given to `add`/`remove` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PathspecErrorHandling {
    /// Log and continue
    Ignore,
    /// Fail at the first unmatched pathspec
    ExitImmediately,
    /// Run everything, fail at the end
    ExitAtEnd,
}

impl PathspecErrorHandling {
    pub const VALID: [&'static str; 3] = ["ignore", "exitImmediately", "exitAtEnd"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathspecErrorHandling::Ignore => "ignore",
            PathspecErrorHandling::ExitImmediately => "exitImmediately",
            PathspecErrorHandling::ExitAtEnd => "exitAtEnd",
        }
    }
}

impl FromStr for PathspecErrorHandling {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(PathspecErrorHandling::Ignore),
            "exitImmediately" => Ok(PathspecErrorHandling::ExitImmediately),
            "exitAtEnd" => Ok(PathspecErrorHandling::ExitAtEnd),
            _ => Err(Error::invalid_enum(
                InputKey::PathspecErrorHandling,
                s,
                &Self::VALID,
            )),
        }
    }
}

impl fmt::Display for PathspecErrorHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input that is either an on/off switch or extra git arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GitArg {
    Flag(bool),
    Args(String),
}

impl GitArg {
    /// Boolean reading first, literal argument string when that fails.
    /// `None` when the input is unset.
    pub fn probe<S: KeyValueStore>(inputs: &Inputs<S>, key: InputKey) -> Option<Self> {
        if !inputs.is_set(key) {
            return None;
        }
        Some(match inputs.get_bool(key) {
            Ok(flag) => GitArg::Flag(flag),
            Err(_) => GitArg::Args(inputs.get(key)),
        })
    }

    /// Whether the operation should run at all.
    pub fn enabled(&self) -> bool {
        !matches!(self, GitArg::Flag(false))
    }

    /// Extra arguments for the operation; empty for a plain `true`.
    pub fn args(&self) -> Vec<String> {
        match self {
            GitArg::Flag(_) => Vec::new(),
            GitArg::Args(raw) => tokenize(raw),
        }
    }
}

impl fmt::Display for GitArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitArg::Flag(flag) => write!(f, "{flag}"),
            GitArg::Args(raw) => f.write_str(raw),
        }
    }
}

/// Terminal state of resolution, consumed by the downstream process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub add: Vec<String>,
    pub remove: Vec<String>,
    pub author: Identity,
    pub committer: Identity,
    pub message: String,
    pub default_author: DefaultAuthor,
    pub pathspec_error_handling: PathspecErrorHandling,
    pub fetch: Option<GitArg>,
    pub push: Option<GitArg>,
    pub pull: Option<String>,
    pub commit: Option<String>,
    pub new_branch: Option<String>,
    pub tag: Option<String>,
    pub tag_push: Option<String>,
    pub cwd: String,
    pub target_ref: Option<String>,
    pub has_token: bool,
}

impl ResolvedConfig {
    /// Read the resolved store back into typed form.
    ///
    /// Expects resolution to have run; fails if a field the downstream
    /// process relies on is still empty or an enumeration is invalid.
    pub fn from_inputs<S: KeyValueStore>(
        inputs: &Inputs<S>,
        report: &ResolutionReport,
    ) -> Result<Self> {
        let required = |key: InputKey| -> Result<String> {
            inputs
                .get_opt(key)
                .ok_or(Error::EmptyResolvedField { key })
        };
        let list = |key: InputKey| -> Vec<String> {
            inputs.get_opt(key).map(|raw| parse_list(&raw)).unwrap_or_default()
        };

        Ok(Self {
            add: list(InputKey::Add),
            remove: list(InputKey::Remove),
            author: Identity::new(
                required(InputKey::AuthorName)?,
                required(InputKey::AuthorEmail)?,
            ),
            committer: Identity::new(
                required(InputKey::CommitterName)?,
                required(InputKey::CommitterEmail)?,
            ),
            message: required(InputKey::Message)?,
            default_author: required(InputKey::DefaultAuthor)?.parse()?,
            pathspec_error_handling: required(InputKey::PathspecErrorHandling)?.parse()?,
            fetch: report.fetch.clone(),
            push: report.push.clone(),
            pull: inputs.get_opt(InputKey::Pull),
            commit: inputs.get_opt(InputKey::Commit),
            new_branch: inputs.get_opt(InputKey::NewBranch),
            tag: inputs.get_opt(InputKey::Tag),
            tag_push: inputs.get_opt(InputKey::TagPush),
            cwd: inputs.get_opt(InputKey::Cwd).unwrap_or_else(|| ".".to_string()),
            target_ref: report.target_ref.clone(),
            has_token: inputs.is_set(InputKey::GithubToken),
        })
    }
}
