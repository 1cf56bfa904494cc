//! The fixed set of recognized inputs and outputs.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Declared shape of an input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free-form string
    String,
    /// Boolean flag, `true`/`false` in any of the YAML 1.2 core spellings
    Flag,
}

/// An input recognized by the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputKey {
    Add,
    AuthorName,
    AuthorEmail,
    Commit,
    CommitterName,
    CommitterEmail,
    Cwd,
    DefaultAuthor,
    Fetch,
    Message,
    NewBranch,
    PathspecErrorHandling,
    Pull,
    Push,
    Remove,
    Tag,
    TagPush,
    GithubToken,
}

impl InputKey {
    /// Every input, in declaration order.
    pub const ALL: [InputKey; 18] = [
        InputKey::Add,
        InputKey::AuthorName,
        InputKey::AuthorEmail,
        InputKey::Commit,
        InputKey::CommitterName,
        InputKey::CommitterEmail,
        InputKey::Cwd,
        InputKey::DefaultAuthor,
        InputKey::Fetch,
        InputKey::Message,
        InputKey::NewBranch,
        InputKey::PathspecErrorHandling,
        InputKey::Pull,
        InputKey::Push,
        InputKey::Remove,
        InputKey::Tag,
        InputKey::TagPush,
        InputKey::GithubToken,
    ];

    /// The input name as written in the action manifest.
    pub fn name(&self) -> &'static str {
        match self {
            InputKey::Add => "add",
            InputKey::AuthorName => "author_name",
            InputKey::AuthorEmail => "author_email",
            InputKey::Commit => "commit",
            InputKey::CommitterName => "committer_name",
            InputKey::CommitterEmail => "committer_email",
            InputKey::Cwd => "cwd",
            InputKey::DefaultAuthor => "default_author",
            InputKey::Fetch => "fetch",
            InputKey::Message => "message",
            InputKey::NewBranch => "new_branch",
            InputKey::PathspecErrorHandling => "pathspec_error_handling",
            InputKey::Pull => "pull",
            InputKey::Push => "push",
            InputKey::Remove => "remove",
            InputKey::Tag => "tag",
            InputKey::TagPush => "tag_push",
            InputKey::GithubToken => "github_token",
        }
    }

    /// Name of the backing entry, e.g. `INPUT_AUTHOR_NAME`.
    pub fn env_var(&self) -> String {
        format!("INPUT_{}", self.name().to_uppercase())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            InputKey::Fetch | InputKey::Push => ValueKind::Flag,
            _ => ValueKind::String,
        }
    }

    /// Default declared by the action manifest, applied when the host
    /// provides nothing for the key.
    pub fn manifest_default(&self) -> Option<&'static str> {
        match self {
            InputKey::Cwd => Some("."),
            InputKey::DefaultAuthor => Some("github_actor"),
            InputKey::PathspecErrorHandling => Some("ignore"),
            InputKey::Push => Some("true"),
            _ => None,
        }
    }
}

impl FromStr for InputKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().replace([' ', '-'], "_").to_lowercase();
        let normalized = normalized.strip_prefix("input_").unwrap_or(&normalized);
        InputKey::ALL
            .into_iter()
            .find(|key| key.name() == normalized)
            .ok_or_else(|| Error::UnknownInput {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A result value published to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputKey {
    Committed,
    CommitLongSha,
    CommitSha,
    Pushed,
    Tagged,
    TagPushed,
}

impl OutputKey {
    pub const ALL: [OutputKey; 6] = [
        OutputKey::Committed,
        OutputKey::CommitLongSha,
        OutputKey::CommitSha,
        OutputKey::Pushed,
        OutputKey::Tagged,
        OutputKey::TagPushed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputKey::Committed => "committed",
            OutputKey::CommitLongSha => "commit_long_sha",
            OutputKey::CommitSha => "commit_sha",
            OutputKey::Pushed => "pushed",
            OutputKey::Tagged => "tagged",
            OutputKey::TagPushed => "tag_pushed",
        }
    }

    /// Safe startup value: `false` for flags, absent for shas.
    pub fn initial_value(&self) -> Option<&'static str> {
        match self {
            OutputKey::CommitLongSha | OutputKey::CommitSha => None,
            _ => Some("false"),
        }
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
