//! Author and committer identities.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Name of the GitHub Actions bot account.
pub const ACTIONS_BOT_NAME: &str = "github-actions";

/// Noreply address of the GitHub Actions bot account.
pub const ACTIONS_BOT_EMAIL: &str = "41898282+github-actions[bot]@users.noreply.github.com";

/// A name/email pair attributed to a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The actor's handle and their GitHub noreply address.
    pub fn github_actor(actor: &str) -> Self {
        Self::new(actor, actor_email(actor))
    }

    /// The GitHub Actions bot.
    pub fn github_actions() -> Self {
        Self::new(ACTIONS_BOT_NAME, ACTIONS_BOT_EMAIL)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Noreply address for a GitHub handle.
pub fn actor_email(actor: &str) -> String {
    format!("{actor}@users.noreply.github.com")
}

/// Public profile fields returned by a user lookup. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Resolves a username to profile information.
///
/// Implementations swallow their own failures: an unreachable service or an
/// unknown user is `None`, never an error.
#[async_trait]
pub trait IdentityLookup: Send + Sync {
    async fn user_info(&self, username: &str) -> Option<UserInfo>;
}

/// Lookup that never finds anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

#[async_trait]
impl IdentityLookup for NoLookup {
    async fn user_info(&self, _username: &str) -> Option<UserInfo> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_actor_uses_noreply_address() {
        let identity = Identity::github_actor("octocat");
        assert_eq!(identity.name, "octocat");
        assert_eq!(identity.email, "octocat@users.noreply.github.com");
    }

    #[test]
    fn github_actions_is_the_bot() {
        assert_eq!(
            Identity::github_actions().to_string(),
            "github-actions <41898282+github-actions[bot]@users.noreply.github.com>"
        );
    }

    #[test]
    fn user_info_tolerates_missing_fields() {
        let info: UserInfo = serde_json::from_str(r#"{"email": "x@y.com"}"#).unwrap();
        assert_eq!(info.name, None);
        assert_eq!(info.email.as_deref(), Some("x@y.com"));
    }

    #[tokio::test]
    async fn no_lookup_finds_nothing() {
        assert_eq!(NoLookup.user_info("octocat").await, None);
    }
}
