//! User profile lookup against the GitHub REST API.

use std::time::Duration;

use async_trait::async_trait;
use commit_core::{IdentityLookup, RunnerContext, UserInfo};
use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("commit-action/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct GithubUser {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// `{api_url}/users/{username}`, tolerating a trailing slash on the base.
pub fn users_api_url(api_url: &str, username: &str) -> String {
    format!("{}/users/{username}", api_url.trim_end_matches('/'))
}

fn user_info_from(user: GithubUser) -> UserInfo {
    let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    UserInfo {
        name: present(user.name),
        email: present(user.email),
    }
}

/// [`IdentityLookup`] backed by `GET /users/{username}`.
///
/// Users who keep their email private come back with `email: null`; that
/// is reported as a missing field, not as a failure.
#[derive(Debug, Clone)]
pub struct GithubUserLookup {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GithubUserLookup {
    pub fn new(api_url: Option<&str>, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Client)?;
        Ok(Self::with_client(client, api_url, token))
    }

    pub fn with_client(client: reqwest::Client, api_url: Option<&str>, token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.unwrap_or(DEFAULT_API_URL).to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Lookup for the API the runner points at (`GITHUB_API_URL`).
    pub fn from_context(context: &RunnerContext, token: Option<String>) -> Result<Self> {
        Self::new(context.api_url.as_deref(), token)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn fetch(&self, username: &str) -> Result<UserInfo> {
        let url = users_api_url(&self.api_url, username);
        let request_error = |source| Error::Request {
            url: url.clone(),
            source,
        };

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let user = request
            .send()
            .await
            .map_err(request_error)?
            .error_for_status()
            .map_err(request_error)?
            .json::<GithubUser>()
            .await
            .map_err(request_error)?;
        Ok(user_info_from(user))
    }
}

#[async_trait]
impl IdentityLookup for GithubUserLookup {
    async fn user_info(&self, username: &str) -> Option<UserInfo> {
        let username = username.trim();
        if username.is_empty() {
            return None;
        }
        match self.fetch(username).await {
            Ok(info) => {
                tracing::debug!(username, ?info, "Fetched user info");
                Some(info)
            }
            Err(e) => {
                tracing::warn!("Couldn't fetch user info for '{username}': {e}");
                None
            }
        }
    }
}
