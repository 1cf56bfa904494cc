//! Information about the workflow run, taken from the runner environment.

use std::collections::HashMap;
use std::path::PathBuf;

/// Runner environment values the resolver depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerContext {
    /// Handle of the user that triggered the run (`GITHUB_ACTOR`)
    pub actor: Option<String>,
    /// Name of the workflow (`GITHUB_WORKFLOW`)
    pub workflow: Option<String>,
    /// Fully-formed ref that triggered the run (`GITHUB_REF`)
    pub git_ref: Option<String>,
    /// Source branch of a pull request (`GITHUB_HEAD_REF`)
    pub head_ref: Option<String>,
    /// REST API base URL (`GITHUB_API_URL`)
    pub api_url: Option<String>,
    /// File that step outputs are appended to (`GITHUB_OUTPUT`)
    pub output_file: Option<PathBuf>,
    /// Whether we run inside GitHub Actions (`GITHUB_ACTIONS=true`)
    pub in_actions: bool,
}

impl RunnerContext {
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let value = |name: &str| {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            actor: value("GITHUB_ACTOR"),
            workflow: value("GITHUB_WORKFLOW"),
            git_ref: value("GITHUB_REF"),
            head_ref: value("GITHUB_HEAD_REF"),
            api_url: value("GITHUB_API_URL"),
            output_file: value("GITHUB_OUTPUT").map(PathBuf::from),
            in_actions: value("GITHUB_ACTIONS").is_some_and(|v| v == "true"),
        }
    }

    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_workflow(mut self, workflow: impl Into<String>) -> Self {
        self.workflow = Some(workflow.into());
        self
    }

    /// Branch name implied by the run: the PR head branch if any, otherwise
    /// `GITHUB_REF` when it names a branch.
    pub fn branch(&self) -> Option<String> {
        if let Some(head) = &self.head_ref {
            return Some(head.clone());
        }
        self.git_ref
            .as_deref()
            .and_then(|r| r.strip_prefix("refs/heads/"))
            .filter(|b| !b.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vars_reads_runner_values() {
        let ctx = RunnerContext::from_vars([
            ("GITHUB_ACTOR", "octocat"),
            ("GITHUB_WORKFLOW", "CI"),
            ("GITHUB_REF", "refs/heads/main"),
            ("GITHUB_OUTPUT", "/tmp/out"),
            ("GITHUB_ACTIONS", "true"),
        ]);
        assert_eq!(ctx.actor.as_deref(), Some("octocat"));
        assert_eq!(ctx.workflow.as_deref(), Some("CI"));
        assert_eq!(ctx.output_file, Some(PathBuf::from("/tmp/out")));
        assert!(ctx.in_actions);
        assert_eq!(ctx.head_ref, None);
    }

    #[test]
    fn blank_values_are_absent() {
        let ctx = RunnerContext::from_vars([("GITHUB_ACTOR", "  "), ("GITHUB_HEAD_REF", "")]);
        assert_eq!(ctx.actor, None);
        assert_eq!(ctx.head_ref, None);
    }

    #[test]
    fn branch_prefers_head_ref() {
        let ctx = RunnerContext::from_vars([
            ("GITHUB_REF", "refs/pull/7/merge"),
            ("GITHUB_HEAD_REF", "feature/x"),
        ]);
        assert_eq!(ctx.branch().as_deref(), Some("feature/x"));
    }

    #[test]
    fn branch_ignores_tags() {
        let ctx = RunnerContext::from_vars([("GITHUB_REF", "refs/tags/v1.0.0")]);
        assert_eq!(ctx.branch(), None);

        let ctx = RunnerContext::from_vars([("GITHUB_REF", "refs/heads/release/2.x")]);
        assert_eq!(ctx.branch().as_deref(), Some("release/2.x"));
    }
}
