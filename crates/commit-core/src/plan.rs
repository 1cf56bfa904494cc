//! The git commands a resolved configuration translates to.
//!
//! Building a plan never runs anything; it spells out, in order, the
//! argument vectors the downstream process is expected to execute.

use std::fmt;

use serde::Serialize;

use crate::args::tokenize;
use crate::config::{GitArg, PathspecErrorHandling, ResolvedConfig};

/// One git invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitCommand {
    /// Arguments after `git`
    pub args: Vec<String>,
    /// Policy for unmatched pathspecs, set on `add`/`rm` steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathspec_error_handling: Option<PathspecErrorHandling>,
}

impl GitCommand {
    fn new<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            pathspec_error_handling: None,
        }
    }

    fn with_pathspec_policy(mut self, policy: PathspecErrorHandling) -> Self {
        self.pathspec_error_handling = Some(policy);
        self
    }

    fn extend(mut self, extra: Vec<String>) -> Self {
        self.args.extend(extra);
        self
    }

    pub fn subcommand(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
                write!(f, " '{}'", arg.replace('\'', r"'\''"))?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Ordered git commands for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitPlan {
    pub steps: Vec<GitCommand>,
}

impl CommitPlan {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut steps = Vec::new();

        if let Some(fetch) = config.fetch.as_ref().filter(|f| f.enabled()) {
            steps.push(GitCommand::new(["fetch"]).extend(fetch.args()));
        }

        if let Some(branch) = &config.new_branch {
            steps.push(GitCommand::new(["checkout", "-b", branch.as_str()]));
        }

        if let Some(pull) = &config.pull {
            steps.push(GitCommand::new(["pull"]).extend(tokenize(pull)));
        }

        for entry in &config.add {
            steps.push(
                GitCommand::new(["add"])
                    .extend(tokenize(entry))
                    .with_pathspec_policy(config.pathspec_error_handling),
            );
        }
        for entry in &config.remove {
            steps.push(
                GitCommand::new(["rm"])
                    .extend(tokenize(entry))
                    .with_pathspec_policy(config.pathspec_error_handling),
            );
        }

        steps.push(GitCommand::new([
            "config",
            "user.name",
            config.committer.name.as_str(),
        ]));
        steps.push(GitCommand::new([
            "config",
            "user.email",
            config.committer.email.as_str(),
        ]));

        let author = format!("--author={}", config.author);
        steps.push(
            GitCommand::new(["commit", "-m", config.message.as_str(), author.as_str()])
                .extend(config.commit.as_deref().map(tokenize).unwrap_or_default()),
        );

        if let Some(tag) = &config.tag {
            steps.push(GitCommand::new(["tag"]).extend(tokenize(tag)));
        }

        match &config.push {
            Some(GitArg::Flag(true)) => {
                let mut args = vec!["push".to_string(), "origin".to_string()];
                args.extend(config.target_ref.clone());
                args.push("--set-upstream".to_string());
                steps.push(GitCommand::new(args));
            }
            Some(push @ GitArg::Args(_)) => {
                steps.push(GitCommand::new(["push"]).extend(push.args()));
            }
            Some(GitArg::Flag(false)) | None => {}
        }

        let push_enabled = config.push.as_ref().is_some_and(GitArg::enabled);
        if config.tag.is_some() && push_enabled {
            steps.push(
                GitCommand::new(["push", "origin", "--tags"])
                    .extend(config.tag_push.as_deref().map(tokenize).unwrap_or_default()),
            );
        }

        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for CommitPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}
