//! Builder for the environment a workflow step sees.

use std::collections::BTreeMap;
use std::process::Command;

/// `INPUT_*` and `GITHUB_*` variables for one simulated step.
///
/// # Example
///
/// ```rust
/// use commit_test_utils::env::RunnerEnv;
///
/// let env = RunnerEnv::new()
///     .input("add", "src")
///     .actor("octocat");
/// assert!(env.vars().contains(&("INPUT_ADD".to_string(), "src".to_string())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunnerEnv {
    vars: BTreeMap<String, String>,
}

impl RunnerEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an input by its manifest name (`author_name`, `tag_push`, ...).
    pub fn input(mut self, name: &str, value: &str) -> Self {
        self.vars
            .insert(format!("INPUT_{}", name.to_uppercase()), value.to_string());
        self
    }

    /// Set an arbitrary variable.
    pub fn var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn actor(self, actor: &str) -> Self {
        self.var("GITHUB_ACTOR", actor)
    }

    pub fn workflow(self, workflow: &str) -> Self {
        self.var("GITHUB_WORKFLOW", workflow)
    }

    pub fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Replace the environment of `command` with these variables, keeping
    /// only `PATH` and `HOME` from the parent process.
    pub fn apply(&self, command: &mut Command) {
        command.env_clear();
        for name in ["PATH", "HOME"] {
            if let Ok(value) = std::env::var(name) {
                command.env(name, value);
            }
        }
        command.envs(&self.vars);
    }
}
