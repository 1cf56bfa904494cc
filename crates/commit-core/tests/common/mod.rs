//! Shared helpers for commit-core integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use commit_core::{IdentityLookup, Inputs, MemoryStore, RunnerContext, UserInfo};
use commit_test_utils::env::RunnerEnv;

/// Lookup that answers from a fixed response and records who was asked.
#[derive(Debug, Default)]
pub struct ScriptedLookup {
    response: Option<UserInfo>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedLookup {
    pub fn answering(name: Option<&str>, email: Option<&str>) -> Self {
        Self {
            response: Some(UserInfo {
                name: name.map(str::to_string),
                email: email.map(str::to_string),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityLookup for ScriptedLookup {
    async fn user_info(&self, username: &str) -> Option<UserInfo> {
        self.calls.lock().unwrap().push(username.to_string());
        self.response.clone()
    }
}

/// Inputs and runner context the way the binary builds them from `env`.
pub fn load(env: &RunnerEnv) -> (Inputs<MemoryStore>, RunnerContext) {
    let vars = env.vars();
    let mut inputs = Inputs::new(MemoryStore::from_vars(vars.clone()));
    inputs.apply_manifest_defaults();
    (inputs, RunnerContext::from_vars(vars))
}
