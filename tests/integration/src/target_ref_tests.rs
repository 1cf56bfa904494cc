//! Target ref resolution against real repositories.

use std::path::Path;

use commit_core::{
    CommitPlan, ConfigValidator, DiagnosticKind, Inputs, MemoryStore, NoLookup, RunnerContext,
};
use commit_test_utils::env::RunnerEnv;
use commit_test_utils::git::{real_git_repo_on_branch, real_git_repo_with_commit};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn env_in(cwd: &Path) -> RunnerEnv {
    RunnerEnv::new()
        .input("add", ".")
        .input("cwd", cwd.to_str().unwrap())
        .input("github_token", "ghs_test")
        .actor("octocat")
}

async fn target_ref(env: &RunnerEnv) -> Option<String> {
    let mut inputs = Inputs::new(MemoryStore::from_vars(env.vars()));
    inputs.apply_manifest_defaults();
    let context = RunnerContext::from_vars(env.vars());
    let (config, _) = ConfigValidator::new(&context, &NoLookup)
        .validate(&mut inputs)
        .await
        .unwrap();
    config.target_ref
}

#[tokio::test]
async fn test_branch_of_repository_at_cwd() {
    let temp = TempDir::new().unwrap();
    real_git_repo_with_commit(temp.path(), "release/2.x");

    assert_eq!(target_ref(&env_in(temp.path())).await.as_deref(), Some("release/2.x"));
}

#[tokio::test]
async fn test_unborn_branch_is_still_a_target() {
    let temp = TempDir::new().unwrap();
    real_git_repo_on_branch(temp.path(), "trunk");

    assert_eq!(target_ref(&env_in(temp.path())).await.as_deref(), Some("trunk"));
}

#[tokio::test]
async fn test_cwd_subdirectory_discovers_repository() {
    let temp = TempDir::new().unwrap();
    real_git_repo_with_commit(temp.path(), "main");
    let nested = temp.path().join("packages").join("web");
    std::fs::create_dir_all(&nested).unwrap();

    assert_eq!(target_ref(&env_in(&nested)).await.as_deref(), Some("main"));
}

#[tokio::test]
async fn test_runner_ref_beats_repository() {
    let temp = TempDir::new().unwrap();
    real_git_repo_with_commit(temp.path(), "main");
    let env = env_in(temp.path()).var("GITHUB_REF", "refs/heads/develop");

    assert_eq!(target_ref(&env).await.as_deref(), Some("develop"));
}

#[tokio::test]
async fn test_pull_request_head_ref_beats_merge_ref() {
    let temp = TempDir::new().unwrap();
    let env = env_in(temp.path())
        .var("GITHUB_REF", "refs/pull/42/merge")
        .var("GITHUB_HEAD_REF", "feature/login");

    assert_eq!(target_ref(&env).await.as_deref(), Some("feature/login"));
}

#[tokio::test]
async fn test_tag_ref_falls_back_to_repository() {
    let temp = TempDir::new().unwrap();
    real_git_repo_with_commit(temp.path(), "main");
    let env = env_in(temp.path()).var("GITHUB_REF", "refs/tags/v1.0.0");

    assert_eq!(target_ref(&env).await.as_deref(), Some("main"));
}

#[tokio::test]
async fn test_new_branch_overrides_everything() {
    let temp = TempDir::new().unwrap();
    real_git_repo_with_commit(temp.path(), "main");
    let env = env_in(temp.path())
        .var("GITHUB_REF", "refs/heads/develop")
        .input("new_branch", "bot/bump")
        .input("fetch", "true");

    let mut inputs = Inputs::new(MemoryStore::from_vars(env.vars()));
    inputs.apply_manifest_defaults();
    let context = RunnerContext::from_vars(env.vars());
    let (config, report) = ConfigValidator::new(&context, &NoLookup)
        .validate(&mut inputs)
        .await
        .unwrap();

    assert_eq!(config.target_ref.as_deref(), Some("bot/bump"));
    assert!(!report.has(DiagnosticKind::RiskyCombination));

    let plan = CommitPlan::from_config(&config);
    let first: Vec<&str> = plan.steps.iter().take(2).map(|s| s.subcommand()).collect();
    assert_eq!(first, vec!["fetch", "checkout"]);
}
