//! Git repository fixtures.
//!
//! Every fixture uses `git2` only, so tests do not depend on a `git` binary
//! or on the machine's `init.defaultBranch` setting.

use std::fs;
use std::path::Path;

use git2::{Repository, RepositoryInitOptions, Signature};

/// Initialises a real git repository whose `HEAD` points at `branch`, with
/// no commits (the branch is unborn).
///
/// # Panics
/// Panics if `git2::Repository::init_opts` fails.
pub fn real_git_repo_on_branch(path: &Path, branch: &str) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(branch);
    Repository::init_opts(path, &opts).unwrap_or_else(|e| {
        panic!(
            "real_git_repo_on_branch: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a real git repository on `branch` with one commit
/// containing `README.md`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path, branch: &str) -> Repository {
    let repo = real_git_repo_on_branch(path, branch);

    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to write README.md: {e}"));

    {
        let mut index = repo
            .index()
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: no index: {e}"));
        index
            .add_path(Path::new("README.md"))
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: add failed: {e}"));
        index
            .write()
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: index write failed: {e}"));
        let tree_id = index
            .write_tree()
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: write_tree failed: {e}"));
        let tree = repo
            .find_tree(tree_id)
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: find_tree failed: {e}"));
        let signature = Signature::now("Test User", "test@test.com")
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: bad signature: {e}"));
        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            "Initial commit",
            &tree,
            &[],
        )
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: commit failed: {e}"));
    }

    repo
}
