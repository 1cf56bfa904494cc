//! Current-branch detection for the working directory.

use std::path::Path;

use git2::Repository;

/// Name of the branch `HEAD` points at in the repository containing `cwd`.
///
/// Works on unborn branches (fresh repositories without commits). Returns
/// `None` for a detached `HEAD` or when `cwd` is not inside a repository.
pub fn current_branch(cwd: &Path) -> Option<String> {
    let repo = match Repository::discover(cwd) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::debug!(cwd = %cwd.display(), error = %e, "No git repository found");
            return None;
        }
    };

    let head = repo.find_reference("HEAD").ok()?;
    let target = head.symbolic_target()?;
    target.strip_prefix("refs/heads/").map(str::to_string)
}
