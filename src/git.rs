use std::path::Path;

use git2::Repository;

/// Placeholder branch name used when the lookup fails.
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Result of resolving the current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    Named(String),
    /// Not a repository, unborn HEAD, or any other lookup failure.
    Unknown,
}

impl Branch {
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Unknown => UNKNOWN_BRANCH,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Resolve the branch checked out in the repository containing `dir`.
///
/// A detached HEAD resolves to `HEAD`, like `git rev-parse --abbrev-ref HEAD`.
pub fn current_branch(dir: &Path) -> Branch {
    let repo = match Repository::discover(dir) {
        Ok(repo) => repo,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "not inside a git repository");
            return Branch::Unknown;
        }
    };
    let head = match repo.head() {
        Ok(head) => head,
        Err(err) => {
            tracing::debug!(error = %err, "HEAD does not resolve");
            return Branch::Unknown;
        }
    };
    match head.shorthand() {
        Some(name) if !name.is_empty() => Branch::Named(name.to_string()),
        _ => Branch::Unknown,
    }
}
