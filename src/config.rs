use std::path::{Path, PathBuf};

use crate::git::{self, Branch};
use crate::store::files::TodoStore;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "GIT_TODO_LOG";

/// Resolved runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub dir: PathBuf,
    pub branch: Branch,
}

impl Config {
    /// Resolve the branch checked out at `dir`.
    pub fn resolve(dir: &Path) -> Self {
        let branch = git::current_branch(dir);
        if branch.is_unknown() {
            tracing::info!("branch lookup failed, using '{}'", branch.name());
        }
        Self {
            dir: dir.to_path_buf(),
            branch,
        }
    }

    pub fn store(&self) -> TodoStore {
        TodoStore::for_branch(&self.dir, &self.branch)
    }
}

/// Log filter from `GIT_TODO_LOG`. Returns `None` if unset or empty.
pub fn log_filter() -> Option<String> {
    std::env::var(LOG_ENV).ok().filter(|s| !s.is_empty())
}
