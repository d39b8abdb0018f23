use std::path::PathBuf;

use crate::error::{GateError, Result};

/// Supplies the commit message to check when the hook gets no message
/// file argument.
pub trait CommitMessageSource {
    /// Get the message of the latest non-merge commit.
    ///
    /// # Errors
    /// Returns an error if no repository is found or HEAD cannot be read.
    fn latest_message(&self) -> Result<String>;
}

/// Commit message lookup via gix, equivalent to
/// `git log --no-merges --format=%B -n1`.
pub struct GitLog {
    start: PathBuf,
}

impl GitLog {
    /// Create a `GitLog` that discovers the repository containing `start`.
    #[must_use]
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }
}

impl CommitMessageSource for GitLog {
    fn latest_message(&self) -> Result<String> {
        let repo = gix::discover(&self.start)
            .map_err(|e| GateError::Git(format!("Failed to discover git repository: {e}")))?;

        let mut commit = repo
            .head_commit()
            .map_err(|e| GateError::Git(format!("Failed to resolve HEAD commit: {e}")))?;

        // First-parent walk until a non-merge commit is found.
        while commit.parent_ids().count() > 1 {
            let parent_id = commit
                .parent_ids()
                .next()
                .ok_or_else(|| GateError::Git("Merge commit has no parent".into()))?;
            commit = parent_id
                .object()
                .map_err(|e| GateError::Git(format!("Failed to read parent commit: {e}")))?
                .peel_to_commit()
                .map_err(|e| GateError::Git(format!("Failed to peel to commit: {e}")))?;
        }

        let message = commit
            .message_raw()
            .map_err(|e| GateError::Git(format!("Failed to read commit message: {e}")))?;

        Ok(String::from_utf8_lossy(message).into_owned())
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
