//! Stage, commit, and push the generated workflow.

use tracing::info;

use crate::domain::AppError;
use crate::ports::Git;

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub path: String,
    pub message: String,
}

/// Run `git add`, `git commit`, and `git push` in order.
///
/// The first failure aborts the sequence. Earlier steps are not undone: a
/// failed push leaves the local commit in place.
pub fn execute(git: &impl Git, path: &str, message: &str) -> Result<CommitOutcome, AppError> {
    git.add(path)?;
    git.commit(message)?;
    git.push()?;

    info!(path, "workflow committed and pushed");
    Ok(CommitOutcome { path: path.to_string(), message: message.to_string() })
}
