//! Browsable repository URL lookup.

use tracing::{debug, warn};

use crate::domain::RepositoryUrl;
use crate::ports::Git;

/// Resolve the browsable URL of `remote`.
///
/// Any failure (unknown remote, git error, blank output) yields `None`.
pub fn execute(git: &impl Git, remote: &str) -> Option<RepositoryUrl> {
    match git.remote_url(remote) {
        Ok(Some(raw)) => RepositoryUrl::from_remote(&raw),
        Ok(None) => {
            debug!(remote, "remote not configured");
            None
        }
        Err(e) => {
            warn!(remote, error = %e, "could not read remote url");
            None
        }
    }
}
