//! Remote URL normalization.
//!
//! A remote's configured URL may be an SSH-style address
//! (`git@github.com:owner/repo.git`). Operators want a link they can open in a
//! browser, so SSH addresses are rewritten to their HTTPS form. Anything else
//! is passed through untouched.

use std::fmt;

const GITHUB_SSH_PREFIX: &str = "git@github.com:";
const GITHUB_HTTPS_PREFIX: &str = "https://github.com/";
const GIT_SUFFIX: &str = ".git";

/// Rewrite a GitHub SSH remote into its browsable HTTPS form.
pub fn normalize_remote_url(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.strip_prefix(GITHUB_SSH_PREFIX) {
        Some(path) => {
            let path = path.strip_suffix(GIT_SUFFIX).unwrap_or(path);
            format!("{}{}", GITHUB_HTTPS_PREFIX, path)
        }
        None => trimmed.to_string(),
    }
}

/// Browsable URL of the repository hosting the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl(String);

impl RepositoryUrl {
    /// Build from a remote's raw configured URL. Returns `None` for blank output.
    pub fn from_remote(raw: &str) -> Option<Self> {
        let normalized = normalize_remote_url(raw);
        if normalized.is_empty() { None } else { Some(Self(normalized)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the repository's Actions tab. The repository URL is kept as printed.
    pub fn actions_page(&self) -> String {
        format!("{}/actions", self.0.trim_end_matches('/'))
    }
}

impl fmt::Display for RepositoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
