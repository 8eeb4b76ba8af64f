use crate::domain::AppError;

/// Version-control operations the bootstrap needs.
///
/// Every method maps to one external `git` invocation. A non-zero exit is
/// reported as `AppError::Git`; nothing is retried or rolled back.
pub trait Git {
    /// Stage a path (relative to the repository root).
    fn add(&self, path: &str) -> Result<(), AppError>;

    /// Create a commit from the index.
    fn commit(&self, message: &str) -> Result<(), AppError>;

    /// Push the current branch to its configured upstream.
    fn push(&self) -> Result<(), AppError>;

    /// URL of a named remote. Returns `None` if the remote is not configured.
    fn remote_url(&self, remote: &str) -> Result<Option<String>, AppError>;
}
