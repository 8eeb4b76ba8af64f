use std::io;

use thiserror::Error;

/// Library-wide error type for devsync operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// `devsync.toml` could not be parsed.
    #[error("Failed to parse devsync.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    Git { command: String, details: String },

    /// An external tool ran but reported failure.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// An external tool is not installed or not on PATH.
    #[error("'{tool}' was not found on PATH")]
    ToolNotFound { tool: String },

    /// The requested git remote is not configured.
    #[error("Remote '{0}' is not configured")]
    RemoteNotFound(String),

    /// Embedded asset or rendering failure.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::ConfigParse(_) => io::ErrorKind::InvalidInput,
            AppError::ToolNotFound { .. } | AppError::RemoteNotFound(_) => io::ErrorKind::NotFound,
            AppError::Git { .. }
            | AppError::ExternalToolError { .. }
            | AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }
}
