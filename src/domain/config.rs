//! `devsync.toml` configuration model.

use serde::Deserialize;

use super::workflow::{DEFAULT_COMMIT_MESSAGE, DEFAULT_REMOTE};
use super::AppError;

/// Configuration file name, looked up at the repository root.
pub const CONFIG_FILE: &str = "devsync.toml";

/// Settings for the bootstrap sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Remote whose URL is shown to the operator.
    pub remote: String,
    /// Whether to dispatch the workflow after pushing.
    pub dispatch: bool,
    /// Message for the commit that adds the workflow file.
    pub commit_message: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            dispatch: true,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Parse configuration text. Omitted keys take their defaults.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: BootstrapConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.remote.trim().is_empty() {
            return Err(AppError::config_error("devsync.toml: 'remote' must not be empty"));
        }
        if self.commit_message.trim().is_empty() {
            return Err(AppError::config_error("devsync.toml: 'commit_message' must not be empty"));
        }
        Ok(())
    }
}
