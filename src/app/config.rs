//! Bootstrap configuration loading from the repository.

use std::path::Path;

use tracing::debug;

use crate::domain::config::CONFIG_FILE;
use crate::domain::{AppError, BootstrapConfig};
use crate::ports::RepositoryFilesystem;

/// Load `devsync.toml`.
///
/// With no explicit path, a missing root-level `devsync.toml` yields the
/// defaults. An explicit path must exist.
pub fn load_config<W: RepositoryFilesystem>(
    repository: &W,
    explicit: Option<&Path>,
) -> Result<BootstrapConfig, AppError> {
    let config_path = match explicit {
        Some(path) => path.to_str().ok_or_else(|| {
            AppError::config_error(format!(
                "Config path contains invalid unicode: {}",
                path.display()
            ))
        })?,
        None => CONFIG_FILE,
    };

    if !repository.file_exists(config_path) {
        if explicit.is_some() {
            return Err(AppError::config_error(format!("Config file not found: {}", config_path)));
        }
        debug!("no {} found, using defaults", CONFIG_FILE);
        return Ok(BootstrapConfig::default());
    }

    let content = repository.read_file(config_path)?;
    BootstrapConfig::parse(&content)
}
