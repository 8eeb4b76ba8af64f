//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::git::GitCommandAdapter;
use crate::adapters::github::GitHubCommandAdapter;
use crate::adapters::repository_filesystem::LocalRepositoryFilesystem;
use crate::app::{AppContext, commands, config::load_config};
use crate::domain::workflow::WORKFLOW_FILE_NAME;

pub use crate::app::commands::bootstrap::{BootstrapOptions, BootstrapReport};
pub use crate::app::commands::dispatch::DispatchOutcome;
pub use crate::app::commands::publish::CommitOutcome;
pub use crate::domain::{AppError, BootstrapConfig, RepositoryUrl};

/// Command-line adjustments applied on top of `devsync.toml`.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOverrides {
    /// Alternate configuration file.
    pub config: Option<PathBuf>,
    /// Skip the dispatch step regardless of configuration.
    pub no_dispatch: bool,
    /// Remote to resolve instead of the configured one.
    pub remote: Option<String>,
}

/// Create an `AppContext` backed by the real filesystem, `git`, and `gh`.
fn create_context(
    path: PathBuf,
) -> AppContext<LocalRepositoryFilesystem, GitCommandAdapter, GitHubCommandAdapter> {
    let repository = LocalRepositoryFilesystem::new(path.clone());
    let git = GitCommandAdapter::new(path);
    AppContext::new(repository, git, GitHubCommandAdapter::new())
}

/// Resolve effective bootstrap options for a repository.
pub fn resolve_options(
    path: &Path,
    overrides: &BootstrapOverrides,
) -> Result<BootstrapOptions, AppError> {
    let repository = LocalRepositoryFilesystem::new(path.to_path_buf());
    let mut options: BootstrapOptions =
        load_config(&repository, overrides.config.as_deref())?.into();

    if overrides.no_dispatch {
        options.dispatch = false;
    }
    if let Some(remote) = &overrides.remote {
        options.remote = remote.clone();
    }
    Ok(options)
}

/// Run the full bootstrap in the current directory.
pub fn bootstrap(overrides: &BootstrapOverrides) -> Result<BootstrapReport, AppError> {
    bootstrap_at(std::env::current_dir()?, overrides)
}

/// Run the full bootstrap in the repository at `path`.
pub fn bootstrap_at(
    path: impl Into<PathBuf>,
    overrides: &BootstrapOverrides,
) -> Result<BootstrapReport, AppError> {
    let path = path.into();
    let options = resolve_options(&path, overrides)?;
    let ctx = create_context(path);
    commands::bootstrap::execute(&ctx, &options)
}

/// Write the workflow file in the current directory without touching git.
pub fn emit() -> Result<String, AppError> {
    emit_at(std::env::current_dir()?)
}

/// Write the workflow file under `path` without touching git.
pub fn emit_at(path: impl Into<PathBuf>) -> Result<String, AppError> {
    let repository = LocalRepositoryFilesystem::new(path.into());
    commands::emit::execute(&repository)
}

/// Dispatch the daily-commit workflow through the GitHub CLI.
pub fn dispatch() -> DispatchOutcome {
    commands::dispatch::execute(&GitHubCommandAdapter::new(), WORKFLOW_FILE_NAME)
}

/// Browsable URL of `remote` for the repository in the current directory.
pub fn repository_url(remote: &str) -> Result<Option<RepositoryUrl>, AppError> {
    Ok(repository_url_at(std::env::current_dir()?, remote))
}

/// Browsable URL of `remote` for the repository at `path`.
pub fn repository_url_at(path: impl Into<PathBuf>, remote: &str) -> Option<RepositoryUrl> {
    commands::repo_url::execute(&GitCommandAdapter::new(path.into()), remote)
}
