//! devsync: scaffold a daily-commit GitHub Actions workflow into a repository.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    BootstrapOverrides, BootstrapReport, CommitOutcome, DispatchOutcome, bootstrap, bootstrap_at,
    dispatch, emit, emit_at, repository_url, repository_url_at, resolve_options,
};
pub use app::commands::bootstrap::BootstrapOptions;
pub use domain::{AppError, BootstrapConfig, RepositoryUrl, normalize_remote_url};
