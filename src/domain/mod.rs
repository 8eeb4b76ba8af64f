pub mod config;
pub mod error;
pub mod remote_url;
pub mod workflow;

pub use config::BootstrapConfig;
pub use error::AppError;
pub use remote_url::{RepositoryUrl, normalize_remote_url};
