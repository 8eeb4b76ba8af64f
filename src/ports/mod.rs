mod git;
mod github;
mod repository_filesystem;

pub use git::Git;
pub use github::GitHub;
pub use repository_filesystem::RepositoryFilesystem;

/// A file produced from embedded assets, ready to be written under the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: String,
    pub content: String,
}
