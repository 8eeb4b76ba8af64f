use crate::ports::{Git, GitHub, RepositoryFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: RepositoryFilesystem, G: Git, H: GitHub> {
    repository: R,
    git: G,
    github: H,
}

impl<R: RepositoryFilesystem, G: Git, H: GitHub> AppContext<R, G, H> {
    /// Create a new application context.
    pub fn new(repository: R, git: G, github: H) -> Self {
        Self { repository, git, github }
    }

    /// Get a reference to the repository filesystem.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Get a reference to the git port.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get a reference to the GitHub port.
    pub fn github(&self) -> &H {
        &self.github
    }
}
