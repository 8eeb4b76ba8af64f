pub mod assets;
pub mod git;
pub mod github;
pub mod repository_filesystem;
