//! Repository-level filesystem operations.

use crate::domain::AppError;

/// Port for low-level repository filesystem operations.
///
/// All `path` arguments are relative to the repository root.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, truncating any previous content.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;
}
