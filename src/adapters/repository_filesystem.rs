use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// `RepositoryFilesystem` rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalRepositoryFilesystem {
    root: PathBuf,
}

impl LocalRepositoryFilesystem {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl RepositoryFilesystem for LocalRepositoryFilesystem {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve(path))?;
        Ok(())
    }
}
