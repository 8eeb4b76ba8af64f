use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Default)]
pub struct MemoryRepository {
    pub files: Mutex<BTreeMap<String, String>>,
    pub dirs: Mutex<BTreeSet<String>>,
    read_only: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose writes fail with `PermissionDenied`.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    fn deny_if_read_only(&self) -> Result<(), AppError> {
        if self.read_only {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
        }
        Ok(())
    }
}

impl RepositoryFilesystem for MemoryRepository {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.file(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Mock file not found").into())
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.deny_if_read_only()?;
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        self.deny_if_read_only()?;
        self.dirs.lock().unwrap().insert(path.to_string());
        Ok(())
    }
}
