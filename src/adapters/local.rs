use crate::core::marker;
use crate::domain::ports::MarkerStore;
use crate::utils::error::{IgnoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `MarkerStore` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl MarkerStore for LocalStore {
    fn create_dir_all(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| IgnoreError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn write_marker(&self, dir: &Path) -> Result<PathBuf> {
        marker::write_marker(dir)
    }
}
