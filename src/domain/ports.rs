use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem operations the command needs.
pub trait MarkerStore {
    /// Creates `dir` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, dir: &Path) -> Result<()>;

    /// Writes the marker into `dir` and returns the marker path.
    fn write_marker(&self, dir: &Path) -> Result<PathBuf>;
}
