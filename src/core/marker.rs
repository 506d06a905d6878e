use crate::domain::model::{MARKER_CONTENT, MARKER_FILE_NAME};
use crate::utils::error::{IgnoreError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn marker_path(dir: &Path) -> PathBuf {
    dir.join(MARKER_FILE_NAME)
}

/// Writes `<dir>/.RESTIC-IGNORE`, truncating any existing file.
pub fn write_marker(dir: &Path) -> Result<PathBuf> {
    let path = marker_path(dir);
    tracing::info!(path = %path.display(), "create");

    if let Err(source) = write_file(&path, MARKER_CONTENT) {
        tracing::error!(error = %source, path = %path.display(), "failed to create file");
        return Err(IgnoreError::WriteMarker { path, source });
    }
    Ok(path)
}

fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.write_all(data)
}
