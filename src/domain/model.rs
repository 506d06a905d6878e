use crate::utils::error::IgnoreError;
use std::path::PathBuf;

/// File name the backup agent looks for.
pub const MARKER_FILE_NAME: &str = ".RESTIC-IGNORE";

/// Exact marker payload, no trailing newline.
pub const MARKER_CONTENT: &[u8] = b"restic-ignore: 58B12CA6-717F-4DA1-894A-C3126D8DFB2E";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub dry_run: bool,
    pub verbose: u8,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Marker files written, in argument order.
    pub marked: Vec<PathBuf>,
    /// Directory creation errors that did not stop the run, with path and cause.
    pub create_failures: Vec<IgnoreError>,
}
