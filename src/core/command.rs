use crate::core::{MarkerStore, RunOptions, RunSummary};
use crate::utils::error::Result;
use std::path::Path;

/// Marks each directory argument with the ignore file.
pub struct MarkIgnore<S: MarkerStore> {
    store: S,
    options: RunOptions,
}

impl<S: MarkerStore> MarkIgnore<S> {
    pub fn new(store: S, options: RunOptions) -> Self {
        Self { store, options }
    }

    /// Processes `directories` in order.
    ///
    /// A directory that cannot be created is logged and the marker write is still attempted.
    /// The first marker write that fails stops the run and is returned.
    pub fn run<P: AsRef<Path>>(&self, directories: &[P]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        tracing::debug!(
            args = ?directories.iter().map(|d| d.as_ref().display().to_string()).collect::<Vec<_>>(),
            dry_run = self.options.dry_run
        );

        for dir in directories {
            let dir = dir.as_ref();
            tracing::debug!(directory = %dir.display());
            if self.options.dry_run {
                continue;
            }

            if let Err(e) = self.store.create_dir_all(dir) {
                tracing::error!(error = %e, directory = %dir.display(), "failed to create a directory");
                summary.create_failures.push(e);
            }

            let marker = self.store.write_marker(dir)?;
            summary.marked.push(marker);
        }

        Ok(summary)
    }
}
