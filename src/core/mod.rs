pub mod command;
pub mod marker;

pub use crate::domain::model::{RunOptions, RunSummary, MARKER_CONTENT, MARKER_FILE_NAME};
pub use crate::domain::ports::MarkerStore;
pub use crate::utils::error::Result;
