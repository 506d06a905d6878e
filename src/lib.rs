pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStore;
pub use config::{toml_config::FileConfig, CliConfig};
pub use crate::core::command::MarkIgnore;
pub use domain::model::{RunOptions, RunSummary, MARKER_CONTENT, MARKER_FILE_NAME};
pub use utils::error::{IgnoreError, Result};
