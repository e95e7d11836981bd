//! Main application modules.
//!
//! This module provides the interactive prompts, progress logging and summary
//! output used by the main application.

pub mod logging;
pub mod prompt;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use prompt::{list_csv_files, resolve_config, select_file};
pub use statistics::{log_statistics, print_summary};
