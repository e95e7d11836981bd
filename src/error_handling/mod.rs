//! Error handling.
//!
//! Errors are split by phase:
//! - **Initialization**: logger and public suffix list set-up, before any input
//!   is touched
//! - **Extraction**: everything from picking the input file to persisting the
//!   output

mod types;

// Re-export public API
pub use types::{ExtractionError, InitializationError};
