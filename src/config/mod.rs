//! Application configuration and constants.
//!
//! This module provides:
//! - Pipeline constants (patterns, character sets, intervals)
//! - CLI option types and parsing
//! - Library configuration

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
