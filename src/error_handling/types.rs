//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The public suffix rule set could not decompose a known domain.
    ///
    /// Raised before any input is read; the extractor would otherwise match
    /// nothing and produce an empty (but "successful") output.
    #[error("Public suffix list unavailable: could not decompose probe domain '{probe}'")]
    SuffixListUnavailableError {
        /// Probe domain that failed to decompose
        probe: String,
    },
}

/// Error types for a single extraction run.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No CSV files were found in the searched directory.
    #[error("No CSV files found in '{}'", .0.display())]
    NoCsvFiles(PathBuf),

    /// The selected input file does not exist.
    #[error("The file '{}' was not found", .0.display())]
    InputNotFound(PathBuf),

    /// The input could not be opened, decoded or parsed as CSV.
    #[error("Failed to read '{}': {source}", .path.display())]
    InputRead {
        /// Input file path
        path: PathBuf,
        /// Underlying CSV error (IO, UTF-8 or structure)
        #[source]
        source: csv::Error,
    },

    /// The output file could not be written or persisted.
    #[error("Failed to write '{}': {source}", .path.display())]
    OutputWrite {
        /// Output file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Writing to the console (prompts, verbose lines) failed.
    #[error("Console IO error: {0}")]
    Console(#[from] io::Error),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message() {
        let err = ExtractionError::InputNotFound(PathBuf::from("missing.csv"));
        assert_eq!(err.to_string(), "The file 'missing.csv' was not found");
    }

    #[test]
    fn test_no_csv_files_message() {
        let err = ExtractionError::NoCsvFiles(PathBuf::from("."));
        assert_eq!(err.to_string(), "No CSV files found in '.'");
    }

    #[test]
    fn test_output_write_keeps_source() {
        use std::error::Error as _;

        let err = ExtractionError::OutputWrite {
            path: PathBuf::from("/nope/out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/nope/out.txt"));
        assert!(err.to_string().contains("denied"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_suffix_list_unavailable_names_probe() {
        let err = InitializationError::SuffixListUnavailableError {
            probe: "example.com".to_string(),
        };
        assert!(err.to_string().contains("example.com"));
    }

    #[test]
    fn test_console_error_from_io() {
        let err: ExtractionError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, ExtractionError::Console(_)));
    }
}
