//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_extractor` library that handles:
//! - Command-line argument parsing
//! - Logger and suffix list initialization
//! - Interactive prompts
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use domain_extractor::app::{print_summary, resolve_config};
use domain_extractor::initialization::{init_extractor, init_logger_with};
use domain_extractor::{run_extraction, ExtractionError, Opt};

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    // The suffix list must be usable before anything is asked or read
    let extractor = match init_extractor() {
        Ok(extractor) => extractor,
        Err(e) => {
            eprintln!("{}", format!("\u{1F6A8} Configuration error: {e}").red());
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let current_dir = std::env::current_dir().context("Failed to determine working directory")?;
    let result = resolve_config(opt, &current_dir, &mut input, &mut stdout)
        .and_then(|config| run_extraction(&config, &extractor, &mut stdout));

    match result {
        Ok(report) => {
            print_summary(&report, &mut stdout).context("Failed to print summary")?;
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e).red());
            process::exit(1);
        }
    }
}

/// Formats a fatal error the way the operator sees it.
fn failure_message(err: &ExtractionError) -> String {
    match err {
        ExtractionError::NoCsvFiles(_) => "No CSV files found in the current directory.".to_string(),
        ExtractionError::InputNotFound(path) => format!(
            "\u{1F50D} Error: The file '{}' was not found.",
            path.display()
        ),
        ExtractionError::InputRead { .. } => {
            format!("\u{1F6A8} An unexpected error occurred: {err}")
        }
        ExtractionError::OutputWrite { source, .. } => {
            format!("\u{274C} Failed to write to file: {source}")
        }
        ExtractionError::Console(_) | ExtractionError::InputClosed(_) => {
            format!("\u{1F6A8} {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_failure_message_input_not_found() {
        let msg = failure_message(&ExtractionError::InputNotFound(PathBuf::from("x.csv")));
        assert_eq!(msg, "\u{1F50D} Error: The file 'x.csv' was not found.");
    }

    #[test]
    fn test_failure_message_output_write() {
        let msg = failure_message(&ExtractionError::OutputWrite {
            path: PathBuf::from("out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        });
        assert_eq!(msg, "\u{274C} Failed to write to file: permission denied");
    }

    #[test]
    fn test_failure_message_no_csv_files() {
        let msg = failure_message(&ExtractionError::NoCsvFiles(PathBuf::from(".")));
        assert_eq!(msg, "No CSV files found in the current directory.");
    }
}
