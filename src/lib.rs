//! domain_extractor library: domain extraction from CSV files
//!
//! This library scans every field of a CSV file for domain names, drops
//! anything that looks like an email address, normalizes the rest against the
//! Public Suffix List and writes the unique domains, sorted, to a text file.
//!
//! # Example
//!
//! ```no_run
//! use domain_extractor::initialization::init_extractor;
//! use domain_extractor::{run_extraction, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("contacts.csv"),
//!     output: std::path::PathBuf::from("domains.txt"),
//!     ..Default::default()
//! };
//!
//! let extractor = init_extractor()?;
//! let report = run_extraction(&config, &extractor, &mut std::io::stdout())?;
//! println!("{} unique domains", report.total_unique);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod domain;
mod error_handling;
pub mod export;
pub mod extract;
pub mod initialization;
pub mod parse;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{ExtractionError, InitializationError};
pub use run::{run_extraction, ExtractionReport};

// Internal run module (extraction followed by export)
mod run {
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Instant;

    use log::info;

    use crate::app::log_statistics;
    use crate::config::Config;
    use crate::domain::SuffixMatcher;
    use crate::error_handling::ExtractionError;
    use crate::export::write_domains;
    use crate::extract::{extract_from_path, ExtractionStats};

    /// Results of a completed run.
    #[derive(Debug, Clone)]
    pub struct ExtractionReport {
        /// File the domains were written to
        pub output_path: PathBuf,
        /// Number of unique domains written
        pub total_unique: usize,
        /// Pipeline counters
        pub stats: ExtractionStats,
        /// Wall-clock duration of the run
        pub elapsed_seconds: f64,
    }

    /// Extracts domains from `config.input` and writes them to `config.output`.
    ///
    /// Verbose per-token lines go to `console` when `config.verbose` is set.
    /// The output file is only created (or replaced) once the whole input has
    /// been processed successfully.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::InputNotFound` if the input file does not exist
    /// - `ExtractionError::InputRead` if the input cannot be read or parsed
    /// - `ExtractionError::OutputWrite` if the output cannot be written
    /// - `ExtractionError::Console` if verbose output fails
    pub fn run_extraction<'a, M>(
        config: &Config,
        matcher: &'a M,
        console: &'a mut dyn Write,
    ) -> Result<ExtractionReport, ExtractionError>
    where
        M: SuffixMatcher + ?Sized,
    {
        let start_time = Instant::now();
        let console = if config.verbose { Some(console) } else { None };

        let extraction = extract_from_path(&config.input, matcher, console)?;
        write_domains(&extraction.domains, &config.output)?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        log_statistics(&extraction.stats, elapsed_seconds);
        info!(
            "Wrote {} unique domains to {}",
            extraction.domains.len(),
            config.output.display()
        );

        Ok(ExtractionReport {
            output_path: config.output.clone(),
            total_unique: extraction.domains.len(),
            stats: extraction.stats,
            elapsed_seconds,
        })
    }
}
