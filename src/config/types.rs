//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_OUTPUT_FILE;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// When `--output` is omitted the remaining settings (input file, output file
/// and verbosity) are collected interactively.
///
/// # Examples
///
/// ```bash
/// # Fully interactive
/// domain_extractor
///
/// # Output and verbosity from flags, input file picked from a menu
/// domain_extractor -o domains.txt -v
///
/// # No prompts at all
/// domain_extractor -i contacts.csv -o domains.txt
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_extractor",
    about = "Extract domains from a CSV file and filter out email addresses."
)]
pub struct Opt {
    /// Name of the output file
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// CSV file to read (skips the interactive file selection)
    #[arg(short, long, value_parser)]
    pub input: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use domain_extractor::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("contacts.csv"),
///     output: PathBuf::from("domains.txt"),
///     verbose: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to read domains from
    pub input: PathBuf,

    /// Text file receiving the sorted domains
    pub output: PathBuf,

    /// Print one line per matched token
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::try_parse_from(["domain_extractor"]).expect("Should parse without args");
        assert!(opt.output.is_none());
        assert!(opt.input.is_none());
        assert!(!opt.verbose);
        assert_eq!(
            log::LevelFilter::from(opt.log_level),
            log::LevelFilter::Warn
        );
        assert!(matches!(opt.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_opt_short_flags() {
        let opt = Opt::try_parse_from(["domain_extractor", "-o", "out.txt", "-v"])
            .expect("Should parse short flags");
        assert_eq!(opt.output, Some(PathBuf::from("out.txt")));
        assert!(opt.verbose);
    }

    #[test]
    fn test_opt_long_flags() {
        let opt = Opt::try_parse_from([
            "domain_extractor",
            "--output",
            "out.txt",
            "--verbose",
            "--input",
            "in.csv",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .expect("Should parse long flags");
        assert_eq!(opt.output, Some(PathBuf::from("out.txt")));
        assert_eq!(opt.input, Some(PathBuf::from("in.csv")));
        assert!(opt.verbose);
        assert_eq!(
            log::LevelFilter::from(opt.log_level),
            log::LevelFilter::Debug
        );
        assert!(matches!(opt.log_format, LogFormat::Json));
    }

    #[test]
    fn test_opt_rejects_unknown_log_level() {
        let result = Opt::try_parse_from(["domain_extractor", "--log-level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("domains.txt"));
        assert!(!config.verbose);
        assert!(config.input.as_os_str().is_empty());
    }
}
