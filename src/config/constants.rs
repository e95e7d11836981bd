//! Configuration constants.
//!
//! This module defines the patterns, character sets and operational parameters
//! used by the extraction pipeline.

/// Field delimiter pattern. Runs of delimiters collapse into a single split.
pub const FIELD_DELIMITER_PATTERN: &str = r"[,;|]+";

/// HTML-tag-like markup pattern stripped from every token before matching.
pub const MARKUP_PATTERN: &str = r"<[^>]+>";

/// Leading URL scheme (`https://`) or protocol-relative `//` cut before matching.
pub const URL_SCHEME_PATTERN: &str = r"^(?i:[a-z][a-z0-9+.\-]*:)?//";

/// Characters ending the host part of a URL-shaped token.
pub const HOST_TERMINATORS: &[char] = &['/', '?', '#'];

/// Character marking a token as an email address (or a fragment of one).
pub const EMAIL_MARKER: char = '@';

/// Characters trimmed (repeatedly) from the front of a reassembled domain.
///
/// Wildcard certificates (`*.example.com`) and parenthesized text
/// (`(example.com`) are the usual sources.
pub const LEADING_JUNK_CHARS: &[char] = &['*', '.', '(', ')'];

/// File extension of candidate input files in the working directory.
pub const CSV_EXTENSION: &str = "csv";

/// Number of CSV rows between progress log lines.
pub const PROGRESS_LOG_INTERVAL: usize = 10_000;

/// Domains the suffix extractor must decompose at start-up.
///
/// Covers a single-label suffix and a multi-label one, so a truncated or
/// missing rule set fails fast instead of silently matching nothing.
pub const SUFFIX_PROBES: &[(&str, &str, &str)] =
    &[("example.com", "example", "com"), ("example.co.uk", "example", "co.uk")];

/// Default output file name when none is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "domains.txt";
