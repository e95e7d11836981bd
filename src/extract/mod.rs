//! Extraction pipeline.
//!
//! Reads CSV records and runs every token of every field through
//! tokenize → strip markup → lowercase → email filter → suffix match →
//! canonicalize → deduplicate.
//!
//! The domain set is owned by a single run and returned to the caller; nothing
//! is kept in global state.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Instant;

use colored::*;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, trace};

use crate::app::log_progress;
use crate::config::PROGRESS_LOG_INTERVAL;
use crate::domain::{canonicalize, SuffixMatcher};
use crate::error_handling::ExtractionError;
use crate::parse::{is_email_like, strip_markup, tokenize};

/// Outcome of offering a canonical domain to a [`DomainSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Newly added, with its 1-based insertion sequence number.
    Added(usize),
    /// Already present; the set is unchanged.
    Duplicate,
}

/// Unique canonical domains collected during one run.
///
/// Iteration is in ascending lexicographic (byte) order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DomainSet {
    domains: BTreeSet<String>,
}

impl DomainSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a domain unless an identical one is already present.
    pub fn insert(&mut self, domain: &str) -> Insertion {
        if self.domains.contains(domain) {
            return Insertion::Duplicate;
        }
        self.domains.insert(domain.to_owned());
        Insertion::Added(self.domains.len())
    }

    /// Number of unique domains.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Returns true if no domain was collected.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Domains in ascending lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }
}

/// Counters for a single extraction run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionStats {
    /// CSV records read
    pub rows: usize,
    /// Fields scanned across all records
    pub fields: usize,
    /// Candidate tokens produced by the tokenizer
    pub tokens: usize,
    /// Tokens dropped because they contain `@`
    pub emails_skipped: usize,
    /// Tokens with no recognizable domain and suffix
    pub non_domains: usize,
    /// Matched tokens whose canonical domain was already collected
    pub duplicates: usize,
}

/// Result of a completed extraction pass.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Unique canonical domains
    pub domains: DomainSet,
    /// Run counters
    pub stats: ExtractionStats,
}

struct Pipeline<'a, M: SuffixMatcher + ?Sized> {
    matcher: &'a M,
    console: Option<&'a mut dyn Write>,
    domains: DomainSet,
    stats: ExtractionStats,
}

impl<'a, M: SuffixMatcher + ?Sized> Pipeline<'a, M> {
    fn new(matcher: &'a M, console: Option<&'a mut dyn Write>) -> Self {
        Self {
            matcher,
            console,
            domains: DomainSet::new(),
            stats: ExtractionStats::default(),
        }
    }

    fn process_record(&mut self, record: &StringRecord) -> io::Result<()> {
        self.stats.rows += 1;
        for field in record.iter() {
            self.stats.fields += 1;
            for token in tokenize(field) {
                self.process_token(token)?;
            }
        }
        Ok(())
    }

    fn process_token(&mut self, raw: &str) -> io::Result<()> {
        self.stats.tokens += 1;
        let token = strip_markup(raw).to_lowercase();
        if is_email_like(&token) {
            self.stats.emails_skipped += 1;
            return Ok(());
        }
        let Some(matched) = self.matcher.match_domain(&token) else {
            trace!("No domain in token '{}'", token);
            self.stats.non_domains += 1;
            return Ok(());
        };

        let domain = canonicalize(&matched);
        match self.domains.insert(&domain) {
            Insertion::Duplicate => {
                self.stats.duplicates += 1;
                if let Some(console) = self.console.as_mut() {
                    writeln!(
                        console,
                        "{}",
                        format!("Duplicate domain skipped: {domain}").red()
                    )?;
                }
            }
            Insertion::Added(seq) => {
                if let Some(console) = self.console.as_mut() {
                    writeln!(
                        console,
                        "{}",
                        format!("{seq} - Found and added domain: {domain}").green()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Extraction {
        Extraction {
            domains: self.domains,
            stats: self.stats,
        }
    }
}

/// Extracts unique canonical domains from CSV data.
///
/// Records have no header and may have any number of fields; every field is
/// scanned. When `console` is given, one line per matched token is written to
/// it (duplicate skipped, or found and added with its sequence number).
///
/// # Arguments
///
/// * `source` - Path used in error messages and logs
/// * `reader` - CSV data
/// * `matcher` - Public suffix matcher
/// * `console` - Sink for verbose per-token lines, `None` for quiet runs
///
/// # Errors
///
/// Returns `ExtractionError::InputRead` on any CSV, UTF-8 or IO error while
/// reading, and `ExtractionError::Console` if a verbose line cannot be
/// written. No partial result is returned.
pub fn extract_domains<'a, R, M>(
    source: &Path,
    reader: R,
    matcher: &'a M,
    console: Option<&'a mut dyn Write>,
) -> Result<Extraction, ExtractionError>
where
    R: Read,
    M: SuffixMatcher + ?Sized,
{
    let start_time = Instant::now();
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut pipeline = Pipeline::new(matcher, console);
    let mut record = StringRecord::new();

    loop {
        let more = rdr
            .read_record(&mut record)
            .map_err(|source_err| ExtractionError::InputRead {
                path: source.to_path_buf(),
                source: source_err,
            })?;
        if !more {
            break;
        }
        pipeline.process_record(&record)?;
        if pipeline.stats.rows % PROGRESS_LOG_INTERVAL == 0 {
            log_progress(start_time, pipeline.stats.rows, pipeline.domains.len());
        }
    }

    let extraction = pipeline.finish();
    debug!(
        "Finished reading {}: {} rows, {} unique domains",
        source.display(),
        extraction.stats.rows,
        extraction.domains.len()
    );
    Ok(extraction)
}

/// Extracts unique canonical domains from a CSV file.
///
/// The file is opened read-only and closed when this function returns,
/// whether or not extraction succeeded.
///
/// # Errors
///
/// Returns `ExtractionError::InputNotFound` if `path` is not an existing file,
/// otherwise the errors of [`extract_domains`].
pub fn extract_from_path<'a, M>(
    path: &Path,
    matcher: &'a M,
    console: Option<&'a mut dyn Write>,
) -> Result<Extraction, ExtractionError>
where
    M: SuffixMatcher + ?Sized,
{
    if !path.is_file() {
        return Err(ExtractionError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| ExtractionError::InputRead {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    info!("Extracting domains from {}", path.display());
    extract_domains(path, file, matcher, console)
}
