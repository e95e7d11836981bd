//! Domain matching and canonicalization.
//!
//! This module decomposes candidate tokens into `subdomain.domain.suffix` using
//! the Public Suffix List and reassembles matches into the canonical string
//! used for deduplication.
//!
//! Key items:
//! - `SuffixMatcher` - decomposes a token, or reports no match
//! - `DomainMatch` - the decomposed parts of a matched token
//! - `host_part()` - reduces URL-shaped tokens to their host
//! - `canonicalize()` - reassembles a match and trims leading junk

use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use tldextract::TldExtractor;

use crate::config::{HOST_TERMINATORS, LEADING_JUNK_CHARS, URL_SCHEME_PATTERN};

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_SCHEME_PATTERN).expect("URL scheme pattern is a valid regex"));

/// A token decomposed against the public suffix rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMatch {
    /// Labels preceding the registrable domain; `None` when there are none.
    pub subdomain: Option<String>,
    /// Label immediately preceding the suffix.
    pub domain: String,
    /// Longest matching public suffix (e.g. `com`, `co.uk`).
    pub suffix: String,
}

impl DomainMatch {
    /// Builds a match from the optional parts an extractor reports.
    ///
    /// Returns `None` unless both a domain label and a suffix are present;
    /// an empty subdomain is normalized to `None`.
    pub fn from_parts(
        subdomain: Option<String>,
        domain: Option<String>,
        suffix: Option<String>,
    ) -> Option<Self> {
        let domain = domain.filter(|d| !d.is_empty())?;
        let suffix = suffix.filter(|s| !s.is_empty())?;
        Some(Self {
            subdomain: subdomain.filter(|s| !s.is_empty()),
            domain,
            suffix,
        })
    }
}

/// Decomposes tokens into `(subdomain, domain, suffix)`.
///
/// `None` means the token is not a domain (free text, a number, a bare suffix).
/// This is normal control flow, not an error.
pub trait SuffixMatcher {
    /// Attempts to decompose a lowercase, markup-free, non-email token.
    fn match_domain(&self, token: &str) -> Option<DomainMatch>;
}

/// Reduces a URL-shaped token to its host.
///
/// Cuts a leading scheme (`https://`) or `//`, everything from the first `/`,
/// `?` or `#`, a `:port` and trailing dots. Bare hosts pass through unchanged.
///
/// # Examples
///
/// ```
/// use domain_extractor::domain::host_part;
///
/// assert_eq!(host_part("https://www.example.com:8443/about?x=1"), "www.example.com");
/// assert_eq!(host_part("example.com"), "example.com");
/// ```
pub fn host_part(token: &str) -> &str {
    let rest = URL_SCHEME
        .find(token)
        .map_or(token, |scheme| &token[scheme.end()..]);
    let host = rest.split(HOST_TERMINATORS).next().unwrap_or(rest);
    let host = host.split(':').next().unwrap_or(host);
    host.trim_end_matches('.')
}

impl SuffixMatcher for TldExtractor {
    fn match_domain(&self, token: &str) -> Option<DomainMatch> {
        let host = host_part(token);
        if host.is_empty() {
            return None;
        }
        match self.extract(host) {
            Ok(result) => DomainMatch::from_parts(result.subdomain, result.domain, result.suffix),
            Err(e) => {
                trace!("Extractor rejected token '{}': {}", token, e);
                None
            }
        }
    }
}

/// Reassembles a match into its canonical string form.
///
/// Produces `subdomain.domain.suffix` (or `domain.suffix`) and then strips any
/// run of leading `*`, `.`, `(` and `)` characters.
///
/// # Examples
///
/// ```
/// use domain_extractor::domain::{canonicalize, DomainMatch};
///
/// let m = DomainMatch {
///     subdomain: Some("*".to_string()),
///     domain: "example".to_string(),
///     suffix: "com".to_string(),
/// };
/// assert_eq!(canonicalize(&m), "example.com");
/// ```
pub fn canonicalize(m: &DomainMatch) -> String {
    let full = match &m.subdomain {
        Some(sub) => format!("{}.{}.{}", sub, m.domain, m.suffix),
        None => format!("{}.{}", m.domain, m.suffix),
    };
    let trimmed = full.trim_start_matches(LEADING_JUNK_CHARS);
    if trimmed.len() == full.len() {
        full
    } else {
        trimmed.to_string()
    }
}
