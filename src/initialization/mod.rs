//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - Public Suffix List extractor
//!
//! Both must succeed before any input is read.

mod logger;

use log::debug;
use tldextract::{TldExtractor, TldOption};

use crate::config::SUFFIX_PROBES;
use crate::domain::SuffixMatcher;
use crate::error_handling::InitializationError;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// Builds a `TldExtractor` from the suffix snapshot bundled with `tldextract`
/// and checks that it decomposes a set of known domains. The extractor is
/// read-only afterwards and can be shared by reference for the whole run.
///
/// # Errors
///
/// Returns `InitializationError::SuffixListUnavailableError` if the rule set
/// cannot decompose a probe domain.
pub fn init_extractor() -> Result<TldExtractor, InitializationError> {
    let extractor = TldExtractor::new(TldOption::default());
    verify_suffix_rules(&extractor)?;
    debug!("Public suffix list loaded");
    Ok(extractor)
}

/// Checks that `matcher` decomposes every probe domain as expected.
pub fn verify_suffix_rules<M: SuffixMatcher + ?Sized>(
    matcher: &M,
) -> Result<(), InitializationError> {
    for (probe, domain, suffix) in SUFFIX_PROBES {
        let ok = matcher
            .match_domain(probe)
            .is_some_and(|m| m.domain == *domain && m.suffix == *suffix);
        if !ok {
            return Err(InitializationError::SuffixListUnavailableError {
                probe: (*probe).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainMatch;

    struct NoRules;

    impl SuffixMatcher for NoRules {
        fn match_domain(&self, _token: &str) -> Option<DomainMatch> {
            None
        }
    }

    struct SingleLabelRules;

    impl SuffixMatcher for SingleLabelRules {
        fn match_domain(&self, token: &str) -> Option<DomainMatch> {
            let (rest, suffix) = token.rsplit_once('.')?;
            let (sub, domain) = match rest.rsplit_once('.') {
                Some((sub, domain)) => (Some(sub.to_string()), domain),
                None => (None, rest),
            };
            DomainMatch::from_parts(sub, Some(domain.to_string()), Some(suffix.to_string()))
        }
    }

    #[test]
    fn test_init_extractor_with_bundled_rules() {
        assert!(init_extractor().is_ok());
    }

    #[test]
    fn test_verify_rejects_empty_rule_set() {
        let err = verify_suffix_rules(&NoRules).expect_err("empty rules must fail");
        assert!(matches!(
            err,
            InitializationError::SuffixListUnavailableError { ref probe } if probe == "example.com"
        ));
    }

    #[test]
    fn test_verify_rejects_missing_multi_label_suffixes() {
        // "example.co.uk" decomposes as co + uk, which is wrong
        let err = verify_suffix_rules(&SingleLabelRules).expect_err("must fail");
        assert!(matches!(
            err,
            InitializationError::SuffixListUnavailableError { ref probe } if probe == "example.co.uk"
        ));
    }
}
