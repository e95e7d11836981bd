//! Field tokenization and token cleanup.
//!
//! Free-text CSV fields are split into candidate tokens, markup is stripped and
//! email-like tokens are recognized before anything reaches the suffix matcher.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{EMAIL_MARKER, FIELD_DELIMITER_PATTERN, MARKUP_PATTERN};

static FIELD_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FIELD_DELIMITER_PATTERN).expect("field delimiter pattern is a valid regex")
});

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MARKUP_PATTERN).expect("markup pattern is a valid regex"));

/// Splits a field into candidate tokens.
///
/// The field is first split on runs of `,`, `;` and `|`, then each chunk on
/// whitespace. Empty tokens are never produced.
///
/// # Examples
///
/// ```
/// use domain_extractor::parse::tokenize;
///
/// let tokens: Vec<&str> = tokenize("foo.com; bar.org baz.net").collect();
/// assert_eq!(tokens, ["foo.com", "bar.org", "baz.net"]);
/// ```
pub fn tokenize(field: &str) -> impl Iterator<Item = &str> {
    FIELD_DELIMITERS.split(field).flat_map(str::split_whitespace)
}

/// Removes every `<...>` tag from a token.
///
/// Borrows the input when there is nothing to strip.
pub fn strip_markup(token: &str) -> Cow<'_, str> {
    MARKUP.replace_all(token, "")
}

/// Returns true if the token looks like an email address or a fragment of one.
///
/// Any `@` disqualifies the whole token, even if a valid domain follows it.
pub fn is_email_like(token: &str) -> bool {
    token.contains(EMAIL_MARKER)
}
