use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::TOKEN_PATTERN;

/// A pair of T and the span where it was found in the template text
pub type Spanned<T> = (T, Span);

/// A range representing a location in the template text
pub type Span = Range<usize>;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("token pattern should compile"));

/// Iterate every placeholder token in the template text, left to right.
///
/// Each item is the token's key paired with the span of the full
/// `{{ key }}` token, braces and interior whitespace included. Matching is
/// purely lexical and does not consult any field table.
pub fn tokens(template: &str) -> impl Iterator<Item = Spanned<&str>> {
    TOKEN_REGEX.find_iter(template).map(|token| {
        // A match is always {{, optional spaces, the key, optional spaces, }}
        let key = token
            .as_str()
            .trim_start_matches("{{")
            .trim_end_matches("}}")
            .trim();

        (key, token.range())
    })
}

/// Whether a string could appear as the key of a placeholder token.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
