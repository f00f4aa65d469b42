//! Free-text query resolution against the catalog.
//!
//! Two phases run in strict order, first hit wins: a bidirectional
//! substring scan, then a token-overlap scan over the query's longer
//! words. Both scan the catalog in stored order, so an ambiguous query
//! resolves to the earliest course deterministically — first match, not
//! best match.

use crate::{Catalog, Course};

/// Tokens shorter than this are discarded in the token phase; one- and
/// two-letter words match far too many names to carry signal.
const MIN_TOKEN_LEN: usize = 3;

/// Resolve a free-text query to a course.
///
/// Returns `None` for empty or whitespace-only queries before any phase
/// runs — an empty string is a substring of every name and must not
/// trivially match.
pub fn resolve<'a>(query: &str, catalog: &'a Catalog) -> Option<&'a Course> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    substring_match(&query, catalog).or_else(|| token_match(&query, catalog))
}

/// Phase 1: the query is a substring of the name, or the name is a
/// substring of the query. `query` must already be trimmed and lowercased.
pub(crate) fn substring_match<'a>(query: &str, catalog: &'a Catalog) -> Option<&'a Course> {
    catalog.iter().find(|course| {
        let name = course.name.to_lowercase();
        name.contains(query) || query.contains(name.as_str())
    })
}

/// Phase 2: the first course whose name contains any query token of at
/// least [`MIN_TOKEN_LEN`] characters. `query` must already be trimmed
/// and lowercased.
pub(crate) fn token_match<'a>(query: &str, catalog: &'a Catalog) -> Option<&'a Course> {
    let tokens: Vec<&str> = query
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .collect();
    if tokens.is_empty() {
        return None;
    }

    catalog.iter().find(|course| {
        let name = course.name.to_lowercase();
        tokens.iter().any(|token| name.contains(token))
    })
}
