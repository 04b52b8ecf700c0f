//! Search helpers shared by the venue and artist search endpoints.
//!
//! A search runs two independent queries (name substring, exact genre) and
//! merges them here.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

/// Search response payload: deduplicated matches plus their count.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    /// Merge name matches and genre matches into a single result set.
    ///
    /// Name matches come first in their original order, followed by any
    /// genre match not already present. Identity is decided by `key`.
    pub fn merge<K, F>(name_matches: Vec<T>, genre_matches: Vec<T>, key: F) -> Self
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let data = merge_unique(name_matches, genre_matches, key);
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Concatenate `first` and `second`, keeping only the first occurrence of
/// each key. No re-sorting is applied.
pub fn merge_unique<T, K, F>(first: Vec<T>, second: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(first.len() + second.len());
    first
        .into_iter()
        .chain(second)
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Build an `ILIKE` pattern matching `term` as a literal substring.
///
/// `\`, `%` and `_` in the term are escaped (PostgreSQL's default `LIKE`
/// escape character is backslash).
pub fn substring_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
