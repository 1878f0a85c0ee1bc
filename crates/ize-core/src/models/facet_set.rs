//! Flat, deduplicated `name:value` token sets.

use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashSet;

/// Separator between facet name and value inside a token.
pub const TOKEN_SEPARATOR: char = ':';

/// Builds the `name:value` token for one facet assignment.
pub fn token(name: &str, value: &str) -> String {
    let mut out = String::with_capacity(name.len() + value.len() + 1);
    out.push_str(name);
    out.push(TOKEN_SEPARATOR);
    out.push_str(value);
    out
}

/// Splits a token at its first separator. A token without one is all name.
pub fn split_token(token: &str) -> (&str, &str) {
    match token.split_once(TOKEN_SEPARATOR) {
        Some((name, value)) => (name, value),
        None => (token, ""),
    }
}

/// The set of facet tokens carried by one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetSet(FxHashSet<String>);

impl FacetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pre-built token. Returns `false` when it was already present.
    pub fn insert(&mut self, token: String) -> bool {
        self.0.insert(token)
    }

    pub fn insert_pair(&mut self, name: &str, value: &str) -> bool {
        self.0.insert(token(name, value))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn contains_pair(&self, name: &str, value: &str) -> bool {
        self.0.contains(&token(name, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates tokens in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tokens present in both sets.
    pub fn intersection_len(&self, other: &FacetSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().filter(|t| large.0.contains(*t)).count()
    }

    /// Tokens sorted lexicographically.
    pub fn sorted(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.iter().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl FromIterator<String> for FacetSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for FacetSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}
