//! Tokenizing and order-preserving deduplication.
//!
//! Every component that builds keyword lists (tags, triggers, aliases,
//! bundle token sets) goes through these helpers so that normalization is
//! identical across the pipeline.

use std::collections::HashSet;

/// Insertion-ordered set of strings.
///
/// Keeps the first occurrence of each value and silently ignores empty
/// strings, so it can be fed raw token streams directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning `true` if it was not present before.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() || self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for OrderedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Deduplicates values keeping the first occurrence, dropping empty strings.
pub fn unique<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().collect::<OrderedSet>().into_vec()
}

/// Splits text into lowercase `[a-z0-9]` word tokens.
///
/// Any run of other characters acts as a single separator. Order and
/// duplicates are preserved; use [`unique`] to collapse repeats.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
