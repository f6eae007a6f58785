//! Named word lists that lookup results are classified against.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// A named set of words. Members are stored trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    name: String,
    members: BTreeSet<String>,
}

impl Filter {
    /// Builds a filter, dropping blank entries.
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            name: name.into(),
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Membership test; the probe is lowercased to match stored members.
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word.trim().to_lowercase().as_str())
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// Compares filter names ignoring surrounding whitespace and case, including
/// non-ASCII letters.
pub fn same_name(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

/// Immutable collection of filters, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new(filters: Vec<Filter>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for filter in &filters {
            if !seen.insert(filter.name().to_lowercase()) {
                return Err(ConfigurationError::DuplicateFilter {
                    name: filter.name().to_string(),
                });
            }
        }
        let mut filters = filters;
        filters.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(Self { filters })
    }

    /// Builds a set from already materialised `name -> words` pairs.
    pub fn from_map<I, N, W, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, W)>,
        N: Into<String>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filters = entries
            .into_iter()
            .map(|(name, words)| Filter::new(name, words))
            .collect();
        Self::new(filters)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(Filter::name).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn get_ignore_case(&self, name: &str) -> Option<&Filter> {
        self.filters.iter().find(|filter| filter.is_named(name))
    }

    /// Keeps only filters whose name starts with one of `prefixes` (case-insensitive).
    #[must_use]
    pub fn subset<S: AsRef<str>>(&self, prefixes: &[S]) -> Self {
        let prefixes: Vec<String> = prefixes
            .iter()
            .map(|prefix| prefix.as_ref().trim().to_lowercase())
            .collect();
        let filters = self
            .filters
            .iter()
            .filter(|filter| {
                let name = filter.name().to_lowercase();
                prefixes.iter().any(|prefix| name.starts_with(prefix.as_str()))
            })
            .cloned()
            .collect();
        Self { filters }
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
