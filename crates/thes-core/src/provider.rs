//! Data source capability consumed by the aggregator.

use std::collections::BTreeMap;

use thes_model::{Category, CategorySets, ProviderError};

/// A lexical data source.
///
/// Implementations answer from their own data and must not mutate shared
/// state; the aggregator may call several providers from different threads.
/// A provider that does not support a category returns an empty set for it.
pub trait Provider: Send + Sync {
    /// Identity used in logs and error messages.
    fn name(&self) -> &str;

    fn lookup(&self, word: &str) -> Result<CategorySets, ProviderError>;
}

/// Provider answering from an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    name: String,
    entries: BTreeMap<String, CategorySets>,
}

impl StaticProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Adds related words for `word`; keys are stored lowercased.
    #[must_use]
    pub fn with<I, S>(mut self, word: &str, category: Category, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(word, category, related);
        self
    }

    pub fn insert<I, S>(&mut self, word: &str, category: Category, related: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(word.trim().to_lowercase())
            .or_default()
            .extend(category, related);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Provider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, word: &str) -> Result<CategorySets, ProviderError> {
        Ok(self
            .entries
            .get(&word.trim().to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}
