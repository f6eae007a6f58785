use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A result word that survived classification, with the filters it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub found_in: BTreeSet<String>,
}

impl Entry {
    pub fn new(word: impl Into<String>, found_in: BTreeSet<String>) -> Self {
        Self {
            word: word.into(),
            found_in,
        }
    }

    pub fn is_in(&self, filter_name: &str) -> bool {
        self.found_in.contains(filter_name)
    }
}

/// Classified entries of one category, in ascending word order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: Category,
    pub entries: Vec<Entry>,
}

impl CategoryResult {
    pub fn new(category: Category, entries: Vec<Entry>) -> Self {
        Self { category, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.word.as_str())
    }
}
