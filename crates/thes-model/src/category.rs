//! Result categories and the per-category word sets returned by providers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Kind of lexical relation reported for a looked-up word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Synonyms,
    Antonyms,
}

impl Category {
    /// Order in which categories are reported when the caller does not choose.
    pub const DEFAULT_ORDER: [Category; 2] = [Category::Synonyms, Category::Antonyms];

    /// Returns the lowercase name used in settings files and commands.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Synonyms => "synonyms",
            Category::Antonyms => "antonyms",
        }
    }

    /// Returns the header label printed above the category's rows.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Synonyms => "SYNONYMS",
            Category::Antonyms => "ANTONYMS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigurationError;

    /// Accepts singular and plural forms in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "synonyms" | "synonym" => Ok(Category::Synonyms),
            "antonyms" | "antonym" => Ok(Category::Antonyms),
            _ => Err(ConfigurationError::UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}

/// Words grouped by category, as reported by one provider or merged from many.
///
/// Categories are only stored once they hold a word, so equality ignores
/// categories a source reported as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySets {
    sets: BTreeMap<Category, BTreeSet<String>>,
}

impl CategorySets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, word: impl Into<String>) {
        self.sets.entry(category).or_default().insert(word.into());
    }

    pub fn extend<I, S>(&mut self, category: Category, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = words.into_iter().map(Into::<String>::into).peekable();
        if words.peek().is_none() {
            return;
        }
        self.sets.entry(category).or_default().extend(words);
    }

    /// Builder-style variant of [`CategorySets::extend`].
    #[must_use]
    pub fn with<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(category, words);
        self
    }

    /// Returns the words for a category; categories a source never reported are empty.
    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.sets.get(&category).unwrap_or(&EMPTY)
    }

    /// Unions another result into this one.
    pub fn merge(&mut self, other: CategorySets) {
        for (category, words) in other.sets {
            if words.is_empty() {
                continue;
            }
            self.sets.entry(category).or_default().extend(words);
        }
    }

    /// Total number of words across all categories.
    pub fn len(&self) -> usize {
        self.sets.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.values().all(BTreeSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_str_accepts_forms() {
        assert_eq!("Synonyms".parse::<Category>().unwrap(), Category::Synonyms);
        assert_eq!("antonym".parse::<Category>().unwrap(), Category::Antonyms);
        assert!("hypernyms".parse::<Category>().is_err());
    }

    #[test]
    fn merge_unions_words() {
        let mut left = CategorySets::new().with(Category::Synonyms, ["glad", "happy"]);
        let right = CategorySets::new()
            .with(Category::Synonyms, ["happy", "joyful"])
            .with(Category::Antonyms, ["sad"]);
        left.merge(right);

        let synonyms: Vec<&str> = left
            .get(Category::Synonyms)
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(synonyms, vec!["glad", "happy", "joyful"]);
        assert_eq!(left.get(Category::Antonyms).len(), 1);
        assert_eq!(left.len(), 4);
    }

    #[test]
    fn missing_category_is_empty() {
        let sets = CategorySets::new().with(Category::Synonyms, ["glad"]);
        assert!(sets.get(Category::Antonyms).is_empty());
        assert!(!sets.is_empty());
        assert!(CategorySets::new().with(Category::Antonyms, Vec::<String>::new()).is_empty());
    }
}
