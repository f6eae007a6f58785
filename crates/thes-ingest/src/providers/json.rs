use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use thes_core::Provider;
use thes_model::{Category, CategorySets, ProviderError};

use super::{default_name, lookup_entry, normalize_key};

#[derive(Debug, Deserialize)]
struct JsonEntry {
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

/// Thesaurus backed by a JSON object mapping each word to its related words:
///
/// ```json
/// { "happy": { "synonyms": ["glad"], "antonyms": ["sad"] } }
/// ```
pub struct JsonThesaurusProvider {
    name: String,
    entries: HashMap<String, CategorySets>,
}

impl JsonThesaurusProvider {
    pub fn load(path: &Path, name: Option<&str>) -> Result<Self, ProviderError> {
        let name = name.map_or_else(|| default_name(path, "json"), str::to_string);
        let content =
            std::fs::read_to_string(path).map_err(|e| ProviderError::io(name.as_str(), path, e))?;
        Self::from_json(name, &content)
    }

    pub fn from_json(name: impl Into<String>, content: &str) -> Result<Self, ProviderError> {
        let name = name.into();
        let raw: HashMap<String, JsonEntry> = serde_json::from_str(content)
            .map_err(|e| ProviderError::parse(name.as_str(), e.to_string()))?;
        let mut entries: HashMap<String, CategorySets> = HashMap::with_capacity(raw.len());
        for (word, entry) in raw {
            let sets = entries.entry(normalize_key(&word)).or_default();
            sets.extend(Category::Synonyms, entry.synonyms);
            sets.extend(Category::Antonyms, entry.antonyms);
        }
        Ok(Self { name, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Provider for JsonThesaurusProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, word: &str) -> Result<CategorySets, ProviderError> {
        Ok(lookup_entry(&self.entries, word))
    }
}
