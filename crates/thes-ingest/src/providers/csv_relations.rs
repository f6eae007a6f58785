use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::trace;

use thes_core::Provider;
use thes_model::{Category, CategorySets, ProviderError};

use super::{default_name, lookup_entry, normalize_key};

#[derive(Debug, Deserialize)]
struct RelationRow {
    word: String,
    relation: String,
    related: String,
}

/// Thesaurus backed by a relation table with a `word,relation,related` header,
/// as exported from WordNet-style lexical databases.
///
/// Lemma names use `_` between words (`ice_cream`); they are reported with
/// spaces. Relations other than synonym/antonym are ignored.
pub struct CsvThesaurusProvider {
    name: String,
    entries: HashMap<String, CategorySets>,
}

impl CsvThesaurusProvider {
    pub fn load(path: &Path, name: Option<&str>) -> Result<Self, ProviderError> {
        let name = name.map_or_else(|| default_name(path, "csv"), str::to_string);
        let content =
            std::fs::read_to_string(path).map_err(|e| ProviderError::io(name.as_str(), path, e))?;
        Self::from_csv(name, &content)
    }

    pub fn from_csv(name: impl Into<String>, content: &str) -> Result<Self, ProviderError> {
        let name = name.into();
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let mut entries: HashMap<String, CategorySets> = HashMap::new();
        let mut skipped = 0usize;
        for (index, record) in reader.deserialize::<RelationRow>().enumerate() {
            let row = record.map_err(|e| {
                ProviderError::parse(name.as_str(), format!("row {}: {e}", index + 1))
            })?;
            let Ok(category) = row.relation.parse::<Category>() else {
                skipped += 1;
                continue;
            };
            let related = lemma_to_words(&row.related);
            if related.is_empty() {
                continue;
            }
            entries
                .entry(normalize_key(&lemma_to_words(&row.word)))
                .or_default()
                .insert(category, related);
        }
        trace!(provider = %name, entries = entries.len(), skipped, "loaded relation table");
        Ok(Self { name, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Provider for CsvThesaurusProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, word: &str) -> Result<CategorySets, ProviderError> {
        Ok(lookup_entry(&self.entries, word))
    }
}

fn lemma_to_words(lemma: &str) -> String {
    lemma.split('_').collect::<Vec<_>>().join(" ").trim().to_string()
}
