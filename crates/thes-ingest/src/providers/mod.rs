//! File-backed providers.
//!
//! Each provider reads its whole source once at construction and answers
//! lookups from memory. Load failures are reported as [`ProviderError`]s that
//! name the provider and the file.
//!
//! [`ProviderError`]: thes_model::ProviderError

mod csv_relations;
mod json;
mod wiktionary;

pub use self::csv_relations::CsvThesaurusProvider;
pub use self::json::JsonThesaurusProvider;
pub use self::wiktionary::{WiktionaryProvider, clean_related_words};

use std::collections::HashMap;
use std::path::Path;

use thes_model::CategorySets;

/// Lookup key used by all file-backed providers.
fn normalize_key(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Provider name derived from a file path when none is configured.
fn default_name(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map_or_else(|| fallback.to_string(), str::to_string)
}

fn lookup_entry(entries: &HashMap<String, CategorySets>, word: &str) -> CategorySets {
    entries
        .get(&normalize_key(word))
        .cloned()
        .unwrap_or_default()
}
