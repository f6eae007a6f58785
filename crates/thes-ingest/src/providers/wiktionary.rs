use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use thes_core::Provider;
use thes_model::{Category, CategorySets, ProviderError};

use super::{default_name, lookup_entry, normalize_key};

#[derive(Debug, Deserialize)]
struct WiktionaryEntry {
    word: String,
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    #[serde(default, rename = "relatedWords")]
    related_words: Vec<Relationship>,
}

#[derive(Debug, Deserialize)]
struct Relationship {
    #[serde(rename = "relationshipType")]
    relationship_type: String,
    #[serde(default)]
    words: Vec<String>,
}

/// Thesaurus built from parsed Wiktionary entries, one JSON object per line:
///
/// ```json
/// {"word": "happy", "definitions": [{"relatedWords": [
///     {"relationshipType": "synonyms", "words": ["(content): glad, pleased; see also joyful"]}
/// ]}]}
/// ```
///
/// Related-word strings are free text and are split with [`clean_related_words`].
pub struct WiktionaryProvider {
    name: String,
    entries: HashMap<String, CategorySets>,
}

impl WiktionaryProvider {
    pub fn load(path: &Path, name: Option<&str>) -> Result<Self, ProviderError> {
        let name = name.map_or_else(|| default_name(path, "wiktionary"), str::to_string);
        let content =
            std::fs::read_to_string(path).map_err(|e| ProviderError::io(name.as_str(), path, e))?;
        Self::from_json_lines(name, &content)
    }

    pub fn from_json_lines(name: impl Into<String>, content: &str) -> Result<Self, ProviderError> {
        let name = name.into();
        let mut entries: HashMap<String, CategorySets> = HashMap::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry: WiktionaryEntry = serde_json::from_str(line).map_err(|e| {
                ProviderError::parse(name.as_str(), format!("line {}: {e}", index + 1))
            })?;
            let sets = entries.entry(normalize_key(&entry.word)).or_default();
            for relationship in entry
                .definitions
                .iter()
                .flat_map(|definition| &definition.related_words)
            {
                let Ok(category) = relationship.relationship_type.parse::<Category>() else {
                    continue;
                };
                for words in &relationship.words {
                    sets.extend(category, clean_related_words(words));
                }
            }
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

impl Provider for WiktionaryProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, word: &str) -> Result<CategorySets, ProviderError> {
        Ok(lookup_entry(&self.entries, word))
    }
}

/// Splits a Wiktionary related-words line into individual words.
///
/// Sense qualifiers such as `(happy):` are removed, everything from
/// `; see also` onwards is dropped, remaining semicolons are removed and the
/// rest is split on `", "`.
pub fn clean_related_words(text: &str) -> Vec<String> {
    let mut cleaned = strip_qualifiers(text);
    if let Some(index) = find_see_also(&cleaned) {
        cleaned.truncate(index);
    }
    let cleaned = cleaned.replace(';', "");
    cleaned
        .trim()
        .split(", ")
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Removes every `(...):` span, shortest match first.
fn strip_qualifiers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find("):") else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 2..];
    }
    out.push_str(rest);
    out
}

/// Byte offset of a `;` followed by whitespace, `see`, whitespace, `also`.
fn find_see_also(text: &str) -> Option<usize> {
    text.match_indices(';').map(|(index, _)| index).find(|&index| {
        let mut chars = text[index + 1..].chars();
        chars.next().is_some_and(char::is_whitespace)
            && chars.as_str().strip_prefix("see").is_some_and(|rest| {
                let mut rest = rest.chars();
                rest.next().is_some_and(char::is_whitespace) && rest.as_str().starts_with("also")
            })
    })
}
