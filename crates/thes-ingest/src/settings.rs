//! TOML settings file.
//!
//! ```toml
//! [filters]
//! dir = "filters"
//! active = ["AWL", "basic"]
//! priority = [{ name = "AWL", position = 0 }]
//!
//! [output]
//! found_marker = "X"
//! not_found_marker = ""
//! categories = ["synonyms", "antonyms"]
//!
//! [[providers]]
//! kind = "json"
//! path = "data/thesaurus.json"
//! ```
//!
//! Relative paths are resolved against the directory containing the file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use thes_core::Provider;
use thes_model::{Category, ConfigurationError, ProviderError, Result};
use thes_report::{PriorityRule, ReportOptions};

use crate::providers::{CsvThesaurusProvider, JsonThesaurusProvider, WiktionaryProvider};

/// File name looked up in the working directory when no settings path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "thes.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub filters: FilterSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub providers: Vec<ProviderSpec>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSettings {
    pub dir: Option<PathBuf>,
    /// Name prefixes of the filters to activate; all filters when absent.
    pub active: Option<Vec<String>>,
    #[serde(default = "default_priority")]
    pub priority: Vec<PriorityRule>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            dir: None,
            active: None,
            priority: default_priority(),
        }
    }
}

fn default_priority() -> Vec<PriorityRule> {
    ReportOptions::default().priority
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    #[serde(default = "default_found_marker")]
    pub found_marker: String,
    #[serde(default)]
    pub not_found_marker: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            found_marker: default_found_marker(),
            not_found_marker: String::new(),
            categories: default_categories(),
        }
    }
}

fn default_found_marker() -> String {
    ReportOptions::default().found_marker
}

fn default_categories() -> Vec<String> {
    Category::DEFAULT_ORDER
        .iter()
        .map(|category| category.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Json,
    Csv,
    Wiktionary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSpec {
    pub kind: ProviderKind,
    pub path: PathBuf,
    pub name: Option<String>,
}

impl ProviderSpec {
    pub fn new(kind: ProviderKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            name: None,
        }
    }

    /// Loads the provider, resolving a relative path against `base_dir`.
    pub fn build(
        &self,
        base_dir: Option<&Path>,
    ) -> std::result::Result<Arc<dyn Provider>, ProviderError> {
        let path = resolve(base_dir, &self.path);
        let name = self.name.as_deref();
        let provider: Arc<dyn Provider> = match self.kind {
            ProviderKind::Json => Arc::new(JsonThesaurusProvider::load(&path, name)?),
            ProviderKind::Csv => Arc::new(CsvThesaurusProvider::load(&path, name)?),
            ProviderKind::Wiktionary => Arc::new(WiktionaryProvider::load(&path, name)?),
        };
        info!(provider = provider.name(), path = %path.display(), "loaded provider");
        Ok(provider)
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigurationError::io(path, e))?;
        let mut settings = Self::from_toml_str(&contents, path)?;
        settings.base_dir = path.parent().map(Path::to_path_buf);
        Ok(settings)
    }

    /// Loads `path`, or `thes.toml` in the working directory if it exists, or defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_SETTINGS_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        let settings: Settings =
            toml::from_str(contents).map_err(|e| ConfigurationError::Settings {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        settings.categories(origin)?;
        Ok(settings)
    }

    /// Configured filter directory, resolved against the settings file.
    pub fn filter_dir(&self) -> Option<PathBuf> {
        self.filters
            .dir
            .as_deref()
            .map(|dir| resolve(self.base_dir.as_deref(), dir))
    }

    pub fn report_options(&self) -> Result<ReportOptions> {
        let origin = self.base_dir.clone().unwrap_or_default();
        Ok(ReportOptions::default()
            .with_priority(self.filters.priority.clone())
            .with_markers(
                self.output.found_marker.clone(),
                self.output.not_found_marker.clone(),
            )
            .with_categories_order(self.categories(&origin)?))
    }

    pub fn build_providers(&self) -> std::result::Result<Vec<Arc<dyn Provider>>, ProviderError> {
        self.providers
            .iter()
            .map(|spec| spec.build(self.base_dir.as_deref()))
            .collect()
    }

    fn categories(&self, origin: &Path) -> Result<Vec<Category>> {
        let categories = self
            .output
            .categories
            .iter()
            .map(|name| name.parse::<Category>())
            .collect::<Result<Vec<_>>>()?;
        if categories.is_empty() {
            return Err(ConfigurationError::Settings {
                path: origin.to_path_buf(),
                message: "output.categories must not be empty".to_string(),
            });
        }
        Ok(categories)
    }
}

fn resolve(base_dir: Option<&Path>, path: &Path) -> PathBuf {
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("", Path::new("thes.toml")).unwrap();
        let options = settings.report_options().unwrap();
        assert_eq!(options, ReportOptions::default());
        assert!(settings.providers.is_empty());
        assert!(settings.filter_dir().is_none());
    }

    #[test]
    fn parses_all_sections() {
        let settings = Settings::from_toml_str(
            r#"
[filters]
dir = "lists"
active = ["awl"]
priority = [{ name = "Basic", position = 0 }]

[output]
found_marker = "*"
categories = ["antonyms"]

[[providers]]
kind = "csv"
path = "wordnet.csv"
name = "wordnet"
"#,
            Path::new("thes.toml"),
        )
        .unwrap();
        let options = settings.report_options().unwrap();
        assert_eq!(options.found_marker, "*");
        assert_eq!(options.categories_order, vec![Category::Antonyms]);
        assert_eq!(options.priority, vec![PriorityRule::new("Basic", 0)]);
        assert_eq!(settings.filters.active, Some(vec!["awl".to_string()]));
        assert_eq!(settings.providers[0].kind, ProviderKind::Csv);
        assert_eq!(settings.filter_dir(), Some(PathBuf::from("lists")));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = Settings::from_toml_str(
            "[output]\ncategories = [\"hypernyms\"]\n",
            Path::new("thes.toml"),
        );
        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result =
            Settings::from_toml_str("[filters]\ndirectory = \"x\"\n", Path::new("thes.toml"));
        assert!(matches!(result, Err(ConfigurationError::Settings { .. })));
    }
}
