//! Active lookup configuration.
//!
//! A [`Configuration`] is never mutated after construction. Changing settings
//! builds a new value which the engine swaps in atomically.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use thes_model::FilterSet;

/// Caller-facing settings from which a [`Configuration`] is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesaurusOptions {
    /// Filters a word must belong to, all of them. `None` means no requirement.
    pub required: Option<Vec<String>>,
    /// Keep only words found in at least one filter.
    pub must_match_any: bool,
    /// Name prefixes selecting which loaded filters are active. `None` keeps all.
    pub active_filter_subset: Option<Vec<String>>,
}

impl ThesaurusOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_must_match_any(mut self, enable: bool) -> Self {
        self.must_match_any = enable;
        self
    }

    #[must_use]
    pub fn with_active_filter_subset<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_filter_subset = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    filters: Arc<FilterSet>,
    required: Option<BTreeSet<String>>,
    must_match_any: bool,
}

impl Configuration {
    /// Configuration with no requirement over `filters`.
    pub fn new(filters: impl Into<Arc<FilterSet>>) -> Self {
        Self {
            filters: filters.into(),
            required: None,
            must_match_any: false,
        }
    }

    /// Builds the active configuration from the loaded filters.
    pub fn from_options(filters: &FilterSet, options: &ThesaurusOptions) -> Self {
        let active = match &options.active_filter_subset {
            Some(prefixes) => filters.subset(prefixes.as_slice()),
            None => filters.clone(),
        };
        let mut config = Self::new(active).with_must_match_any(options.must_match_any);
        if let Some(required) = &options.required {
            config = config.with_required(required);
        }
        config
    }

    /// Sets the required filter names. Names are trimmed and lowercased;
    /// an empty list clears the requirement.
    #[must_use]
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let required: BTreeSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        self.required = if required.is_empty() {
            None
        } else {
            Some(required)
        };
        self
    }

    #[must_use]
    pub fn with_must_match_any(mut self, enable: bool) -> Self {
        self.must_match_any = enable;
        self
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn required(&self) -> Option<&BTreeSet<String>> {
        self.required.as_ref()
    }

    pub fn must_match_any(&self) -> bool {
        self.must_match_any
    }

    /// Required names that match no active filter. Such a requirement can
    /// never be satisfied, so every word is dropped while it is in force.
    pub fn unknown_required(&self) -> Vec<String> {
        self.required
            .iter()
            .flatten()
            .filter(|name| self.filters.get_ignore_case(name).is_none())
            .cloned()
            .collect()
    }
}
