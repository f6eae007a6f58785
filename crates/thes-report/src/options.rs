use serde::{Deserialize, Serialize};

use thes_model::Category;

/// Moves a filter column to a fixed position after alphabetical sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRule {
    /// Filter name, matched case-insensitively.
    pub name: String,
    /// Zero-based column index among the filter columns.
    pub position: usize,
}

impl PriorityRule {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Presentation settings shared by the plain and pretty renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub priority: Vec<PriorityRule>,
    /// Marker for a word that belongs to the column's filter.
    pub found_marker: String,
    /// Marker for a word that does not.
    pub not_found_marker: String,
    /// Category order used when the caller does not ask for specific categories.
    pub categories_order: Vec<Category>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            priority: vec![PriorityRule::new("AWL", 0)],
            found_marker: "X".to_string(),
            not_found_marker: String::new(),
            categories_order: Category::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl ReportOptions {
    #[must_use]
    pub fn with_priority(mut self, priority: Vec<PriorityRule>) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, found: impl Into<String>, not_found: impl Into<String>) -> Self {
        self.found_marker = found.into();
        self.not_found_marker = not_found.into();
        self
    }

    #[must_use]
    pub fn with_categories_order(mut self, order: Vec<Category>) -> Self {
        self.categories_order = order;
        self
    }

    pub fn marker(&self, present: bool) -> &str {
        if present {
            &self.found_marker
        } else {
            &self.not_found_marker
        }
    }
}
