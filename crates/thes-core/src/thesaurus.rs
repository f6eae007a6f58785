//! The lookup entry point used by the command layer.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, info_span, warn};

use thes_model::{Category, CategoryResult, FilterSet, LookupError};
use thes_report::{ReportOptions, format, render_pretty};

use crate::aggregate::Aggregator;
use crate::classify::classify;
use crate::config::{Configuration, ThesaurusOptions};

/// Aggregator, loaded filters and the currently active configuration.
///
/// The active configuration is held as an `Arc` snapshot. A lookup clones the
/// snapshot once at the start, so replacing the configuration never affects a
/// lookup that is already running.
pub struct Thesaurus {
    aggregator: Aggregator,
    filters: FilterSet,
    report: ReportOptions,
    active: RwLock<Arc<Configuration>>,
}

/// Classified results of one lookup, with the configuration they were computed under.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub word: String,
    pub categories: Vec<Category>,
    pub results: Vec<CategoryResult>,
    pub configuration: Arc<Configuration>,
}

impl Lookup {
    pub fn is_empty(&self) -> bool {
        self.results.iter().all(CategoryResult::is_empty)
    }

    /// Plain tab-separated report.
    pub fn format(&self, options: &ReportOptions) -> String {
        let names = self.configuration.filters().names();
        format(
            &self.word,
            &self.results,
            names.as_slice(),
            &self.categories,
            options,
        )
    }

    /// Box-drawn terminal report.
    pub fn render_pretty(&self, options: &ReportOptions) -> String {
        let names = self.configuration.filters().names();
        render_pretty(
            &self.word,
            &self.results,
            names.as_slice(),
            &self.categories,
            options,
        )
    }
}

impl Thesaurus {
    pub fn new(
        aggregator: Aggregator,
        filters: FilterSet,
        options: &ThesaurusOptions,
        report: ReportOptions,
    ) -> Self {
        let active = Configuration::from_options(&filters, options);
        warn_unknown_required(&active);
        Self {
            aggregator,
            filters,
            report,
            active: RwLock::new(Arc::new(active)),
        }
    }

    /// All loaded filters, before any subset selection.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    pub fn report_options(&self) -> &ReportOptions {
        &self.report
    }

    /// Snapshot of the active configuration.
    pub fn configuration(&self) -> Arc<Configuration> {
        let guard = self.active.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs `configuration` and returns the previous snapshot.
    pub fn replace_configuration(&self, configuration: Configuration) -> Arc<Configuration> {
        warn_unknown_required(&configuration);
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(configuration))
    }

    /// Rebuilds the configuration from the loaded filters and installs it.
    pub fn reconfigure(&self, options: &ThesaurusOptions) -> Arc<Configuration> {
        let configuration = Arc::new(Configuration::from_options(&self.filters, options));
        warn_unknown_required(&configuration);
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&configuration);
        configuration
    }

    /// Looks up `word` and classifies the merged results.
    ///
    /// The word is trimmed and lowercased first. `categories` defaults to the
    /// report's configured order.
    pub fn lookup(
        &self,
        word: &str,
        categories: Option<&[Category]>,
    ) -> Result<Lookup, LookupError> {
        let word = word.trim().to_lowercase();
        let categories = categories
            .map(<[Category]>::to_vec)
            .unwrap_or_else(|| self.report.categories_order.clone());
        let configuration = self.configuration();

        let span = info_span!("lookup", word = %word);
        let _guard = span.enter();

        let merged = self.aggregator.aggregate(&word)?;
        let results: Vec<CategoryResult> = categories
            .iter()
            .map(|category| {
                CategoryResult::new(*category, classify(merged.get(*category), &configuration))
            })
            .collect();
        info!(
            providers = self.aggregator.len(),
            candidates = merged.len(),
            kept = results.iter().map(|result| result.entries.len()).sum::<usize>(),
            "lookup complete"
        );

        Ok(Lookup {
            word,
            categories,
            results,
            configuration,
        })
    }

    /// Looks up `word` and renders the plain report.
    pub fn lookup_and_format(
        &self,
        word: &str,
        categories: Option<&[Category]>,
    ) -> Result<String, LookupError> {
        let lookup = self.lookup(word, categories)?;
        Ok(lookup.format(&self.report))
    }
}

fn warn_unknown_required(configuration: &Configuration) {
    let unknown = configuration.unknown_required();
    if !unknown.is_empty() {
        warn!(
            lists = %unknown.join(", "),
            "required word list is not loaded; no results will be shown"
        );
    }
}
