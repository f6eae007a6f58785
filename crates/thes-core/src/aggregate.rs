//! Queries every provider for a word and unions their answers.

use std::sync::Arc;
use std::thread;

use tracing::debug;

use thes_model::{CategorySets, ProviderError, ProviderErrorKind};

use crate::provider::Provider;

#[derive(Clone, Default)]
pub struct Aggregator {
    providers: Vec<Arc<dyn Provider>>,
}

impl Aggregator {
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    #[must_use]
    pub fn with_provider(mut self, provider: impl Provider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Merged category sets for `word` from all providers.
    ///
    /// Providers run concurrently when there is more than one. Every call
    /// finishes before merging; if any failed, the error of the first failing
    /// provider in configured order is returned and nothing is merged.
    pub fn aggregate(&self, word: &str) -> Result<CategorySets, ProviderError> {
        let outcomes: Vec<Result<CategorySets, ProviderError>> = if self.providers.len() <= 1 {
            self.providers
                .iter()
                .map(|provider| query(provider.as_ref(), word))
                .collect()
        } else {
            thread::scope(|scope| {
                let handles: Vec<_> = self
                    .providers
                    .iter()
                    .map(|provider| {
                        let provider = provider.as_ref();
                        (provider, scope.spawn(move || query(provider, word)))
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|(provider, handle)| {
                        handle.join().unwrap_or_else(|_| {
                            Err(ProviderError::new(
                                provider.name(),
                                word,
                                ProviderErrorKind::Unavailable {
                                    message: "provider panicked".to_string(),
                                },
                            ))
                        })
                    })
                    .collect()
            })
        };

        let mut merged = CategorySets::new();
        for outcome in outcomes {
            merged.merge(outcome?);
        }
        Ok(merged)
    }
}

fn query(provider: &dyn Provider, word: &str) -> Result<CategorySets, ProviderError> {
    match provider.lookup(word) {
        Ok(sets) => {
            debug!(provider = provider.name(), word, words = sets.len(), "provider answered");
            Ok(sets)
        }
        Err(error) => {
            debug!(provider = provider.name(), word, %error, "provider failed");
            Err(error)
        }
    }
}
