//! Lookup engine: query providers, merge their answers, classify the merged
//! words against the active filters and render the report.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod provider;
pub mod thesaurus;

pub use aggregate::Aggregator;
pub use classify::{classify, classify_word};
pub use config::{Configuration, ThesaurusOptions};
pub use provider::{Provider, StaticProvider};
pub use thesaurus::{Lookup, Thesaurus};
