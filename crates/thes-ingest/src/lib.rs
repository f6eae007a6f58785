pub mod filters;
pub mod providers;
pub mod settings;

pub use filters::{
    DEFAULT_FILTER_DIR, FILTER_DIR_ENV_VAR, filter_dir, list_filter_files, load_filter_dir,
};
pub use providers::{
    CsvThesaurusProvider, JsonThesaurusProvider, WiktionaryProvider, clean_related_words,
};
pub use settings::{
    DEFAULT_SETTINGS_FILE, FilterSettings, OutputSettings, ProviderKind, ProviderSpec, Settings,
};
