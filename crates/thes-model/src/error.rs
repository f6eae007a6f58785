use std::path::PathBuf;

use thiserror::Error;

/// Why a provider could not answer.
#[derive(Debug, Error)]
pub enum ProviderErrorKind {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {message}")]
    Parse { message: String },
    #[error("unavailable: {message}")]
    Unavailable { message: String },
}

/// A data source failed while loading or answering a lookup.
#[derive(Debug, Error)]
#[error("provider {provider} failed for {word:?}: {kind}")]
pub struct ProviderError {
    pub provider: String,
    /// Query word, or empty when the failure happened while loading the source.
    pub word: String,
    #[source]
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(provider: impl Into<String>, word: impl Into<String>, kind: ProviderErrorKind) -> Self {
        Self {
            provider: provider.into(),
            word: word.into(),
            kind,
        }
    }

    /// Failure while opening or reading a provider's backing file.
    pub fn io(provider: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::new(
            provider,
            "",
            ProviderErrorKind::Io {
                path: path.into(),
                source,
            },
        )
    }

    pub fn parse(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            provider,
            "",
            ProviderErrorKind::Parse {
                message: message.into(),
            },
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("filter directory not found: {path}")]
    FilterDirectoryNotFound { path: PathBuf },

    #[error("malformed filter {path}: {message}")]
    MalformedFilter { path: PathBuf, message: String },

    #[error("duplicate filter name: {name}")]
    DuplicateFilter { name: String },

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("invalid settings {path}: {message}")]
    Settings { path: PathBuf, message: String },
}

impl ConfigurationError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure of a complete lookup as seen by the command layer.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type Result<T, E = ConfigurationError> = std::result::Result<T, E>;
