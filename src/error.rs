//! Error handling utilities shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = TagCloudError> = std::result::Result<T, E>;

/// Domain-specific error describing failures while loading, ranking, or rendering a tag cloud.
#[derive(Debug, Error)]
pub enum TagCloudError {
    /// Cloud configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The input document does not exist.
    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    /// Filesystem IO error with optional context path.
    #[error("io error while processing {path:?}: {source}")]
    Io {
        /// Underlying IO error returned by the standard library.
        source: std::io::Error,
        /// Target path associated with the IO failure if available.
        path: Option<PathBuf>,
    },
    /// More top words were requested than distinct taggable words exist.
    #[error("requested the top {requested} words but only {available} distinct words are taggable")]
    SelectionOutOfRange {
        /// Number of words the caller asked for.
        requested: usize,
        /// Number of distinct taggable words in the document.
        available: usize,
    },
    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TagCloudError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl TagCloudError {
    /// Helper constructor that attaches an optional path when wrapping IO errors.
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { source, path }
    }
}
