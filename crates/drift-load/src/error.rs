//! Error types for document loading.

use thiserror::Error;

/// Errors produced while loading a snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read document: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML.
    #[error("cannot parse document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A mapping key is not a string.
    #[error("mapping key is not a string: {0}")]
    NonStringKey(String),

    /// The document's top-level value is not a mapping.
    #[error("document root must be a mapping, got a {0}")]
    NotAMapping(&'static str),
}
