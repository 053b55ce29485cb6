use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse config document: {0}")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("key '{0}' is not found")]
    KeyNotFound(String),

    #[error("key '{key}' is not {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("key '{key}' element {element} is not {expected}")]
    ElementMismatch {
        key: String,
        element: String,
        expected: &'static str,
    },

    #[error("key '{key}' cannot be stored in a `{target}`: {source}")]
    InvalidTarget {
        key: String,
        target: &'static str,
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn type_mismatch(key: &str, expected: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            expected,
        }
    }

    /// Returns `true` if the error means the key is absent from the document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_))
    }
}
