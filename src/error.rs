//! Error types for the frethero library

use std::io;

/// Library error type for frethero operations
#[derive(Debug, thiserror::Error)]
pub enum FretError {
    /// Library document structure does not match the expected schema
    #[error("schema error: {0}")]
    SchemaError(String),

    /// A shape token breaks the codec rules
    #[error("encoding error: {0}")]
    EncodingError(String),

    /// A decoded shape breaks shape-level invariants
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<io::Error> for FretError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}
