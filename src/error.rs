//! Error types for the address book.
//!
//! Field validation errors live in [`crate::domain::errors`]; this module
//! holds the errors of the outer layers, defined with `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading an address book.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode the JSON document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document was written by an unknown format version
    #[error("Unsupported address book format version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
