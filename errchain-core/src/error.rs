//! Error type for the fallible edges of the crate
//!
//! Building and querying chains never fails. Loading report configuration
//! and serializing snapshots can, and those paths return [`ChainResult`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO operation '{operation}' failed")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChainError {
    /// Create a configuration error for a specific field
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        ChainError::Config {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type ChainResult<T> = std::result::Result<T, ChainError>;
