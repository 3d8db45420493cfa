//! Error types for registry ingestion

use thiserror::Error;

/// Errors that can occur while loading the registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {url}")]
    Status {
        /// Status code returned
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Registry file does not exist at the given URL
    #[error("Registry not found: {0}")]
    NotFound(String),

    /// Unknown encoding label
    #[error("Unsupported encoding: {0}")]
    Encoding(String),

    /// CSV parse error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Local file error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for RegistryError {
    fn from(e: reqwest::Error) -> Self {
        RegistryError::Communication(e.to_string())
    }
}
