//! Error types for API access.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the spaces API.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("API error: HTTP {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e.to_string())
    }
}
