//! Error types for nomina.

use thiserror::Error;

/// Result type for nomina operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for nomina operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Required configuration is missing (e.g. the API credential).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The extraction service rejected the credential.
    #[error("Extraction service authentication failed: {0}")]
    Auth(String),

    /// The extraction service rate-limited the request.
    #[error("Extraction service rate limited: {0}")]
    RateLimited(String),

    /// Any other HTTP failure from the extraction service.
    #[error("Extraction service error: {0}")]
    Http(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a generic service error.
    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }
}
