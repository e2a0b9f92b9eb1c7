//! Configuration for the extraction service client.
//!
//! The API credential is read from the process environment at an explicit
//! initialization point, before any network call is attempted. There is no
//! lazily-resolved global: callers construct an [`ApiConfig`] and pass it to
//! the client.

use crate::error::{Error, Result};

/// Environment variable holding the extraction service credential.
pub const API_KEY_ENV: &str = "PRIVATE_AI_API_KEY";

/// Default endpoint of the extraction service.
pub const DEFAULT_ENDPOINT: &str = "https://api.private-ai.com/community/v3/process/text";

/// Credentials and endpoint for the extraction service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API key sent in the `x-api-key` header.
    pub api_key: String,
    /// Service endpoint URL.
    pub endpoint: String,
}

impl ApiConfig {
    /// Build a config from the process environment.
    ///
    /// Fails with [`Error::Config`] when the credential is absent or empty;
    /// this is fatal and reported before any request is made.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::config(format!("{} environment variable not set", API_KEY_ENV))
            })?;

        Ok(Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Build a config with an explicit key (used by tests).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Override the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
