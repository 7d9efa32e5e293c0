//! Client configuration.

use crate::error::{Error, Result};

/// Configuration for [`crate::RestClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub api_url: String,

    /// Bearer token for authenticated access.
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// Reads `AGORA_API_URL` and `AGORA_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("AGORA_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        if api_url.is_empty() {
            return Err(Error::Config("AGORA_API_URL must not be empty".into()));
        }

        let api_key = std::env::var("AGORA_API_KEY").ok().filter(|k| !k.is_empty());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
