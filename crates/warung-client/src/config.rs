//! Client configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.

use std::env;

use serde::{Deserialize, Serialize};

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote store's JSON API.
    pub base_url: String,

    /// Per-request timeout in seconds. There is no retry: a request either
    /// completes within this budget or fails once.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ClientConfig {
            base_url: env::var("WARUNG_API_URL")
                .unwrap_or_else(|_| "http://localhost:4000/api".to_string()),

            timeout_secs: env::var("WARUNG_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("WARUNG_HTTP_TIMEOUT_SECS".to_string()))?,
        };

        if config.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue("WARUNG_API_URL".to_string()));
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:4000/api".to_string(),
            timeout_secs: 20,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
