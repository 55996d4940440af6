//! Configuration for the LinkdAPI client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default production gateway URL
const DEFAULT_BASE_URL: &str = "https://linkdapi.p.rapidapi.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
///
/// Immutable once a client is constructed from it; the client holds it
/// behind an `Arc` and all clones share the same values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// RapidAPI key sent in the `x-rapidapi-key` header
    pub api_key: String,
    /// Base URL for the gateway
    pub base_url: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl ClientConfig {
    /// Create a configuration with the given API key and default URL/timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `LINKDAPI_KEY`: RapidAPI key (required)
    /// - `LINKDAPI_BASE_URL`: Gateway base URL (optional)
    /// - `LINKDAPI_TIMEOUT_SECS`: Request timeout in seconds (optional)
    pub fn from_env() -> ApiResult<Self> {
        let api_key = env::var("LINKDAPI_KEY").map_err(|_| ApiError::missing_env("LINKDAPI_KEY"))?;

        let base_url =
            env::var("LINKDAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = env::var("LINKDAPI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.api_key.is_empty() {
            return Err(ApiError::config("api_key cannot be empty"));
        }

        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = ClientConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "https://linkdapi.p.rapidapi.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::new("test-key").validate().is_ok());

        let empty_key = ClientConfig::new("");
        assert!(empty_key.validate().is_err());

        let bad_scheme = ClientConfig::new("test-key").with_base_url("ftp://example.com");
        assert!(bad_scheme.validate().is_err());

        let zero_timeout = ClientConfig::new("test-key").with_timeout(Duration::ZERO);
        assert!(zero_timeout.validate().is_err());
    }
}
