//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{CommentsApi, PostsApi, ProfileApi, StatusApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// RapidAPI gateway routing header
const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";

/// RapidAPI authentication header
const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";

/// Host value the gateway routes on, fixed regardless of `base_url`
const RAPIDAPI_HOST: &str = "linkdapi.p.rapidapi.com";

/// LinkdAPI client
///
/// This client wraps `reqwest` and centralizes:
/// - URL assembly and query serialization for every endpoint
/// - The three invariant RapidAPI headers, installed once on the pool
/// - Translation of non-2xx responses into [`ApiError::Status`]
/// - Request correlation IDs for tracing
///
/// Cloning is cheap and shares the underlying connection pool. The pool is
/// released when the last clone is dropped.
#[derive(Clone)]
pub struct LinkdClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl LinkdClient {
    /// Create a new client configured from environment variables
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(RAPIDAPI_HOST_HEADER, HeaderValue::from_static(RAPIDAPI_HOST));
        default_headers.insert(
            RAPIDAPI_KEY_HEADER,
            HeaderValue::from_str(&config.api_key)
                .map_err(|_| ApiError::config("api_key is not a valid header value"))?,
        );
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access profile endpoints
    #[must_use]
    pub fn profile(&self) -> ProfileApi {
        ProfileApi::new(self.clone())
    }

    /// Access post endpoints
    #[must_use]
    pub fn posts(&self) -> PostsApi {
        PostsApi::new(self.clone())
    }

    /// Access comment endpoints
    #[must_use]
    pub fn comments(&self) -> CommentsApi {
        CommentsApi::new(self.clone())
    }

    /// Access the service status endpoint
    #[must_use]
    pub fn status(&self) -> StatusApi {
        StatusApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Request dispatch
    // -------------------------------------------------------------------------

    /// Build a GET request for an endpoint path and query pairs
    ///
    /// Split out from [`Self::get`] so tests can inspect the fully-built
    /// request without touching the network.
    pub(crate) fn request_builder(&self, path: &str, query: &[(&str, String)]) -> RequestBuilder {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        self.inner.get(url).query(query)
    }

    /// Perform one GET round-trip and decode the response body as JSON
    ///
    /// Every endpoint adapter funnels through here. One outbound request per
    /// invocation; the caller owns any retry policy.
    #[instrument(skip(self, query), fields(request_id))]
    pub(crate) async fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .request_builder(path, query)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Transport)?;

        if status.is_success() {
            debug!(
                request_id = %request_id,
                path = %path,
                status = status.as_u16(),
                "request succeeded"
            );
            serde_json::from_str(&body).map_err(ApiError::Decode)
        } else {
            warn!(
                request_id = %request_id,
                path = %path,
                status = status.as_u16(),
                "upstream returned error status"
            );
            Err(ApiError::status(status.as_u16(), body))
        }
    }
}
