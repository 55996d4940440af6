//! Service status endpoint

use crate::client::LinkdClient;
use crate::error::ApiResult;
use serde_json::Value;

/// Service status API interface
#[derive(Clone)]
pub struct StatusApi {
    client: LinkdClient,
}

impl StatusApi {
    /// Create a new status API interface
    pub(crate) fn new(client: LinkdClient) -> Self {
        Self { client }
    }

    /// Check service availability
    ///
    /// GET status — no query parameters.
    pub async fn check(&self) -> ApiResult<Value> {
        self.client.get("status", &[]).await
    }
}
