//! Profile API endpoints
//!
//! Maps to the `api/v1/profile/*` upstream paths. Upstream addresses a
//! profile either by `username` (the public handle) or by `urn` (the opaque
//! upstream-assigned identifier); each method takes whichever its endpoint
//! requires. Identifiers are passed through verbatim, empty or not — the
//! upstream owns validation.

use crate::client::LinkdClient;
use crate::error::ApiResult;
use serde_json::Value;

/// Profile API interface
#[derive(Clone)]
pub struct ProfileApi {
    client: LinkdClient,
}

impl ProfileApi {
    /// Create a new profile API interface
    pub(crate) fn new(client: LinkdClient) -> Self {
        Self { client }
    }

    /// Get basic profile information by username
    ///
    /// GET api/v1/profile/overview
    pub async fn overview(&self, username: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/overview", &username_params(username))
            .await
    }

    /// Get profile details by URN
    ///
    /// GET api/v1/profile/details
    pub async fn details(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/details", &urn_params(urn))
            .await
    }

    /// Get contact details (email, phone, websites) by username
    ///
    /// GET api/v1/profile/contact-info
    pub async fn contact_info(&self, username: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/contact-info", &username_params(username))
            .await
    }

    /// Get complete work experience by URN
    ///
    /// GET api/v1/profile/full-experience
    pub async fn full_experience(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/full-experience", &urn_params(urn))
            .await
    }

    /// Get professional certifications by URN
    ///
    /// GET api/v1/profile/certifications
    pub async fn certifications(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/certifications", &urn_params(urn))
            .await
    }

    /// Get education history by URN
    ///
    /// GET api/v1/profile/education
    pub async fn education(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/education", &urn_params(urn))
            .await
    }

    /// Get profile skills by URN
    ///
    /// GET api/v1/profile/skills
    pub async fn skills(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/skills", &urn_params(urn))
            .await
    }

    /// Get social network metrics (connections, followers) by username
    ///
    /// GET api/v1/profile/social-matrix
    pub async fn social_matrix(&self, username: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/social-matrix", &username_params(username))
            .await
    }

    /// Get given and received recommendations by URN
    ///
    /// GET api/v1/profile/recommendations
    pub async fn recommendations(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/recommendations", &urn_params(urn))
            .await
    }

    /// Get similar profiles by URN
    ///
    /// GET api/v1/profile/similar
    pub async fn similar(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/similar", &urn_params(urn))
            .await
    }

    /// Get "about this profile" data (last update, verification) by URN
    ///
    /// GET api/v1/profile/about
    pub async fn about(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/about", &urn_params(urn))
            .await
    }

    /// Get all reactions for a profile by URN
    ///
    /// GET api/v1/profile/reactions
    ///
    /// Pass the cursor from a previous response to continue iteration, or
    /// `""` for the first page.
    pub async fn reactions(&self, urn: &str, cursor: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/profile/reactions", &reactions_params(urn, cursor))
            .await
    }
}

fn username_params(username: &str) -> Vec<(&'static str, String)> {
    vec![("username", username.to_string())]
}

fn urn_params(urn: &str) -> Vec<(&'static str, String)> {
    vec![("urn", urn.to_string())]
}

fn reactions_params(urn: &str, cursor: &str) -> Vec<(&'static str, String)> {
    let mut params = urn_params(urn);
    if !cursor.is_empty() {
        params.push(("cursor", cursor.to_string()));
    }
    params
}
