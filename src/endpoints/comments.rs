//! Comments API endpoints
//!
//! Maps to the `api/v1/comments/*` upstream paths: every comment a profile
//! has authored, and the users who reacted to one or more comments.

use crate::client::LinkdClient;
use crate::error::ApiResult;
use serde_json::Value;

/// Comments API interface
#[derive(Clone)]
pub struct CommentsApi {
    client: LinkdClient,
}

impl CommentsApi {
    /// Create a new comments API interface
    pub(crate) fn new(client: LinkdClient) -> Self {
        Self { client }
    }

    /// Get all comments made by a profile by URN
    ///
    /// GET api/v1/comments/all
    ///
    /// Pass the cursor from a previous response to continue iteration, or
    /// `""` for the first page.
    pub async fn all(&self, urn: &str, cursor: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/comments/all", &all_params(urn, cursor))
            .await
    }

    /// Get users who liked or reacted to one or more comments
    ///
    /// GET api/v1/comments/likes
    ///
    /// Upstream accepts several comment URNs at once; they travel as one
    /// comma-separated `urn` parameter.
    pub async fn likes(&self, urns: &[&str], start: u32) -> ApiResult<Value> {
        self.client
            .get("api/v1/comments/likes", &likes_params(urns, start))
            .await
    }
}

fn all_params(urn: &str, cursor: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![("urn", urn.to_string())];
    if !cursor.is_empty() {
        params.push(("cursor", cursor.to_string()));
    }
    params
}

fn likes_params(urns: &[&str], start: u32) -> Vec<(&'static str, String)> {
    vec![("urn", urns.join(",")), ("start", start.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_omits_empty_cursor() {
        assert_eq!(all_params("X", ""), vec![("urn", "X".to_string())]);
    }

    #[test]
    fn test_all_sends_nonempty_cursor() {
        assert_eq!(
            all_params("X", "tok"),
            vec![("urn", "X".to_string()), ("cursor", "tok".to_string())]
        );
    }

    #[test]
    fn test_likes_joins_urns_with_commas() {
        assert_eq!(
            likes_params(&["a", "b", "c"], 5),
            vec![("urn", "a,b,c".to_string()), ("start", "5".to_string())]
        );
    }

    #[test]
    fn test_likes_single_urn() {
        assert_eq!(
            likes_params(&["a"], 0),
            vec![("urn", "a".to_string()), ("start", "0".to_string())]
        );
    }
}
