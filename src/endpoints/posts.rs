//! Posts API endpoints
//!
//! Maps to the `api/v1/posts/*` upstream paths: a profile's posts and
//! featured posts, single-post info, and per-post comments and likes.
//!
//! Pagination controls mirror the upstream contract: numeric `start` (and
//! `count` for comments) are always sent, the opaque `cursor` is sent only
//! when non-empty.

use crate::client::LinkdClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Posts API interface
#[derive(Clone)]
pub struct PostsApi {
    client: LinkdClient,
}

impl PostsApi {
    /// Create a new posts API interface
    pub(crate) fn new(client: LinkdClient) -> Self {
        Self { client }
    }

    /// Get all featured posts for a profile by URN
    ///
    /// GET api/v1/posts/featured
    pub async fn featured(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/posts/featured", &[("urn", urn.to_string())])
            .await
    }

    /// Get all posts for a profile by URN
    ///
    /// GET api/v1/posts/all
    pub async fn all(&self, urn: &str, page: &PostsPage) -> ApiResult<Value> {
        self.client
            .get("api/v1/posts/all", &all_params(urn, page))
            .await
    }

    /// Get information about a specific post by URN
    ///
    /// GET api/v1/posts/info
    pub async fn info(&self, urn: &str) -> ApiResult<Value> {
        self.client
            .get("api/v1/posts/info", &[("urn", urn.to_string())])
            .await
    }

    /// Get comments on a specific post by URN
    ///
    /// GET api/v1/posts/comments
    pub async fn comments(&self, urn: &str, page: &PostCommentsPage) -> ApiResult<Value> {
        self.client
            .get("api/v1/posts/comments", &comments_params(urn, page))
            .await
    }

    /// Get users who liked or reacted to a post by URN
    ///
    /// GET api/v1/posts/likes
    pub async fn likes(&self, urn: &str, start: u32) -> ApiResult<Value> {
        self.client
            .get("api/v1/posts/likes", &likes_params(urn, start))
            .await
    }
}

/// Pagination controls for [`PostsApi::all`]
///
/// Defaults to the first page (`start = 0`, no cursor).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsPage {
    /// Start index
    pub start: u32,
    /// Opaque cursor from a previous response, empty for the first page
    pub cursor: String,
}

impl PostsPage {
    /// First page
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }

    /// Set the start index
    #[must_use]
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the pagination cursor
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }
}

/// Pagination controls for [`PostsApi::comments`]
///
/// Defaults match the upstream contract: `start = 0`, `count = 10`, no
/// cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentsPage {
    /// Start index
    pub start: u32,
    /// Number of comments per page
    pub count: u32,
    /// Opaque cursor from a previous response, empty for the first page
    pub cursor: String,
}

impl Default for PostCommentsPage {
    fn default() -> Self {
        Self {
            start: 0,
            count: 10,
            cursor: String::new(),
        }
    }
}

impl PostCommentsPage {
    /// First page with the default count
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }

    /// Set the start index
    #[must_use]
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the pagination cursor
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }
}

fn all_params(urn: &str, page: &PostsPage) -> Vec<(&'static str, String)> {
    let mut params = vec![("urn", urn.to_string()), ("start", page.start.to_string())];
    if !page.cursor.is_empty() {
        params.push(("cursor", page.cursor.clone()));
    }
    params
}

fn comments_params(urn: &str, page: &PostCommentsPage) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("urn", urn.to_string()),
        ("start", page.start.to_string()),
        ("count", page.count.to_string()),
    ];
    if !page.cursor.is_empty() {
        params.push(("cursor", page.cursor.clone()));
    }
    params
}

fn likes_params(urn: &str, start: u32) -> Vec<(&'static str, String)> {
    vec![("urn", urn.to_string()), ("start", start.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_defaults() {
        let params = comments_params("X", &PostCommentsPage::default());
        assert_eq!(
            params,
            vec![
                ("urn", "X".to_string()),
                ("start", "0".to_string()),
                ("count", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_comments_full_page_controls() {
        let page = PostCommentsPage::first()
            .with_start(20)
            .with_count(50)
            .with_cursor("tok");
        let params = comments_params("X", &page);
        assert_eq!(
            params,
            vec![
                ("urn", "X".to_string()),
                ("start", "20".to_string()),
                ("count", "50".to_string()),
                ("cursor", "tok".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_posts_defaults() {
        let params = all_params("X", &PostsPage::first());
        assert_eq!(
            params,
            vec![("urn", "X".to_string()), ("start", "0".to_string())]
        );
    }

    #[test]
    fn test_all_posts_cursor_sent_when_present() {
        let params = all_params("X", &PostsPage::first().with_cursor("tok"));
        assert_eq!(
            params,
            vec![
                ("urn", "X".to_string()),
                ("start", "0".to_string()),
                ("cursor", "tok".to_string()),
            ]
        );
    }

    #[test]
    fn test_likes_always_sends_start() {
        assert_eq!(
            likes_params("X", 0),
            vec![("urn", "X".to_string()), ("start", "0".to_string())]
        );
    }
}
