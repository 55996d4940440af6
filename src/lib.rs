//! Async client for the LinkdAPI unofficial LinkedIn data API
//!
//! This crate provides a thin, typed interface over the LinkdAPI RapidAPI
//! gateway: profiles, posts, comments, and reactions. Every method maps 1:1
//! onto a remote GET endpoint; responses come back as raw
//! [`serde_json::Value`] exactly as the upstream sent them.
//!
//! # Features
//!
//! - **Single dispatch path**: headers, URL assembly, and error translation
//!   are centralized in one place, shared by every endpoint method
//! - **Environment-based configuration**: load the API key and base URL from
//!   environment variables, or set them explicitly
//! - **Request correlation**: each outgoing request carries a unique ID for
//!   tracing
//! - **No hidden behavior**: no retries, no caching, no pagination
//!   traversal — cursors are opaque strings passed back verbatim
//!
//! # Example
//!
//! ```rust,no_run
//! use linkdapi::{ClientConfig, LinkdClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LinkdClient::with_config(ClientConfig::new("my-rapidapi-key"))?;
//!
//!     // Check service availability
//!     let status = client.status().check().await?;
//!     println!("status: {status}");
//!
//!     // Look up a profile
//!     let overview = client.profile().overview("some-username").await?;
//!     println!("overview: {overview}");
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::LinkdClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::LinkdClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        CommentsApi, PostCommentsPage, PostsApi, PostsPage, ProfileApi, StatusApi,
    };
    pub use crate::error::{ApiError, ApiResult};
}
