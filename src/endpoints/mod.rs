//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one group of upstream
//! endpoints. Responses are returned as raw [`serde_json::Value`]: the
//! upstream schema is undocumented and externally owned, so nothing is
//! renamed or validated on the way through.
//!
//! ## Mapping to the upstream API
//!
//! | Module | Upstream paths | Description |
//! |--------|----------------|-------------|
//! | `profile` | `api/v1/profile/*` | Profile lookups, experience, skills, reactions |
//! | `posts` | `api/v1/posts/*` | Posts, post comments, post likes |
//! | `comments` | `api/v1/comments/*` | Comments authored by a profile, comment likes |
//! | `status` | `status` | Service availability check |

pub mod comments;
pub mod posts;
pub mod profile;
pub mod status;

pub use comments::CommentsApi;
pub use posts::{PostCommentsPage, PostsApi, PostsPage};
pub use profile::ProfileApi;
pub use status::StatusApi;
