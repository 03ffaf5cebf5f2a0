//! GitHub API client for the follow graph.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`types`] - Credentials and wire payloads
//! - [`client`] - The authenticated client and its [`GraphClient`](crate::platform::GraphClient) impl
//! - [`pagination`] - Page-addressed routes
//! - [`convert`] - Payload conversion to platform records
//!
//! # Example
//!
//! ```ignore
//! use ghfollow::github::{Credentials, GitHubClient, DEFAULT_API_URL};
//! use ghfollow::platform::ListEndpoint;
//! use ghfollow::sync::fetch_all;
//!
//! let client = GitHubClient::new(&creds, DEFAULT_API_URL, timeout)?;
//! let outcome = fetch_all(&client, &ListEndpoint::org_members("rust-lang"), None).await;
//! ```

mod client;
mod convert;
mod error;
mod pagination;
mod types;

pub use client::GitHubClient;
pub use convert::to_user_record;
pub use error::{GitHubError, is_rate_limit_error};
pub use pagination::{PAGE_SIZE, page_route};
pub use types::{API_VERSION, Credentials, DEFAULT_API_URL, GitHubUser};
