//! Platform-agnostic seam for social-graph clients.
//!
//! The engines in [`crate::sync`] only see the [`GraphClient`] trait, so they
//! can be driven by the GitHub client in production and by in-memory fakes in
//! tests.
//!
//! # Example
//!
//! ```ignore
//! use ghfollow::platform::{GraphClient, ListEndpoint};
//!
//! async fn first_page<C: GraphClient>(client: &C) -> ghfollow::platform::Result<usize> {
//!     let users = client.list_page(&ListEndpoint::Following, 1).await?;
//!     Ok(users.len())
//! }
//! ```

mod errors;
mod types;

pub use errors::{PlatformError, Result, short_error_message};
pub use types::{GraphClient, ListEndpoint, Relation, UserRecord};
