//! ghfollow - bulk management of a GitHub account's follow graph.
//!
//! This library pages through GitHub's user-list endpoints, applies follow or
//! unfollow to many accounts at a throttled pace, and persists user lists as
//! flat CSV files.
//!
//! # Example
//!
//! ```ignore
//! use ghfollow::github::{Credentials, DEFAULT_API_URL, GitHubClient};
//! use ghfollow::platform::ListEndpoint;
//! use ghfollow::{roster, sync};
//!
//! let credentials = Credentials::new("octocat", "ghp_...");
//! let client = GitHubClient::new(&credentials, DEFAULT_API_URL, Duration::from_secs(30))?;
//!
//! let outcome = sync::fetch_all(&client, &ListEndpoint::Following, None).await;
//! roster::save_csv(&outcome.users, "following.csv")?;
//! ```

pub mod github;
pub mod http;
pub mod platform;
pub mod roster;
pub mod sync;

pub use platform::{GraphClient, ListEndpoint, PlatformError, Relation, UserRecord};
pub use roster::RosterError;
