//! Pagination and batch mutation over the social graph.
//!
//! This module is client-agnostic: everything here works against any
//! [`GraphClient`](crate::platform::GraphClient).
//!
//! # Module Structure
//!
//! - [`types`] - Core types: `FetchOutcome`, `BatchOptions`, `BatchResult`, constants
//! - [`progress`] - Progress reporting: `BatchProgress`, `ProgressCallback`, `emit()`
//! - [`engine`] - The engines: `fetch_all()`, `apply_to_all()`
//!
//! # Example
//!
//! ```ignore
//! use ghfollow::platform::{ListEndpoint, Relation};
//! use ghfollow::sync::{BatchOptions, apply_to_all, fetch_all};
//!
//! async fn refollow<C: GraphClient>(client: &C) {
//!     let outcome = fetch_all(client, &ListEndpoint::Following, None).await;
//!     let options = BatchOptions::for_relation(Relation::Follow);
//!     let result = apply_to_all(client, &outcome.logins(), Relation::Follow, &options, || false, None).await;
//!     println!("Followed {} users", result.succeeded);
//! }
//! ```

pub mod engine;
mod progress;
mod types;

// Re-export types
pub use types::{BatchOptions, BatchResult, FailedItem, FetchOutcome, StopReason};

// Re-export constants
pub use types::{DEFAULT_FOLLOW_DELAY_SECS, DEFAULT_UNFOLLOW_DELAY_SECS};

// Re-export progress types
pub use progress::{BatchProgress, ProgressCallback, emit};

// Re-export engine functions for convenience
pub use engine::{apply_to_all, fetch_all};
