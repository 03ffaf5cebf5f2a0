//! Fetch and batch engines, generic over [`GraphClient`](crate::platform::GraphClient).
//!
//! Both engines run sequentially on the calling task. Page *n+1* is never
//! requested before page *n* returns, and no two mutating calls overlap.

mod fetch;
mod mutate;

pub use fetch::fetch_all;
pub use mutate::apply_to_all;
