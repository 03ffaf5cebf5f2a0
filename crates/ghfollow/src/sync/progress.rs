//! Progress reporting types for fetch and batch operations.
//!
//! The engines emit these events; the CLI renders them as progress bars on a
//! terminal or as structured log lines otherwise.

use std::time::Duration;

use crate::platform::Relation;

/// Progress events emitted while fetching pages or mutating relations.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum BatchProgress {
    /// Starting to page through a list endpoint.
    FetchingPages {
        /// Endpoint label ("following" or the org name).
        source: String,
    },

    /// Received one page.
    FetchedPage {
        /// Endpoint label.
        source: String,
        /// Page number (1-indexed).
        page: u32,
        /// Items on this page.
        count: usize,
        /// Running total so far.
        total_so_far: usize,
    },

    /// Pagination stopped.
    FetchComplete {
        /// Endpoint label.
        source: String,
        /// Total users collected.
        total: usize,
        /// False when a failed page cut the fetch short.
        complete: bool,
    },

    /// Starting a batch.
    MutatingUsers {
        relation: Relation,
        /// Number of items in the batch.
        count: usize,
        /// Pause between calls.
        delay: Duration,
    },

    /// One call succeeded.
    Mutated { relation: Relation, login: String },

    /// One call failed; the batch continues.
    MutationFailed {
        relation: Relation,
        login: String,
        error: String,
    },

    /// Pausing before the next call.
    Waiting { delay: Duration },

    /// Batch finished or was stopped.
    MutationComplete {
        relation: Relation,
        succeeded: usize,
        failed: usize,
        skipped: usize,
    },
}

/// Callback for progress updates.
pub type ProgressCallback = Box<dyn Fn(BatchProgress) + Send + Sync>;

/// Emit a progress event if a callback is provided.
///
/// # Example
///
/// ```ignore
/// use ghfollow::sync::{emit, BatchProgress, ProgressCallback};
///
/// fn report(on_progress: Option<&ProgressCallback>) {
///     emit(on_progress, BatchProgress::Waiting { delay: Duration::from_secs(5) });
/// }
/// ```
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: BatchProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}
