//! Shared types and constants for fetch and batch operations.

use std::time::Duration;

use crate::platform::{Relation, UserRecord};

/// Default pause between follow requests, in seconds.
pub const DEFAULT_FOLLOW_DELAY_SECS: f64 = 30.0;

/// Default pause between unfollow requests, in seconds.
pub const DEFAULT_UNFOLLOW_DELAY_SECS: f64 = 5.0;

/// Why a paginated fetch stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// An empty page was returned; the collection is complete.
    Exhausted,
    /// A page request failed; the items before it were kept.
    Failed {
        /// The page that failed (1-indexed).
        page: u32,
        /// Short error message.
        reason: String,
    },
}

/// Result of walking every page of a list endpoint.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Concatenation of every page received, in page order.
    pub users: Vec<UserRecord>,
    /// Number of page requests issued, including the terminating one.
    pub pages_requested: u32,
    /// Why pagination stopped.
    pub stop: StopReason,
}

impl FetchOutcome {
    /// True when pagination reached an empty page rather than a failure.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.stop, StopReason::Exhausted)
    }

    /// The identifiers of the fetched users, in order.
    #[must_use]
    pub fn logins(&self) -> Vec<String> {
        self.users.iter().map(|u| u.login.clone()).collect()
    }
}

/// Options for one batch invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Pause after each mutating call.
    pub delay: Duration,
    /// Whether to also pause after the final item.
    pub trailing_delay: bool,
}

impl BatchOptions {
    /// Defaults for a relation: 30s between follows, 5s between unfollows.
    #[must_use]
    pub fn for_relation(relation: Relation) -> Self {
        let secs = match relation {
            Relation::Follow => DEFAULT_FOLLOW_DELAY_SECS,
            Relation::Unfollow => DEFAULT_UNFOLLOW_DELAY_SECS,
        };
        Self {
            delay: Duration::from_secs_f64(secs),
            trailing_delay: true,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_trailing_delay(mut self, trailing_delay: bool) -> Self {
        self.trailing_delay = trailing_delay;
        self
    }
}

/// One item whose mutating call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    pub login: String,
    pub error: String,
}

/// Aggregate report of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// The operation that was applied.
    pub relation: Relation,
    /// Items whose call succeeded.
    pub succeeded: usize,
    /// Items whose call failed, in input order.
    pub failed: Vec<FailedItem>,
    /// Items never attempted because a stop was requested.
    pub skipped: usize,
}

impl BatchResult {
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            succeeded: 0,
            failed: Vec::new(),
            skipped: 0,
        }
    }

    /// Number of items a call was issued for.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    #[must_use]
    pub fn was_interrupted(&self) -> bool {
        self.skipped > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_options_defaults_per_relation() {
        let follow = BatchOptions::for_relation(Relation::Follow);
        assert_eq!(follow.delay, Duration::from_secs(30));
        assert!(follow.trailing_delay);

        let unfollow = BatchOptions::for_relation(Relation::Unfollow);
        assert_eq!(unfollow.delay, Duration::from_secs(5));
    }

    #[test]
    fn test_batch_options_builders() {
        let options = BatchOptions::for_relation(Relation::Follow)
            .with_delay(Duration::from_millis(250))
            .with_trailing_delay(false);
        assert_eq!(options.delay, Duration::from_millis(250));
        assert!(!options.trailing_delay);
    }

    #[test]
    fn test_batch_result_counts() {
        let mut result = BatchResult::new(Relation::Unfollow);
        assert_eq!(result.attempted(), 0);
        assert!(!result.has_failures());

        result.succeeded = 3;
        result.failed.push(FailedItem {
            login: "bob".to_string(),
            error: "boom".to_string(),
        });
        result.skipped = 2;
        assert_eq!(result.attempted(), 4);
        assert!(result.has_failures());
        assert!(result.was_interrupted());
    }

    #[test]
    fn test_fetch_outcome_completion() {
        let outcome = FetchOutcome {
            users: vec![UserRecord::new("a", "u/a"), UserRecord::new("b", "u/b")],
            pages_requested: 2,
            stop: StopReason::Exhausted,
        };
        assert!(outcome.is_complete());
        assert_eq!(outcome.logins(), vec!["a".to_string(), "b".to_string()]);

        let truncated = FetchOutcome {
            stop: StopReason::Failed {
                page: 2,
                reason: "timeout".to_string(),
            },
            ..outcome
        };
        assert!(!truncated.is_complete());
    }
}
