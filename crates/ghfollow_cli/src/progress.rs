//! Progress reporting for fetch and batch operations.
//!
//! This module provides two modes of progress reporting:
//! - Interactive mode (TTY): Animated progress bars using indicatif
//! - Logging mode (non-TTY): Structured logging using tracing

mod interactive;
mod logging;

use std::sync::Arc;

use console::Term;
use ghfollow::sync::{BatchProgress, ProgressCallback};

pub use interactive::InteractiveReporter;
pub use logging::LoggingReporter;

/// Progress reporter that handles both interactive and logging modes.
pub enum ProgressReporter {
    /// Interactive progress bars for TTY.
    Interactive(InteractiveReporter),
    /// Structured logging for non-TTY (CI, pipes).
    Logging(LoggingReporter),
}

impl ProgressReporter {
    /// Create a new progress reporter, auto-detecting TTY mode.
    pub fn new() -> Self {
        if Term::stdout().is_term() {
            Self::Interactive(InteractiveReporter::new())
        } else {
            Self::Logging(LoggingReporter::new())
        }
    }

    /// Handle a progress event.
    pub fn handle(&self, event: BatchProgress) {
        match self {
            Self::Interactive(r) => r.handle(event),
            Self::Logging(r) => r.handle(event),
        }
    }

    /// Convert to a ProgressCallback for the library.
    pub fn as_callback(self: &Arc<Self>) -> ProgressCallback {
        let reporter = Arc::clone(self);
        Box::new(move |event| {
            reporter.handle(event);
        })
    }

    /// Finish all progress bars (interactive mode only).
    pub fn finish(&self) {
        if let Self::Interactive(r) = self {
            r.finish();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ghfollow::Relation;

    use super::*;

    fn every_event() -> Vec<BatchProgress> {
        vec![
            BatchProgress::FetchingPages {
                source: "acme".to_string(),
            },
            BatchProgress::FetchedPage {
                source: "acme".to_string(),
                page: 1,
                count: 100,
                total_so_far: 100,
            },
            BatchProgress::FetchComplete {
                source: "acme".to_string(),
                total: 100,
                complete: false,
            },
            BatchProgress::MutatingUsers {
                relation: Relation::Follow,
                count: 2,
                delay: Duration::from_secs(30),
            },
            BatchProgress::Mutated {
                relation: Relation::Follow,
                login: "alice".to_string(),
            },
            BatchProgress::Waiting {
                delay: Duration::from_secs(30),
            },
            BatchProgress::MutationFailed {
                relation: Relation::Follow,
                login: "bob".to_string(),
                error: "Not Found".to_string(),
            },
            BatchProgress::MutationComplete {
                relation: Relation::Follow,
                succeeded: 1,
                failed: 1,
                skipped: 0,
            },
        ]
    }

    #[test]
    fn logging_reporter_handles_every_event() {
        let reporter = Arc::new(ProgressReporter::Logging(LoggingReporter::new()));
        let callback = reporter.as_callback();
        for event in every_event() {
            callback(event);
        }
        reporter.finish();
    }

    #[test]
    fn interactive_reporter_handles_every_event() {
        let reporter = Arc::new(ProgressReporter::Interactive(InteractiveReporter::hidden()));
        let callback = reporter.as_callback();
        for event in every_event() {
            callback(event);
        }
        reporter.finish();
    }

    #[test]
    fn interactive_reporter_tolerates_events_without_start() {
        let reporter = InteractiveReporter::hidden();
        reporter.handle(BatchProgress::Mutated {
            relation: Relation::Unfollow,
            login: "alice".to_string(),
        });
        reporter.handle(BatchProgress::FetchComplete {
            source: "following".to_string(),
            total: 0,
            complete: true,
        });
        reporter.finish();
    }
}
