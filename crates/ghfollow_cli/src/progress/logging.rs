use ghfollow::sync::BatchProgress;

/// Logging reporter using tracing for structured output.
pub struct LoggingReporter;

impl LoggingReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, event: BatchProgress) {
        match event {
            BatchProgress::FetchingPages { source } => {
                tracing::info!(source = %source, "Fetching users");
            }

            BatchProgress::FetchedPage {
                source,
                page,
                count,
                total_so_far,
            } => {
                tracing::debug!(source = %source, page, count, total_so_far, "Fetched page");
            }

            BatchProgress::FetchComplete {
                source,
                total,
                complete,
            } => {
                if complete {
                    tracing::info!(source = %source, total, "Fetch complete");
                } else {
                    tracing::warn!(source = %source, total, "Fetch stopped early, list is partial");
                }
            }

            BatchProgress::MutatingUsers {
                relation,
                count,
                delay,
            } => {
                tracing::info!(
                    relation = %relation,
                    count,
                    delay_secs = delay.as_secs_f64(),
                    "Starting batch"
                );
            }

            BatchProgress::Mutated { relation, login } => {
                tracing::info!(login = %login, "{}", relation.past_tense());
            }

            BatchProgress::MutationFailed {
                relation,
                login,
                error,
            } => {
                tracing::warn!(login = %login, error = %error, "Failed to {}", relation);
            }

            BatchProgress::Waiting { delay } => {
                tracing::debug!(delay_secs = delay.as_secs_f64(), "Waiting");
            }

            BatchProgress::MutationComplete {
                relation,
                succeeded,
                failed,
                skipped,
            } => {
                tracing::info!(relation = %relation, succeeded, failed, skipped, "Batch complete");
            }

            _ => {}
        }
    }
}

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}
