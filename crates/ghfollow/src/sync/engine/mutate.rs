use crate::platform::{GraphClient, Relation, short_error_message};

use super::super::progress::{BatchProgress, ProgressCallback, emit};
use super::super::types::{BatchOptions, BatchResult, FailedItem};

/// Apply `relation` to every login, strictly in order, one call at a time.
///
/// A failed call is logged and recorded, and the batch moves on. After each
/// call, whatever its outcome, the task sleeps for `options.delay`. With
/// `options.trailing_delay` set, that includes the final item.
///
/// `should_stop` is polled before each item and before each pause. Once it
/// returns true, the remaining items are counted as skipped.
pub async fn apply_to_all<C, L, S>(
    client: &C,
    logins: &[L],
    relation: Relation,
    options: &BatchOptions,
    should_stop: S,
    on_progress: Option<&ProgressCallback>,
) -> BatchResult
where
    C: GraphClient + ?Sized,
    L: AsRef<str>,
    S: Fn() -> bool,
{
    let mut result = BatchResult::new(relation);
    let total = logins.len();

    emit(
        on_progress,
        BatchProgress::MutatingUsers {
            relation,
            count: total,
            delay: options.delay,
        },
    );

    for (index, login) in logins.iter().enumerate() {
        if should_stop() {
            result.skipped = total - index;
            tracing::warn!(
                relation = %relation,
                remaining = result.skipped,
                "Stop requested, skipping remaining users"
            );
            break;
        }

        let login = login.as_ref();
        match client.apply(relation, login).await {
            Ok(()) => {
                result.succeeded += 1;
                tracing::debug!(relation = %relation, login = %login, "Relation applied");
                emit(
                    on_progress,
                    BatchProgress::Mutated {
                        relation,
                        login: login.to_string(),
                    },
                );
            }
            Err(e) => {
                let error = short_error_message(&e);
                tracing::warn!(login = %login, error = %error, "Failed to {}", relation);
                emit(
                    on_progress,
                    BatchProgress::MutationFailed {
                        relation,
                        login: login.to_string(),
                        error: error.clone(),
                    },
                );
                result.failed.push(FailedItem {
                    login: login.to_string(),
                    error,
                });
            }
        }

        let is_last = index + 1 == total;
        if (is_last && !options.trailing_delay) || options.delay.is_zero() || should_stop() {
            continue;
        }

        emit(
            on_progress,
            BatchProgress::Waiting {
                delay: options.delay,
            },
        );
        tokio::time::sleep(options.delay).await;
    }

    emit(
        on_progress,
        BatchProgress::MutationComplete {
            relation,
            succeeded: result.succeeded,
            failed: result.failed.len(),
            skipped: result.skipped,
        },
    );

    result
}
