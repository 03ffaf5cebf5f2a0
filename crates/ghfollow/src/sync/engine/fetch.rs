use crate::platform::{GraphClient, ListEndpoint, short_error_message};

use super::super::progress::{BatchProgress, ProgressCallback, emit};
use super::super::types::{FetchOutcome, StopReason};

/// Fetch every page of `endpoint` and concatenate the results.
///
/// Pages are requested one at a time starting at 1. The walk stops at the
/// first empty page, or at the first failed page. A failed page is not
/// retried. The users accumulated before it are returned, and the outcome
/// records [`StopReason::Failed`]. This function never fails outright.
pub async fn fetch_all<C: GraphClient + ?Sized>(
    client: &C,
    endpoint: &ListEndpoint,
    on_progress: Option<&ProgressCallback>,
) -> FetchOutcome {
    let source = endpoint.label();
    let mut users = Vec::new();
    let mut page = 1u32;

    emit(
        on_progress,
        BatchProgress::FetchingPages {
            source: source.clone(),
        },
    );

    let stop = loop {
        match client.list_page(endpoint, page).await {
            Ok(items) if items.is_empty() => break StopReason::Exhausted,
            Ok(items) => {
                let count = items.len();
                users.extend(items);

                emit(
                    on_progress,
                    BatchProgress::FetchedPage {
                        source: source.clone(),
                        page,
                        count,
                        total_so_far: users.len(),
                    },
                );

                page += 1;
            }
            Err(e) => {
                let reason = short_error_message(&e);
                tracing::warn!(
                    source = %source,
                    page,
                    fetched = users.len(),
                    error = %reason,
                    "Page request failed, returning partial list"
                );
                break StopReason::Failed { page, reason };
            }
        }
    };

    let outcome = FetchOutcome {
        users,
        pages_requested: page,
        stop,
    };

    emit(
        on_progress,
        BatchProgress::FetchComplete {
            source,
            total: outcome.users.len(),
            complete: outcome.is_complete(),
        },
    );

    outcome
}
