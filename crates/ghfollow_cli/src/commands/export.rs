use std::path::Path;
use std::sync::Arc;

use console::Term;
use ghfollow::platform::{GraphClient, ListEndpoint};
use ghfollow::roster::save_csv;
use ghfollow::sync::{StopReason, fetch_all};

use crate::progress::ProgressReporter;

/// Fetch every user behind `endpoint` and write them to `filename`.
///
/// A page failure does not abort the export: the users fetched before it
/// are still saved, with a warning.
pub(crate) async fn handle_export<C: GraphClient + ?Sized>(
    client: &C,
    endpoint: ListEndpoint,
    filename: &Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    let reporter = Arc::new(ProgressReporter::new());
    let callback = reporter.as_callback();

    let outcome = fetch_all(client, &endpoint, Some(&callback)).await;
    reporter.finish();

    if let StopReason::Failed { page, reason } = &outcome.stop {
        if Term::stdout().is_term() {
            eprintln!(
                "Warning: page {} of {} failed ({}); saving the {} users fetched before it",
                page,
                endpoint.label(),
                reason,
                outcome.users.len()
            );
        } else {
            tracing::warn!(
                source = %endpoint.label(),
                page,
                saved = outcome.users.len(),
                "Export is partial"
            );
        }
    }

    let count = save_csv(&outcome.users, filename)?;
    println!("Successfully saved {} users to {}", count, filename.display());
    Ok(count)
}
