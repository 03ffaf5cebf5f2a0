use std::path::PathBuf;
use std::sync::Arc;

use ghfollow::Relation;
use ghfollow::platform::{GraphClient, ListEndpoint};
use ghfollow::roster::load_csv;
use ghfollow::sync::{BatchOptions, BatchResult, apply_to_all, fetch_all};

use crate::commands::shared::summary_lines;
use crate::progress::ProgressReporter;
use crate::shutdown::is_shutdown_requested;

/// Where a batch gets its logins from.
#[derive(Debug, Clone)]
pub(crate) enum BatchSource {
    /// A roster file previously written by an export.
    Csv(PathBuf),
    /// The live member list of an organization.
    OrgMembers(String),
}

/// Apply `relation` to every login from `source`, then print a summary.
pub(crate) async fn handle_batch<C: GraphClient + ?Sized>(
    client: &C,
    relation: Relation,
    source: BatchSource,
    options: &BatchOptions,
) -> Result<BatchResult, Box<dyn std::error::Error>> {
    let reporter = Arc::new(ProgressReporter::new());
    let callback = reporter.as_callback();

    let logins: Vec<String> = match source {
        BatchSource::Csv(path) => load_csv(&path)?.into_iter().map(|u| u.login).collect(),
        BatchSource::OrgMembers(org) => {
            fetch_all(client, &ListEndpoint::org_members(org), Some(&callback))
                .await
                .logins()
        }
    };

    let result = apply_to_all(
        client,
        &logins,
        relation,
        options,
        is_shutdown_requested,
        Some(&callback),
    )
    .await;
    reporter.finish();

    for line in summary_lines(&result) {
        println!("{line}");
    }
    Ok(result)
}
