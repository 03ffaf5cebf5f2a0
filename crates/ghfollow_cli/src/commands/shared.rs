use std::time::Duration;

use ghfollow::Relation;
use ghfollow::github::GitHubClient;
use ghfollow::sync::{BatchOptions, BatchResult};

use crate::PaceOptions;
use crate::config::{Config, ConfigError};

/// Parse a `--delay` value: a non-negative number of seconds.
pub(crate) fn parse_delay(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number of seconds"))?;
    if secs < 0.0 {
        return Err(format!("delay must not be negative (got {secs})"));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid delay `{s}`: {e}"))
}

/// Build the API client from configured credentials.
///
/// Fails before any network activity when credentials are missing.
pub(crate) fn build_client(config: &Config) -> Result<GitHubClient, Box<dyn std::error::Error>> {
    let credentials = config.credentials()?;
    let client = GitHubClient::new(&credentials, &config.github.api_url, config.timeout())?;
    tracing::debug!(
        username = %credentials.username(),
        api_url = %client.api_url(),
        "GitHub client ready"
    );
    Ok(client)
}

/// Merge CLI pacing flags with config defaults.
pub(crate) fn batch_options(
    config: &Config,
    relation: Relation,
    pace: &PaceOptions,
) -> Result<BatchOptions, ConfigError> {
    let delay = match pace.delay {
        Some(delay) => delay,
        None => config.delay_for(relation)?,
    };
    Ok(BatchOptions::for_relation(relation)
        .with_delay(delay)
        .with_trailing_delay(config.batch.trailing_delay && !pace.no_trailing_delay))
}

/// Human-readable summary of a finished batch, one line per entry.
pub(crate) fn summary_lines(result: &BatchResult) -> Vec<String> {
    let mut verb = result.relation.past_tense().to_string();
    if let Some(first) = verb.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    let mut headline = format!(
        "{} {} users, {} failed",
        verb,
        result.succeeded,
        result.failed.len()
    );
    if result.was_interrupted() {
        headline.push_str(&format!(" ({} skipped after stop request)", result.skipped));
    }

    let mut lines = vec![headline];
    if result.has_failures() {
        lines.push(format!("Failed to {}:", result.relation));
        lines.extend(
            result
                .failed
                .iter()
                .map(|item| format!("  {}: {}", item.login, item.error)),
        );
    }
    lines
}
