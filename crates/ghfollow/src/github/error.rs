//! GitHub API error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::platform::PlatformError;

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The request never produced a response (DNS, TLS, timeout...).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-2xx response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Primary or secondary rate limit hit.
    #[error("Rate limit exceeded. Resets at {reset_at}")]
    RateLimited { reset_at: DateTime<Utc> },

    /// Credentials rejected.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Organization or user does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client could not be constructed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<GitHubError> for PlatformError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(message) => PlatformError::Network { message },
            GitHubError::Json(e) => PlatformError::Internal {
                message: format!("JSON parse error: {}", e),
            },
            GitHubError::Api { status, message } => PlatformError::Api {
                message: format!("HTTP {}: {}", status, message),
            },
            GitHubError::RateLimited { reset_at } => PlatformError::RateLimited { reset_at },
            GitHubError::Auth(message) => PlatformError::AuthFailed { message },
            GitHubError::NotFound(resource) => PlatformError::NotFound { resource },
            GitHubError::Config(message) => PlatformError::Internal { message },
        }
    }
}

/// Check whether an error means the caller should slow down.
pub fn is_rate_limit_error(err: &GitHubError) -> bool {
    match err {
        GitHubError::RateLimited { .. } => true,
        GitHubError::Api { status: 429, .. } => true,
        _ => false,
    }
}
