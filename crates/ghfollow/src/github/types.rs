use std::fmt;

use base64::Engine;
use serde::Deserialize;

/// Default public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// API version pinned via `X-GitHub-Api-Version`.
pub const API_VERSION: &str = "2022-11-28";

/// Account name and personal access token used for HTTP Basic auth.
///
/// Built once at startup and handed to [`GitHubClient`](super::GitHubClient).
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A user object as returned by the list endpoints.
///
/// Only the fields we persist are modelled; the rest of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub html_url: String,
}

/// Error body GitHub returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct GitHubErrorBody {
    pub message: String,
}
