//! GitHub API client for the follow graph.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::convert::to_user_record;
use super::error::GitHubError;
use super::pagination::page_route;
use super::types::{API_VERSION, Credentials, GitHubErrorBody, GitHubUser};
use crate::http::{
    HttpHeaders, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    header_get,
};
use crate::platform::{self, GraphClient, ListEndpoint, PlatformError, UserRecord};

/// GitHub API client.
///
/// Authenticates every request with HTTP Basic auth built from
/// [`Credentials`]. All I/O goes through an [`HttpTransport`], so tests can
/// substitute an in-memory transport.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    api_url: String,
    authorization: String,
    username: String,
}

impl GitHubClient {
    /// Create a client backed by reqwest with a per-request `timeout`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use std::time::Duration;
    /// use ghfollow::github::{Credentials, GitHubClient, DEFAULT_API_URL};
    ///
    /// let creds = Credentials::new("octocat", "ghp_...");
    /// let client = GitHubClient::new(&creds, DEFAULT_API_URL, Duration::from_secs(30))?;
    /// ```
    pub fn new(
        credentials: &Credentials,
        api_url: &str,
        timeout: Duration,
    ) -> Result<Self, GitHubError> {
        let transport = ReqwestTransport::with_timeout(timeout)
            .map_err(|e| GitHubError::Config(e.to_string()))?;

        Ok(Self::new_with_transport(
            credentials,
            api_url,
            Arc::new(transport),
        ))
    }

    pub fn new_with_transport(
        credentials: &Credentials,
        api_url: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            api_url: api_url.trim_end_matches('/').to_string(),
            authorization: credentials.basic_auth_header(),
            username: credentials.username().to_string(),
        }
    }

    /// Get the API root URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the authenticated account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    fn headers(&self) -> HttpHeaders {
        vec![
            (
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ),
            ("User-Agent".to_string(), "ghfollow".to_string()),
            ("X-GitHub-Api-Version".to_string(), API_VERSION.to_string()),
            ("Authorization".to_string(), self.authorization.clone()),
        ]
    }

    /// Send an authenticated request and reject non-2xx responses.
    ///
    /// `resource` names what the route refers to, for not-found diagnostics.
    async fn send(
        &self,
        method: HttpMethod,
        route: &str,
        resource: &str,
    ) -> Result<HttpResponse, GitHubError> {
        let url = format!("{}{}", self.api_url, route);
        tracing::debug!(method = method.as_str(), url = %url, "GitHub request");

        let request = HttpRequest {
            method,
            url,
            headers: self.headers(),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| GitHubError::Http(e.to_string()))?;

        if response.is_success() {
            return Ok(response);
        }

        Err(Self::classify_failure(&response, resource))
    }

    /// Map a non-2xx response onto a [`GitHubError`].
    fn classify_failure(response: &HttpResponse, resource: &str) -> GitHubError {
        let message = Self::error_message(response);

        match response.status {
            401 => GitHubError::Auth(message),
            403 | 429 => match Self::rate_limit_reset(&response.headers) {
                Some(reset_at) => GitHubError::RateLimited { reset_at },
                None => GitHubError::Api {
                    status: response.status,
                    message,
                },
            },
            404 => GitHubError::NotFound(resource.to_string()),
            status => GitHubError::Api { status, message },
        }
    }

    /// Prefer GitHub's JSON `message`, then the raw body, then `HTTP <status>`.
    fn error_message(response: &HttpResponse) -> String {
        if let Ok(body) = serde_json::from_slice::<GitHubErrorBody>(&response.body) {
            return body.message;
        }

        let raw = String::from_utf8_lossy(&response.body);
        let raw = raw.trim();
        if raw.is_empty() {
            format!("HTTP {}", response.status)
        } else {
            raw.to_string()
        }
    }

    /// When the primary quota is exhausted, return its reset time.
    fn rate_limit_reset(headers: &HttpHeaders) -> Option<DateTime<Utc>> {
        let remaining = header_get(headers, "x-ratelimit-remaining")?
            .parse::<u64>()
            .ok()?;
        if remaining > 0 {
            return None;
        }

        let reset_at = header_get(headers, "x-ratelimit-reset")
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|epoch| DateTime::from_timestamp(epoch, 0))
            .unwrap_or_else(Utc::now);
        Some(reset_at)
    }

    /// Fetch one page of users from a list endpoint.
    pub async fn list_users(
        &self,
        endpoint: &ListEndpoint,
        page: u32,
    ) -> Result<Vec<GitHubUser>, GitHubError> {
        let resource = match endpoint {
            ListEndpoint::Following => "following list".to_string(),
            ListEndpoint::OrgMembers { org } => format!("organization: {}", org),
        };
        let response = self
            .send(HttpMethod::Get, &page_route(endpoint, page), &resource)
            .await?;

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// `PUT /user/following/{login}`.
    pub async fn follow_user(&self, login: &str) -> Result<(), GitHubError> {
        self.send(
            HttpMethod::Put,
            &format!("/user/following/{}", login),
            &format!("user: {}", login),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /user/following/{login}`.
    pub async fn unfollow_user(&self, login: &str) -> Result<(), GitHubError> {
        self.send(
            HttpMethod::Delete,
            &format!("/user/following/{}", login),
            &format!("user: {}", login),
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl GraphClient for GitHubClient {
    async fn list_page(
        &self,
        endpoint: &ListEndpoint,
        page: u32,
    ) -> platform::Result<Vec<UserRecord>> {
        let users = self
            .list_users(endpoint, page)
            .await
            .map_err(PlatformError::from)?;
        Ok(users.into_iter().map(to_user_record).collect())
    }

    async fn follow(&self, login: &str) -> platform::Result<()> {
        self.follow_user(login).await.map_err(PlatformError::from)
    }

    async fn unfollow(&self, login: &str) -> platform::Result<()> {
        self.unfollow_user(login).await.map_err(PlatformError::from)
    }
}
