use std::fmt;

use async_trait::async_trait;

use super::errors::Result;

/// One remote account: its login handle and profile URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Account identifier (GitHub `login`).
    pub login: String,
    /// Profile page URL (GitHub `html_url`).
    pub html_url: String,
}

impl UserRecord {
    pub fn new(login: impl Into<String>, html_url: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            html_url: html_url.into(),
        }
    }
}

/// A paginated list endpoint that yields user records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEndpoint {
    /// Accounts the authenticated user follows.
    Following,
    /// Members of an organization.
    OrgMembers { org: String },
}

impl ListEndpoint {
    pub fn org_members(org: impl Into<String>) -> Self {
        Self::OrgMembers { org: org.into() }
    }

    /// API path of the endpoint, without the paging query.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Following => "/user/following".to_string(),
            Self::OrgMembers { org } => format!("/orgs/{}/members", org),
        }
    }

    /// Short human-readable label used in progress output.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Following => "following".to_string(),
            Self::OrgMembers { org } => org.clone(),
        }
    }
}

/// The mutating operation applied to each batch item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Add-Relation: start following the account.
    Follow,
    /// Remove-Relation: stop following the account.
    Unfollow,
}

impl Relation {
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Unfollow => "unfollow",
        }
    }

    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Follow => "followed",
            Self::Unfollow => "unfollowed",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Client for a social-graph API.
///
/// Every method reports failure through [`PlatformError`](super::PlatformError)
/// rather than an empty value, so callers can tell an empty page from a
/// failed one.
#[async_trait]
pub trait GraphClient: Send + Sync {
    /// Fetch one page (1-indexed) of an endpoint. An empty vector means the
    /// collection is exhausted.
    async fn list_page(&self, endpoint: &ListEndpoint, page: u32) -> Result<Vec<UserRecord>>;

    /// Follow an account. Following an already followed account succeeds.
    async fn follow(&self, login: &str) -> Result<()>;

    /// Unfollow an account. Unfollowing a non-followed account succeeds.
    async fn unfollow(&self, login: &str) -> Result<()>;

    /// Dispatch to [`follow`](Self::follow) or [`unfollow`](Self::unfollow).
    async fn apply(&self, relation: Relation, login: &str) -> Result<()> {
        match relation {
            Relation::Follow => self.follow(login).await,
            Relation::Unfollow => self.unfollow(login).await,
        }
    }
}
