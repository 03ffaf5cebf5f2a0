//! In-memory graph client for command tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use ghfollow::platform::{self, GraphClient, ListEndpoint, PlatformError, Relation, UserRecord};

/// Serves `users` as a single page and records every mutating call.
#[derive(Default)]
pub(crate) struct FakeGraph {
    pub(crate) users: Vec<UserRecord>,
    pub(crate) fail_listing: bool,
    pub(crate) broken: HashSet<String>,
    pub(crate) calls: Mutex<Vec<(Relation, String)>>,
    pub(crate) listed: Mutex<Vec<ListEndpoint>>,
}

impl FakeGraph {
    pub(crate) fn with_users(logins: &[&str]) -> Self {
        Self {
            users: logins
                .iter()
                .map(|l| UserRecord::new(*l, format!("https://github.com/{l}")))
                .collect(),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<(Relation, String)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub(crate) fn listed(&self) -> Vec<ListEndpoint> {
        self.listed.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, relation: Relation, login: &str) -> platform::Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((relation, login.to_string()));
        if self.broken.contains(login) {
            return Err(PlatformError::not_found(format!("user: {login}")));
        }
        Ok(())
    }
}

#[async_trait]
impl GraphClient for FakeGraph {
    async fn list_page(&self, endpoint: &ListEndpoint, page: u32) -> platform::Result<Vec<UserRecord>> {
        self.listed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(endpoint.clone());
        if self.fail_listing {
            return Err(PlatformError::network("connection refused"));
        }
        Ok(if page == 1 { self.users.clone() } else { Vec::new() })
    }

    async fn follow(&self, login: &str) -> platform::Result<()> {
        self.record(Relation::Follow, login)
    }

    async fn unfollow(&self, login: &str) -> platform::Result<()> {
        self.record(Relation::Unfollow, login)
    }
}
