//! Conversion from GitHub payloads to platform records.

use crate::platform::UserRecord;

use super::types::GitHubUser;

/// Convert a GitHub user object into a [`UserRecord`].
pub fn to_user_record(user: GitHubUser) -> UserRecord {
    UserRecord {
        login: user.login,
        html_url: user.html_url,
    }
}
