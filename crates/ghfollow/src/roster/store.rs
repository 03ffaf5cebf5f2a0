use std::path::Path;

use crate::platform::UserRecord;

use super::errors::{Result, RosterError};
use super::format::{parse_csv, render_csv};

/// Write users to `path`, replacing any existing file.
///
/// Returns the number of rows written.
pub fn save_csv(users: &[UserRecord], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    std::fs::write(path, render_csv(users)).map_err(|source| RosterError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = users.len(), "Saved roster");
    Ok(users.len())
}

/// Read users from the roster file at `path`.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<UserRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let users = parse_csv(&text);
    tracing::debug!(path = %path.display(), count = users.len(), "Loaded roster");
    Ok(users)
}
