use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RosterError {
    /// The file the failed operation touched.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
