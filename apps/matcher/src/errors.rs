use std::path::PathBuf;

use thiserror::Error;

/// Library-level error type.
/// Scoring itself never fails; these only surface at the record-loading boundary.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Extractor reported failure: {0}")]
    Extractor(String),

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Load queue closed: {0}")]
    LoadQueue(#[from] tokio::sync::AcquireError),
}

impl MatchError {
    /// Wraps a serde shape error with the file it came from.
    pub fn invalid_record(path: &std::path::Path, err: serde_json::Error) -> Self {
        MatchError::InvalidArgument(format!("{}: {err}", path.display()))
    }

    /// Prefixes an `InvalidArgument` message with the file it came from.
    pub fn at_path(self, path: &std::path::Path) -> Self {
        match self {
            MatchError::InvalidArgument(msg) => {
                MatchError::InvalidArgument(format!("{}: {msg}", path.display()))
            }
            other => other,
        }
    }
}
