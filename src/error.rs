//! Error types for component detection

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a scan
///
/// Problems below the scan root (unreadable subdirectories, malformed
/// manifests) are logged and skipped instead of surfacing here.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Scan cancelled")]
    Cancelled,

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

impl DetectError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
