//! Error types for routing-fs

use std::path::PathBuf;

/// Result type for routing-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in routing-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: {path} is read-only")]
    ReadOnly { path: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error stems from missing permissions.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::ReadOnly { .. } => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::PermissionDenied,
            Self::LockFailed { .. } => false,
        }
    }
}
