//! Error types for routing-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from routing-edit
    #[error(transparent)]
    Edit(#[from] routing_edit::Error),

    /// The routing file could not be written
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: routing_fs::Error,
    },
}
