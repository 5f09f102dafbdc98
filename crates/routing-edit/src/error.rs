//! Error types for routing-edit

use std::path::PathBuf;

/// Result type for routing-edit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while adding a routing import
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bundle \"{bundle}\" is already imported.")]
    DuplicateImport { bundle: String },

    #[error("Failed to parse XML routing content: {message}")]
    MalformedMarkup { message: String },

    #[error("Failed to load config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unsupported config format: {extension}")]
    UnsupportedConfigFormat { extension: String },

    #[error(transparent)]
    Fs(#[from] routing_fs::Error),
}

impl Error {
    pub fn markup(message: impl Into<String>) -> Self {
        Self::MalformedMarkup {
            message: message.into(),
        }
    }
}
