//! Error types for region-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from region-content
    #[error(transparent)]
    Content(#[from] region_content::Error),

    /// Error from region-fs
    #[error(transparent)]
    Fs(#[from] region_fs::Error),

    /// Error from region-blocks
    #[error(transparent)]
    Region(#[from] region_blocks::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Directory traversal error
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
