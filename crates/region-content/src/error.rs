//! Error types for region-content

/// Result type for region-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while embedding code
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] region_fs::Error),

    #[error(transparent)]
    Region(#[from] region_blocks::Error),
}

impl Error {
    /// Human-readable cause, without the path for read failures since the
    /// embed error text already names it.
    pub fn cause(&self) -> String {
        match self {
            Self::Fs(region_fs::Error::Io { source, .. }) => source.to_string(),
            other => other.to_string(),
        }
    }
}
