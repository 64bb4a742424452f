//! Error types for region-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Region \"{region}\" not found")]
    RegionNotFound { region: String },

    #[error("Cannot build markers for region \"{region}\": {message}")]
    InvalidMarker { region: String, message: String },
}
