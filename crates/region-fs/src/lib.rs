//! Filesystem layer for code-region
//!
//! Resolves `file=` references against a root directory and the referencing
//! document, loads referenced files, and reads the embedding configuration.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod resolve;

pub use config::{CONFIG_FILE_NAME, ConfigStore, EmbedConfig};
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use resolve::{PathResolver, ROOT_DIR_PLACEHOLDER};
