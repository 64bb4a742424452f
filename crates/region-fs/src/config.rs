//! Format-agnostic configuration loading

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, PathResolver, ROOT_DIR_PLACEHOLDER, Result, io};

/// Conventional name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "code-region.toml";

/// Format-agnostic configuration store.
///
/// Detects format from the file extension and handles deserialization
/// transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

/// Settings for resolving `file=` references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedConfig {
    /// Directory substituted for the placeholder. Relative values are
    /// anchored at the directory holding the config file.
    pub root_dir: Option<String>,
    /// Token that stands for `root_dir` at the start of a reference path.
    pub placeholder: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            root_dir: None,
            placeholder: ROOT_DIR_PLACEHOLDER.to_string(),
        }
    }
}

impl EmbedConfig {
    /// Load and validate a config file.
    ///
    /// After loading, `root_dir` is always set: either the configured value
    /// anchored at the config file's directory, or that directory itself.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let mut config: Self = ConfigStore::new().load(path)?;

        if config.placeholder.is_empty() {
            return Err(Error::InvalidConfig {
                path: path.to_native(),
                message: "placeholder must not be empty".into(),
            });
        }

        let config_dir = path
            .parent()
            .unwrap_or_else(|| NormalizedPath::new("."));
        let root = match config.root_dir.take() {
            Some(dir) => {
                let dir = NormalizedPath::new(dir);
                if dir.is_absolute() {
                    dir.clean()
                } else {
                    config_dir.join(dir.as_str()).clean()
                }
            }
            None => config_dir,
        };
        config.root_dir = Some(root.as_str().to_string());

        tracing::debug!(config = %path, root_dir = %root, "Loaded embed config");
        Ok(config)
    }

    /// Build the resolver, falling back to `default_root` when no root is set.
    pub fn resolver(&self, default_root: &NormalizedPath) -> PathResolver {
        let root = self
            .root_dir
            .as_deref()
            .map(NormalizedPath::new)
            .unwrap_or_else(|| default_root.clone());
        PathResolver::new(root).with_placeholder(self.placeholder.clone())
    }
}
