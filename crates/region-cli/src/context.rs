//! Embedding context from flags and config
//!
//! Precedence for the root directory: `--root-dir`, then `root_dir` from the
//! config file, then the config file's directory, then the working
//! directory. The resulting resolver is built once and passed explicitly to
//! every command.

use std::path::Path;

use region_content::Embedder;
use region_fs::{CONFIG_FILE_NAME, EmbedConfig, NormalizedPath};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Make `path` absolute against `cwd`, lexically.
pub fn absolute(cwd: &Path, path: &Path) -> NormalizedPath {
    if path.is_absolute() {
        NormalizedPath::new(path).clean()
    } else {
        NormalizedPath::new(cwd.join(path)).clean()
    }
}

/// Load the config that applies to this invocation, if any.
fn load_config(cli: &Cli, cwd: &Path) -> Result<EmbedConfig> {
    match &cli.config {
        Some(path) => Ok(EmbedConfig::load(&absolute(cwd, path))?),
        None => {
            let default_path = NormalizedPath::new(cwd.join(CONFIG_FILE_NAME));
            if default_path.is_file() {
                Ok(EmbedConfig::load(&default_path)?)
            } else {
                Ok(EmbedConfig::default())
            }
        }
    }
}

/// Build the embedder for this invocation.
pub fn build_embedder(cli: &Cli, cwd: &Path) -> Result<Embedder> {
    let mut config = load_config(cli, cwd)?;

    if let Some(root_dir) = &cli.root_dir {
        config.root_dir = Some(absolute(cwd, root_dir).as_str().to_string());
    }
    if let Some(placeholder) = &cli.placeholder {
        if placeholder.is_empty() {
            return Err(CliError::user("--placeholder must not be empty"));
        }
        config.placeholder = placeholder.clone();
    }

    let resolver = config.resolver(&NormalizedPath::new(cwd).clean());
    tracing::debug!(
        root_dir = %resolver.root_dir(),
        placeholder = resolver.placeholder(),
        "Embedding context ready"
    );
    Ok(Embedder::new(resolver))
}
