//! Resolution of `file=` reference paths to absolute paths.
//!
//! Resolution happens in two fixed stages:
//!
//! 1. A leading root placeholder (`<rootDir>` by default) is replaced with
//!    the configured root directory.
//! 2. If the result is still relative, it is joined onto the directory that
//!    contains the referencing document.
//!
//! Both stages are lexical. Nothing here touches the filesystem.

use crate::NormalizedPath;

/// Default placeholder token standing for the configured root directory.
pub const ROOT_DIR_PLACEHOLDER: &str = "<rootDir>";

/// Resolves reference paths against a root directory and a referencing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root_dir: NormalizedPath,
    placeholder: String,
}

impl PathResolver {
    /// Create a resolver using the default `<rootDir>` placeholder.
    pub fn new(root_dir: impl Into<NormalizedPath>) -> Self {
        Self {
            root_dir: root_dir.into(),
            placeholder: ROOT_DIR_PLACEHOLDER.to_string(),
        }
    }

    /// Use a different placeholder token.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn root_dir(&self) -> &NormalizedPath {
        &self.root_dir
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace a leading placeholder with the root directory.
    ///
    /// Only a prefix is substituted; a placeholder appearing later in the
    /// path is left as literal text.
    pub fn substitute_root(&self, raw: &str) -> String {
        if self.placeholder.is_empty() {
            return raw.to_string();
        }
        match raw.strip_prefix(self.placeholder.as_str()) {
            Some(rest) => {
                let root = self.root_dir.as_str().trim_end_matches('/');
                format!("{root}{rest}")
            }
            None => raw.to_string(),
        }
    }

    /// Resolve `raw` as referenced from `document`.
    ///
    /// Deterministic: the same inputs always produce the same path. The
    /// result is absolute whenever `document` (or the root directory, for
    /// placeholder paths) is absolute.
    pub fn resolve(&self, raw: &str, document: &NormalizedPath) -> NormalizedPath {
        let substituted = NormalizedPath::new(self.substitute_root(raw));

        let resolved = if substituted.is_absolute() {
            substituted.clean()
        } else {
            let base = document
                .parent()
                .unwrap_or_else(|| NormalizedPath::new("."));
            base.join(substituted.as_str()).clean()
        };

        tracing::debug!(
            reference = raw,
            document = %document,
            resolved = %resolved,
            "Resolved reference path"
        );
        resolved
    }
}
