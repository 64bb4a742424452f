//! Resolving a single code block reference into replacement text.
//!
//! This is the one place where failures become display text: every stage
//! below returns a `Result`, and [`Embedder::embed_block`] turns an error
//! into [`EmbedOutcome::Failed`] after logging it.

use region_blocks::{Reference, extract};
use region_fs::{NormalizedPath, PathResolver, io};

use crate::error::{Error, Result};
use crate::format::CommentStyle;

/// What happened to one code block.
#[derive(Debug)]
pub enum EmbedOutcome {
    /// The metadata had no `file=` reference; the block is left unmodified.
    Skipped,
    /// The referenced text, ready to replace the block's content.
    Embedded { path: NormalizedPath, text: String },
    /// Some stage failed; `path` is the path that was attempted.
    Failed { path: NormalizedPath, error: Error },
}

impl EmbedOutcome {
    /// The replacement content for the block, if it should change.
    ///
    /// Failures render as one comment line naming the attempted path and
    /// the cause, so the page still builds.
    pub fn replacement(&self, style: CommentStyle) -> Option<String> {
        match self {
            Self::Skipped => None,
            Self::Embedded { text, .. } => Some(text.clone()),
            Self::Failed { path, error } => Some(style.format_line(&format!(
                "Error importing from {path}: {}",
                error.cause()
            ))),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Embeds referenced source code using a fixed resolver.
#[derive(Debug, Clone)]
pub struct Embedder {
    resolver: PathResolver,
}

impl Embedder {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Load the text a reference points at, as seen from `document`.
    ///
    /// Returns the resolved path alongside the result so callers can report
    /// it on failure.
    pub fn load(
        &self,
        reference: &Reference,
        document: &NormalizedPath,
    ) -> (NormalizedPath, Result<String>) {
        let path = self.resolver.resolve(&reference.path, document);
        let result = io::read_text(&path)
            .map_err(Error::from)
            .and_then(|content| extract(&content, reference.region()).map_err(Error::from));
        (path, result)
    }

    /// Process the metadata of one code block found in `document`.
    pub fn embed_block(&self, meta: &str, document: &NormalizedPath) -> EmbedOutcome {
        let Some(reference) = Reference::parse(meta) else {
            return EmbedOutcome::Skipped;
        };

        match self.load(&reference, document) {
            (path, Ok(text)) => {
                tracing::debug!(
                    document = %document,
                    path = %path,
                    region = reference.region(),
                    "Embedded code"
                );
                EmbedOutcome::Embedded { path, text }
            }
            (path, Err(error)) => {
                tracing::error!(
                    document = %document,
                    "Failed to import code from {}: {}",
                    path,
                    error.cause()
                );
                EmbedOutcome::Failed { path, error }
            }
        }
    }
}
