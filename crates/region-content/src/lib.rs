//! Markdown code block embedding for code-region
//!
//! Finds fenced code blocks whose metadata carries a `file=` reference and
//! replaces their content with the referenced file or region. Failures never
//! abort a document: the block gets an inline error comment instead.

pub mod document;
pub mod embed;
pub mod error;
pub mod fence;
pub mod format;

pub use document::{EmbedFailure, EmbedReport, EmbeddedDocument};
pub use embed::{EmbedOutcome, Embedder};
pub use error::{Error, Result};
pub use fence::{CodeBlock, find_code_blocks};
pub use format::CommentStyle;
