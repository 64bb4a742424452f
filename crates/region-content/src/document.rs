//! Embedding every annotated code block of a markdown document.

use serde::Serialize;

use region_fs::{NormalizedPath, io};

use crate::embed::{EmbedOutcome, Embedder};
use crate::error::Result;
use crate::fence::find_code_blocks;
use crate::format::CommentStyle;

/// A code block whose reference could not be embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFailure {
    /// 1-based line of the opening fence.
    pub line: usize,
    /// The resolved path that was attempted.
    pub path: String,
    pub message: String,
}

/// Summary of one document's embedding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedReport {
    pub blocks_seen: usize,
    pub embedded: usize,
    pub failures: Vec<EmbedFailure>,
}

impl EmbedReport {
    /// True when no block failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A document with its annotated code blocks filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedDocument {
    pub text: String,
    pub report: EmbedReport,
}

impl Embedder {
    /// Fill in every annotated code block of `source`.
    ///
    /// `document` is the location of `source` and anchors relative
    /// references. Each block is handled on its own; one failing block does
    /// not affect the others. Text outside replaced block bodies is copied
    /// byte for byte.
    pub fn embed_document(&self, source: &str, document: &NormalizedPath) -> EmbeddedDocument {
        let mut text = String::with_capacity(source.len());
        let mut report = EmbedReport::default();
        let mut cursor = 0;

        for block in find_code_blocks(source) {
            report.blocks_seen += 1;

            let outcome = self.embed_block(block.meta.as_deref().unwrap_or(""), document);
            let style = CommentStyle::for_language(block.lang.as_deref());
            let Some(replacement) = outcome.replacement(style) else {
                continue;
            };

            match outcome {
                EmbedOutcome::Embedded { .. } => report.embedded += 1,
                EmbedOutcome::Failed { path, error } => report.failures.push(EmbedFailure {
                    line: block.line,
                    path: path.to_string(),
                    message: error.cause(),
                }),
                EmbedOutcome::Skipped => {}
            }

            text.push_str(&source[cursor..block.body.start]);
            if !source[..block.body.start].ends_with('\n') {
                // Opening fence was the last line and had no newline
                text.push('\n');
            }
            text.push_str(&render_body(&replacement, &block.prefix));
            cursor = block.body.end;

            if !block.closed {
                text.push_str(&block.prefix);
                text.push_str(&block.fence);
                text.push('\n');
            }
        }

        text.push_str(&source[cursor..]);

        EmbeddedDocument { text, report }
    }

    /// Read a markdown file and fill in its annotated code blocks.
    ///
    /// Only failing to read the document itself is an error.
    pub fn embed_file(&self, document: &NormalizedPath) -> Result<EmbeddedDocument> {
        let source = io::read_text(document)?;
        let embedded = self.embed_document(&source, document);
        tracing::info!(
            document = %document,
            embedded = embedded.report.embedded,
            failed = embedded.report.failures.len(),
            "Processed document"
        );
        Ok(embedded)
    }
}

/// Block body lines behind the block's container prefix, each ending in `\n`.
///
/// Blank lines keep only the visible part of the prefix (`>` markers).
fn render_body(text: &str, prefix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let blank_prefix = prefix.trim_end();
    let mut body = String::with_capacity(text.len() + 1);
    for line in text.split('\n') {
        if line.is_empty() {
            body.push_str(blank_prefix);
        } else {
            body.push_str(prefix);
            body.push_str(line);
        }
        body.push('\n');
    }
    body
}
