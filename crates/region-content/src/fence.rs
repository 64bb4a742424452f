//! Fenced code block scanning for markdown documents.
//!
//! Block structure comes from `pulldown-cmark`, so fences nested in
//! blockquotes and list items are found the same way a CommonMark renderer
//! finds them. The parser's byte offsets are then mapped back onto source
//! lines so the block body can be spliced without touching anything else.
//! Indented code blocks carry no info string and are ignored.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag};

/// A fenced code block found in a markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// First word of the info string.
    pub lang: Option<String>,
    /// Rest of the info string after the language.
    pub meta: Option<String>,
    /// The opening fence run, e.g. "```" or "~~~~".
    pub fence: String,
    /// Container prefix for lines inside the block, e.g. `"  "` in a list
    /// item or `"> "` in a blockquote.
    pub prefix: String,
    /// Byte range of the content lines between the fences.
    pub body: Range<usize>,
    /// 1-based line number of the opening fence.
    pub line: usize,
    /// Whether a closing fence was found.
    pub closed: bool,
}

/// Finds all fenced code blocks in `source`, in document order.
pub fn find_code_blocks(source: &str) -> Vec<CodeBlock> {
    Parser::new(source)
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                locate_block(source, range, &info)
            }
            _ => None,
        })
        .collect()
}

/// Maps a parsed block's byte range onto its opening line, body and closing line.
fn locate_block(source: &str, range: Range<usize>, info: &str) -> Option<CodeBlock> {
    let line_start = source[..range.start].rfind('\n').map_or(0, |i| i + 1);
    let block = &source[range.start..range.end];
    let open_end = range.start + block.find('\n').map_or(block.len(), |i| i + 1);

    let opening = source[line_start..open_end].trim_end_matches(['\n', '\r']);
    let fence_pos = opening.find(['`', '~'])?;
    let fence_char = opening[fence_pos..].chars().next()?;
    let fence_len = opening[fence_pos..]
        .chars()
        .take_while(|c| *c == fence_char)
        .count();

    let content_end = range.start + block.trim_end_matches(['\n', '\r']).len();
    let last_line_start = source[..content_end].rfind('\n').map_or(0, |i| i + 1);
    let closed = last_line_start >= open_end
        && is_closing(&source[last_line_start..content_end], fence_char, fence_len);

    let body_end = if closed {
        last_line_start
    } else if source[range.end..].starts_with('\n') {
        range.end + 1
    } else {
        range.end
    };

    let (lang, meta) = split_info(info);

    Some(CodeBlock {
        lang,
        meta,
        fence: fence_char.to_string().repeat(fence_len),
        prefix: container_prefix(&opening[..fence_pos]),
        body: open_end..body_end.max(open_end),
        line: source[..line_start].matches('\n').count() + 1,
        closed,
    })
}

/// Splits an info string into its first word and the trimmed remainder.
fn split_info(info: &str) -> (Option<String>, Option<String>) {
    let info = info.trim();
    let (lang, meta) = match info.split_once(char::is_whitespace) {
        Some((lang, meta)) => (lang, meta.trim()),
        None => (info, ""),
    };
    (
        (!lang.is_empty()).then(|| lang.to_string()),
        (!meta.is_empty()).then(|| meta.to_string()),
    )
}

/// Whether `line`, once its container markers are removed, closes a fence.
fn is_closing(line: &str, fence_char: char, min_len: usize) -> bool {
    let rest = line.trim_start_matches([' ', '\t', '>']);
    let run = rest.chars().take_while(|c| *c == fence_char).count();
    run >= min_len && rest[run..].trim().is_empty()
}

/// Text before the opening fence, with list markers blanked to spaces.
fn container_prefix(before_fence: &str) -> String {
    before_fence
        .chars()
        .map(|c| if c == '>' || c == '\t' { c } else { ' ' })
        .collect()
}
