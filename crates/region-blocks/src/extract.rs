//! Region extraction from loaded source text.

use crate::{Error, RegionMarkers, Result};

/// Line range of a region's content, end exclusive.
///
/// `start` is the index of the line right after the start marker, so
/// `start <= end <= line count` always holds. An empty span means the
/// markers were adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpan {
    pub start: usize,
    pub end: usize,
}

impl RegionSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Locates the first region named `name` in `content`.
///
/// Lines are split on `\n` only. Scanning stops at the first end marker
/// after the start marker; later regions with the same name are ignored. A
/// region that is never closed runs to the end of the file.
///
/// # Errors
/// [`Error::RegionNotFound`] if no start marker for `name` exists.
pub fn find_region(content: &str, name: &str) -> Result<RegionSpan> {
    let markers = RegionMarkers::new(name)?;
    let mut start = None;

    for (index, line) in content.split('\n').enumerate() {
        match start {
            None if markers.is_start(line) => start = Some(index + 1),
            None => {}
            Some(start) if markers.is_end(line) => {
                return Ok(RegionSpan { start, end: index });
            }
            Some(_) => {}
        }
    }

    match start {
        Some(start) => {
            let end = content.split('\n').count();
            tracing::debug!(region = name, start, "Region not closed, running to end of file");
            Ok(RegionSpan { start, end })
        }
        None => Err(Error::RegionNotFound {
            region: name.to_string(),
        }),
    }
}

/// Returns the lines of region `name`, joined with `\n`, markers excluded.
///
/// # Example
/// ```
/// use region_blocks::extract_region;
///
/// let source = "void main() {\n// #region greet\nprint(\"hi\");\n// #endregion greet\n}\n";
/// assert_eq!(extract_region(source, "greet").unwrap(), "print(\"hi\");");
/// ```
pub fn extract_region(content: &str, name: &str) -> Result<String> {
    let span = find_region(content, name)?;
    tracing::debug!(region = name, start = span.start, end = span.end, "Extracted region");
    Ok(content
        .split('\n')
        .skip(span.start)
        .take(span.len())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Removes exactly one trailing `\n`, if present.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

/// Produces the text to embed: the whole file, or one region of it, with a
/// single trailing newline removed.
pub fn extract(content: &str, region: Option<&str>) -> Result<String> {
    match region {
        Some(name) => {
            let text = extract_region(content, name)?;
            Ok(strip_trailing_newline(&text).to_string())
        }
        None => Ok(strip_trailing_newline(content).to_string()),
    }
}
