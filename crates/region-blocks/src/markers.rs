//! Region marker patterns.
//!
//! Marker syntaxes are a flat list of alternatives tried in order on each
//! line. A line is a marker when, ignoring surrounding whitespace, it is a
//! comment opener followed by one of the forms below and nothing else.
//!
//! Start forms:
//! - `#region <name>`
//! - `#region: <name>`
//! - `region: <name>`
//!
//! End forms:
//! - `#endregion <name>`
//! - `#endregion`
//! - `endregion`
//!
//! Names are matched literally and case-sensitively. A bare end form closes
//! whatever region is open; a named end form only closes its own name.
//!
//! Every form must follow a comment opener, the bare `endregion` included.
//! An uncommented `endregion` line is ordinary content.

use regex::Regex;

use crate::{Error, Result};

/// Single-line comment openers, plus block-comment openers used on one line.
const COMMENT_OPENER: &str = r"(?://+|#|--|;+|%|/\*|<!--)";

/// Optional closer for `/* ... */` and `<!-- ... -->` markers.
const COMMENT_CLOSER: &str = r"(?:\*/|-->)?";

const START_FORMS: [&str; 3] = [r"#region\s+{name}", r"#region:\s*{name}", r"region:\s*{name}"];

const END_FORMS: [&str; 3] = [r"#endregion\s+{name}", r"#endregion", r"endregion"];

/// Compiled start and end patterns for one region name.
#[derive(Debug, Clone)]
pub struct RegionMarkers {
    start: Vec<Regex>,
    end: Vec<Regex>,
}

impl RegionMarkers {
    /// Compile the marker patterns for `name`.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            start: compile_forms(&START_FORMS, name)?,
            end: compile_forms(&END_FORMS, name)?,
        })
    }

    /// Whether `line` opens this region.
    pub fn is_start(&self, line: &str) -> bool {
        self.start.iter().any(|pattern| pattern.is_match(line))
    }

    /// Whether `line` closes the open region.
    pub fn is_end(&self, line: &str) -> bool {
        self.end.iter().any(|pattern| pattern.is_match(line))
    }
}

fn compile_forms(forms: &[&str], name: &str) -> Result<Vec<Regex>> {
    let escaped = regex::escape(name);
    forms
        .iter()
        .map(|form| {
            let body = form.replace("{name}", &escaped);
            let pattern = format!(r"^\s*{COMMENT_OPENER}\s*{body}\s*{COMMENT_CLOSER}\s*$");
            Regex::new(&pattern).map_err(|e| Error::InvalidMarker {
                region: name.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}
