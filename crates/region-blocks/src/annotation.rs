//! Parsing of `file=` annotations from code block metadata.
//!
//! The metadata is the part of a fenced code block's info string after the
//! language, for example `title="demo" file=snippets/demo.dart#greet`.

use regex::Regex;
use std::sync::LazyLock;

/// Matches the first `file=` token and captures the non-whitespace run after it.
static FILE_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"file=(\S+)").expect("Invalid file reference regex"));

/// A parsed `file=<path>[#<region>]` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The raw path, possibly starting with a root placeholder.
    pub path: String,
    /// The requested region, if any.
    pub region: Option<String>,
}

impl Reference {
    /// Parses the first `file=` token out of a metadata string.
    ///
    /// Returns `None` when there is no reference; the block should then be
    /// left alone. The token is split at its first `#`: the left side is the
    /// path and the right side the region name. An empty region name
    /// (`file=a.rs#`) counts as no region.
    ///
    /// # Example
    /// ```
    /// use region_blocks::Reference;
    ///
    /// let reference = Reference::parse("dart file=snippets/demo.dart#greet").unwrap();
    /// assert_eq!(reference.path, "snippets/demo.dart");
    /// assert_eq!(reference.region.as_deref(), Some("greet"));
    ///
    /// assert!(Reference::parse("title=\"no reference\"").is_none());
    /// ```
    pub fn parse(meta: &str) -> Option<Self> {
        let token = FILE_REFERENCE_REGEX.captures(meta)?.get(1)?.as_str();

        let reference = match token.split_once('#') {
            Some((path, region)) => Self {
                path: path.to_string(),
                region: (!region.is_empty()).then(|| region.to_string()),
            },
            None => Self {
                path: token.to_string(),
                region: None,
            },
        };
        Some(reference)
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Shorthand for [`Reference::parse`].
pub fn parse_reference(meta: &str) -> Option<Reference> {
    Reference::parse(meta)
}
