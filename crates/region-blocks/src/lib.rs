//! Annotation parsing and region extraction for code-region.
//!
//! A code block annotated with `file=<path>[#<region>]` is turned into a
//! [`Reference`] by the `annotation` module. Once the referenced file is
//! loaded, the `extract` module cuts the named region out of it.
//!
//! # Region markers
//!
//! Regions are delimited by comment lines in the source file:
//!
//! ```text
//! // #region greet
//! print("hi");
//! // #endregion greet
//! ```
//!
//! The start marker may also be written `#region: <name>` or
//! `region: <name>`, and the end marker `#endregion` or `endregion` with no
//! name. Any single-line comment opener works (`//`, `#`, `--`, `;`, `%`),
//! as do `/* */` and `<!-- -->` wrapped on one line. See `markers` for the
//! exact patterns.

pub mod annotation;
pub mod error;
pub mod extract;
pub mod markers;

pub use annotation::{Reference, parse_reference};
pub use error::{Error, Result};
pub use extract::{RegionSpan, extract, extract_region, find_region, strip_trailing_newline};
pub use markers::RegionMarkers;
