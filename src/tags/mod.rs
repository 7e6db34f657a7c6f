//! Tag declarations and tag paths.
//!
//! A wiki page declares its tags on a single line:
//!
//! ```text
//! Tags: Tag_One Tag_Two Tag_Three-Sub_Tag_A
//! ```
//!
//! Each whitespace-separated token is a [`TagPath`]; its `-`-separated
//! segments describe a position in the nested [`TagNode`] hierarchy.
//! Underscores inside a segment are cosmetic and only turn into spaces when
//! the heading is rendered.

mod tree;

pub use tree::TagNode;

use crate::constants::{TAG_SEGMENT_DELIMITER, TAGS_PREFIX};
use std::fmt;

/// A dash-delimited tag path such as `Guide-Install`.
///
/// Always holds at least one non-empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagPath {
    segments: Vec<String>,
}

impl TagPath {
    /// Parse a single tag token.
    ///
    /// Empty segments (`A--B`, `-A`, `A-`) are dropped. Returns `None` when
    /// nothing is left, e.g. for `-` or `--`.
    ///
    /// ```
    /// use wikitoc::tags::TagPath;
    ///
    /// let path = TagPath::parse("Tag_Three-Sub_Tag_A").unwrap();
    /// assert_eq!(path.segments(), ["Tag_Three", "Sub_Tag_A"]);
    /// assert!(TagPath::parse("--").is_none());
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let segments: Vec<String> = token
            .split(TAG_SEGMENT_DELIMITER)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self {
                segments,
            })
        }
    }

    /// The path's segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of levels this path descends below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delimiter = TAG_SEGMENT_DELIMITER.to_string();
        write!(f, "{}", self.segments.join(&delimiter))
    }
}

/// Extract the tag paths declared on `line`.
///
/// Returns `None` when the line is not a tag declaration at all. A declaration
/// with no usable tokens yields `Some` of an empty vector; callers treat that
/// the same as no declaration and keep scanning.
///
/// ```
/// use wikitoc::tags::parse_tag_line;
///
/// let tags = parse_tag_line("Tags: Guide-Install FAQ_Topics").unwrap();
/// assert_eq!(tags.len(), 2);
/// assert!(parse_tag_line("Not a tag line").is_none());
/// assert!(parse_tag_line("Tags:Guide").is_none());
/// ```
#[must_use]
pub fn parse_tag_line(line: &str) -> Option<Vec<TagPath>> {
    let rest = line.strip_prefix(TAGS_PREFIX)?;
    Some(rest.split_whitespace().filter_map(TagPath::parse).collect())
}
