//! Splicing a generated TOC into the home document.
//!
//! The generated region is delimited by two comment lines:
//!
//! ```text
//! text kept above
//! <!--start TOC-->
//! ...replaced on every run...
//! <!--end TOC-->
//! text kept below
//! ```
//!
//! Everything outside the markers is copied byte for byte. A document without
//! a start marker gets the TOC prepended.

use crate::constants::{TOC_END_MARKER, TOC_START_MARKER};

/// Where the TOC ended up in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplicePosition {
    /// An existing marked region was replaced
    Replaced,
    /// No start marker was found; the TOC was put in front of the old content
    Prepended,
}

/// `true` if `line` is `marker`, ignoring all whitespace.
///
/// Tolerates the `<!-- start TOC -->` spelling and trailing `\r\n`.
///
/// ```
/// use wikitoc::markdown::home::is_marker_line;
///
/// assert!(is_marker_line("<!--start TOC-->\n", "<!--start TOC-->"));
/// assert!(is_marker_line("  <!-- start TOC -->\r\n", "<!--start TOC-->"));
/// assert!(!is_marker_line("<!--start TOC--> trailing", "<!--start TOC-->"));
/// ```
#[must_use]
pub fn is_marker_line(line: &str, marker: &str) -> bool {
    let mut line_chars = line.chars().filter(|c| !c.is_whitespace());
    let mut marker_chars = marker.chars().filter(|c| !c.is_whitespace());

    loop {
        match (line_chars.next(), marker_chars.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
    }
}

/// Put `toc` into `document`.
///
/// With a start marker, the lines from it through the first end marker after
/// it are replaced by `toc` (through end of document if the end marker is
/// missing). Without one, `toc` is prepended.
///
/// ```
/// use wikitoc::markdown::home::{SplicePosition, splice_toc};
///
/// let doc = "Intro\n<!--start TOC-->\nold\n<!--end TOC-->\nOutro\n";
/// let (updated, position) = splice_toc(doc, "NEW\n");
/// assert_eq!(updated, "Intro\nNEW\nOutro\n");
/// assert_eq!(position, SplicePosition::Replaced);
/// ```
#[must_use]
pub fn splice_toc(document: &str, toc: &str) -> (String, SplicePosition) {
    let mut lines = document.split_inclusive('\n');
    let mut before = String::new();
    let mut found_start = false;

    for line in lines.by_ref() {
        if is_marker_line(line, TOC_START_MARKER) {
            found_start = true;
            break;
        }
        before.push_str(line);
    }

    if !found_start {
        let mut updated = String::with_capacity(toc.len() + document.len());
        updated.push_str(toc);
        updated.push_str(document);
        return (updated, SplicePosition::Prepended);
    }

    for line in lines.by_ref() {
        if is_marker_line(line, TOC_END_MARKER) {
            break;
        }
    }

    let mut updated = before;
    updated.push_str(toc);
    for line in lines {
        updated.push_str(line);
    }

    (updated, SplicePosition::Replaced)
}
