//! Global constants used throughout the wikitoc codebase.
//!
//! Marker strings, file names and defaults that more than one module needs
//! live here so the on-disk formats are defined in exactly one place.

/// Comment line that opens the generated region of the home document.
pub const TOC_START_MARKER: &str = "<!--start TOC-->";

/// Comment line that closes the generated region of the home document.
pub const TOC_END_MARKER: &str = "<!--end TOC-->";

/// Top-level heading emitted right after the start marker.
pub const TOC_TITLE: &str = "# Table of Contents";

/// Literal prefix of a tag declaration line, including the trailing space.
pub const TAGS_PREFIX: &str = "Tags: ";

/// Delimiter between the segments of a tag path (`Guide-Install`).
pub const TAG_SEGMENT_DELIMITER: char = '-';

/// Default name of the home document that receives the TOC.
pub const DEFAULT_HOME_FILE: &str = "Home.md";

/// Name of the optional per-wiki configuration file.
///
/// It starts with a dot, so the scanner never treats it as a wiki page.
pub const CONFIG_FILE_NAME: &str = ".wikitoc.toml";

/// Heading level used for the first level of tags.
///
/// Level 1 is taken by the "Table of Contents" title.
pub const DEFAULT_START_LEVEL: usize = 2;

/// Deepest heading level Markdown supports.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Suffix appended to the home file name for the atomic-write temp file.
pub const TEMP_SUFFIX: &str = "tmp";

/// Suffix appended to the home file name for the optional backup copy.
pub const BACKUP_SUFFIX: &str = "old";

/// Link prefix used by GitHub wikis.
pub const GITHUB_WIKI_PREFIX: &str = "wiki/";
