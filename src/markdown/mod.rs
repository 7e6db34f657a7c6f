//! Markdown rendering of the tag tree.
//!
//! The renderer walks a [`TagNode`] depth-first and produces the Table of
//! Contents text:
//!
//! 1. links to the pages attached at the node, sorted by file name
//! 2. one heading per child tag, sorted by key, each followed by the child's
//!    own rendering one heading level deeper
//!
//! Every link and heading is followed by a blank line.
//!
//! # Output Format
//!
//! For a wiki with `Intro.md` (untagged) and `Setup-Guide.md` tagged
//! `Guide-Install`, [`render_toc`] with the default options produces:
//!
//! ```text
//! <!--start TOC-->
//!
//! # Table of Contents
//!
//! [Intro](Intro.md)
//!
//! ## Guide
//!
//! ### Install
//!
//! [Setup Guide](Setup-Guide.md)
//!
//! <!--end TOC-->
//! ```
//!
//! # Link Styles
//!
//! | Style      | Output for `Setup-Guide.md`       |
//! |------------|-----------------------------------|
//! | `markdown` | `[Setup Guide](Setup-Guide.md)`   |
//! | `github`   | `[Setup Guide](wiki/Setup-Guide)` |
//! | `wiki`     | `[[Setup Guide\|Setup Guide]]`    |

pub mod home;

use crate::constants::{
    DEFAULT_START_LEVEL, GITHUB_WIKI_PREFIX, MAX_HEADING_LEVEL, TOC_END_MARKER, TOC_START_MARKER,
    TOC_TITLE,
};
use crate::core::WikiTocError;
use crate::tags::TagNode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How page links are written.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// `[Display Text](Original-File.md)`
    #[default]
    Markdown,
    /// `[Display Text](wiki/Original-File)`, the path GitHub wikis resolve
    Github,
    /// `[[Display Text|Display Text]]`
    Wiki,
}

/// Options controlling [`render_tree`] and [`render_toc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading level of the first tag level (`2` → `## Tag`)
    pub start_level: usize,
    /// Link syntax for pages
    pub link_style: LinkStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            start_level: DEFAULT_START_LEVEL,
            link_style: LinkStyle::default(),
        }
    }
}

impl RenderOptions {
    /// Check that `start_level` is a valid Markdown heading level.
    ///
    /// # Errors
    ///
    /// [`WikiTocError::InvalidStartLevel`] outside `1..=6`.
    pub fn validate(&self) -> Result<(), WikiTocError> {
        if (1..=MAX_HEADING_LEVEL).contains(&self.start_level) {
            Ok(())
        } else {
            Err(WikiTocError::InvalidStartLevel {
                level: self.start_level,
            })
        }
    }
}

/// Page title shown for `filename`: extension stripped, dashes as spaces.
///
/// ```
/// use wikitoc::markdown::display_name;
///
/// assert_eq!(display_name("Setup-Guide.md"), "Setup Guide");
/// assert_eq!(display_name("notes.v2.txt"), "notes.v2");
/// ```
#[must_use]
pub fn display_name(filename: &str) -> String {
    page_stem(filename).replace('-', " ")
}

/// Heading text for a tag segment: underscores as spaces.
#[must_use]
pub fn heading_text(tag: &str) -> String {
    tag.replace('_', " ")
}

fn page_stem(filename: &str) -> &str {
    Path::new(filename).file_stem().and_then(|stem| stem.to_str()).unwrap_or(filename)
}

/// Render the link line for one page, without the trailing blank line.
///
/// ```
/// use wikitoc::markdown::{LinkStyle, render_link};
///
/// assert_eq!(render_link("FAQ.md", LinkStyle::Markdown), "[FAQ](FAQ.md)");
/// assert_eq!(render_link("FAQ.md", LinkStyle::Github), "[FAQ](wiki/FAQ)");
/// assert_eq!(render_link("FAQ.md", LinkStyle::Wiki), "[[FAQ|FAQ]]");
/// ```
#[must_use]
pub fn render_link(filename: &str, style: LinkStyle) -> String {
    let display = display_name(filename);

    match style {
        LinkStyle::Markdown => {
            format!("[{}]({})", escape_link_text(&display), link_destination(filename))
        }
        LinkStyle::Github => {
            let target = format!("{GITHUB_WIKI_PREFIX}{}", page_stem(filename));
            format!("[{}]({})", escape_link_text(&display), link_destination(&target))
        }
        LinkStyle::Wiki => {
            let text = escape_wiki_text(&display);
            format!("[[{text}|{text}]]")
        }
    }
}

fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

// `|` splits a wiki link and `]]` closes it
fn escape_wiki_text(text: &str) -> String {
    text.replace('|', "\\|").replace('[', "\\[").replace(']', "\\]")
}

// CommonMark only allows spaces and unbalanced parentheses inside <...>
fn link_destination(target: &str) -> String {
    if target.chars().any(|c| c.is_whitespace() || c == '(' || c == ')') {
        format!("<{target}>")
    } else {
        target.to_string()
    }
}

/// Render `root` without the surrounding markers and title.
///
/// Pages attached at `root` come first, then each child tag as a heading of
/// level `options.start_level`, nested tags one level deeper per step.
#[must_use]
pub fn render_tree(root: &TagNode, options: &RenderOptions) -> String {
    let mut out = String::new();
    render_node(root, options.start_level, options.link_style, &mut out);
    out
}

fn render_node(node: &TagNode, level: usize, style: LinkStyle, out: &mut String) {
    for filename in node.files() {
        out.push_str(&render_link(filename, style));
        out.push_str("\n\n");
    }

    for (tag, child) in node.children() {
        out.push_str(&"#".repeat(level));
        out.push(' ');
        out.push_str(&heading_text(tag));
        out.push_str("\n\n");
        render_node(child, level + 1, style, out);
    }
}

/// Render the complete TOC block, markers and title included.
///
/// The result always ends with the end marker followed by a newline.
#[must_use]
pub fn render_toc(root: &TagNode, options: &RenderOptions) -> String {
    let mut out = format!("{TOC_START_MARKER}\n\n{TOC_TITLE}\n\n");
    out.push_str(&render_tree(root, options));
    out.push_str(TOC_END_MARKER);
    out.push('\n');
    out
}
