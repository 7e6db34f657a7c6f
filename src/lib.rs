//! wikitoc - tag-based Table of Contents for Markdown wikis
//!
//! Wiki pages declare where they belong with a single line:
//!
//! ```text
//! Tags: Guide-Install FAQ_Topics
//! ```
//!
//! Each whitespace-separated token is a tag path; `-` separates nesting levels.
//! wikitoc scans a wiki directory, builds the tag tree and renders it as a
//! Markdown Table of Contents, which it writes into the home document between
//! `<!--start TOC-->` and `<!--end TOC-->`.
//!
//! # Modules
//!
//! - [`scanner`] - list wiki pages and read their tag declarations
//! - [`tags`] - tag paths and the [`TagNode`](tags::TagNode) tree
//! - [`markdown`] - render the tree and splice it into the home document
//! - [`toc`] - the high-level operations used by the CLI
//! - [`config`] - `.wikitoc.toml` loading
//! - [`core`] - error types and user-facing error reports
//! - [`utils`] - atomic writes and text file helpers
//! - [`cli`] - the `wikitoc` command line
//!
//! # Example
//!
//! ```rust,no_run
//! use wikitoc::toc::{TocOptions, generate_toc};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let toc = generate_toc(Path::new("wiki"), &TocOptions::default())?;
//! print!("{toc}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod markdown;
pub mod scanner;
pub mod tags;
pub mod toc;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
