//! Configuration management for wikitoc
//!
//! Settings are layered, later layers winning:
//!
//! 1. **Defaults** - `Home.md`, Markdown links, tags starting at `##`
//! 2. **Wiki configuration** - `.wikitoc.toml` in the wiki directory, or the
//!    file passed with `--config`
//! 3. **Command-line flags** - `--home`, `--link-style`, `--start-level`, ...
//!
//! The wiki configuration file starts with a dot, so it is never mistaken for
//! a page.
//!
//! # Configuration File (`.wikitoc.toml`)
//!
//! ```toml
//! # Document that receives the TOC
//! home = "Home.md"
//!
//! # markdown | github | wiki
//! link_style = "github"
//!
//! # Heading level of the first tag level (1-6)
//! start_level = 2
//!
//! # Keep the previous home document as Home.md.old
//! backup = true
//!
//! # Extra file name patterns (regular expressions) to leave out
//! exclude = ['\.png$', '^Draft-']
//! ```

mod parser;

pub use parser::parse_config;

use crate::constants::CONFIG_FILE_NAME;
use crate::markdown::LinkStyle;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of a `.wikitoc.toml` file.
///
/// Every field is optional; unset fields fall back to the defaults in
/// [`TocOptions`](crate::toc::TocOptions). Unknown keys are rejected so typos
/// surface as errors instead of being silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TocConfig {
    /// File name of the home document inside the wiki directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    /// Link syntax for pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_style: Option<LinkStyle>,

    /// Heading level of the first tag level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_level: Option<usize>,

    /// Keep a `.old` copy of the home document before rewriting it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,

    /// Additional exclusion patterns, matched anywhere in the file name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl TocConfig {
    /// Default location of the configuration file for `wiki_dir`.
    #[must_use]
    pub fn default_path(wiki_dir: &Path) -> PathBuf {
        wiki_dir.join(CONFIG_FILE_NAME)
    }

    /// Load the configuration for `wiki_dir`.
    ///
    /// An `explicit` path must exist. Without one, `<wiki_dir>/.wikitoc.toml`
    /// is read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Fails if the explicit file is missing, or if a file is found but cannot
    /// be read or parsed.
    pub fn load(wiki_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading configuration from {}", path.display());
            return parse_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()));
        }

        let path = Self::default_path(wiki_dir);
        if path.is_file() {
            debug!("Loading configuration from {}", path.display());
            parse_config(&path)
        } else {
            debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, wiki_dir.display());
            Ok(Self::default())
        }
    }
}
