//! TOC generation and home-page updates.
//!
//! This module ties the pieces together: it builds the [`FileFilter`], scans
//! the wiki with [`scan_directory`], renders the tag tree with [`render_toc`]
//! and splices the result into the home document.
//!
//! Nothing is written until the whole wiki has been scanned and rendered, so
//! an unreadable page aborts the run with the home document untouched.
//!
//! # Example
//!
//! ```rust,no_run
//! use wikitoc::toc::{TocOptions, update_home_page};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let outcome = update_home_page(Path::new("wiki"), &TocOptions::default())?;
//! println!("{} {}", outcome.action, outcome.path.display());
//! # Ok(())
//! # }
//! ```

use crate::config::TocConfig;
use crate::constants::{BACKUP_SUFFIX, DEFAULT_HOME_FILE};
use crate::core::WikiTocError;
use crate::markdown::home::{SplicePosition, splice_toc};
use crate::markdown::{RenderOptions, render_toc};
use crate::scanner::{FileFilter, WikiScan, scan_directory};
use crate::utils::fs::{atomic_write, read_text_if_exists, sibling_with_suffix};
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything needed to produce and place a TOC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    /// File name of the home document inside the wiki directory
    pub home: String,
    /// Heading level and link style
    pub render: RenderOptions,
    /// Extra exclusion patterns
    pub exclude: Vec<String>,
    /// Keep `<home>.old` before rewriting the home document
    pub backup: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME_FILE.to_string(),
            render: RenderOptions::default(),
            exclude: Vec::new(),
            backup: false,
        }
    }
}

impl TocOptions {
    /// Options from a loaded configuration, defaults for anything unset.
    #[must_use]
    pub fn from_config(config: &TocConfig) -> Self {
        let defaults = Self::default();
        Self {
            home: config.home.clone().unwrap_or(defaults.home),
            render: RenderOptions {
                start_level: config.start_level.unwrap_or(defaults.render.start_level),
                link_style: config.link_style.unwrap_or(defaults.render.link_style),
            },
            exclude: config.exclude.clone(),
            backup: config.backup.unwrap_or(defaults.backup),
        }
    }

    /// Reject values no run could succeed with.
    ///
    /// # Errors
    ///
    /// [`WikiTocError::InvalidStartLevel`] for a heading level outside
    /// `1..=6`, [`WikiTocError::InvalidConfig`] for an empty home name or one
    /// that is a path rather than a file name.
    pub fn validate(&self) -> Result<(), WikiTocError> {
        self.render.validate()?;

        if self.home.trim().is_empty() {
            return Err(WikiTocError::InvalidConfig {
                reason: "home must not be empty".to_string(),
            });
        }

        if self.home.contains(['/', '\\']) || self.home == "." || self.home == ".." {
            return Err(WikiTocError::InvalidConfig {
                reason: format!(
                    "home must be a file name inside the wiki directory, got '{}'",
                    self.home
                ),
            });
        }

        Ok(())
    }

    /// The filter for this wiki: built-in rules, the home document and the
    /// extra patterns.
    ///
    /// # Errors
    ///
    /// [`WikiTocError::InvalidExcludePattern`] if a pattern does not compile.
    pub fn file_filter(&self) -> Result<FileFilter> {
        FileFilter::new(&self.home, &self.exclude)
    }
}

/// Scan `dir` with the filter described by `options`.
///
/// # Errors
///
/// Invalid options, a missing wiki directory, or an unreadable page.
pub fn scan_wiki(dir: &Path, options: &TocOptions) -> Result<WikiScan> {
    options.validate()?;
    let filter = options.file_filter()?;
    scan_directory(dir, &filter)
        .with_context(|| format!("Failed to scan wiki directory {}", dir.display()))
}

/// Render the complete TOC block for the wiki in `dir`.
///
/// # Errors
///
/// See [`scan_wiki`].
pub fn generate_toc(dir: &Path, options: &TocOptions) -> Result<String> {
    let scan = scan_wiki(dir, options)?;
    let tree = scan.tag_tree();
    debug!("Tag tree has {} headings and {} links", tree.heading_count(), tree.link_count());
    Ok(render_toc(&tree, &options.render))
}

/// What an update did to the home document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// The marked region of an existing document was replaced
    Replaced,
    /// The document had no TOC; one was put in front of it
    Prepended,
    /// The document did not exist and was created
    Created,
}

impl fmt::Display for UpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replaced => write!(f, "Updated TOC in"),
            Self::Prepended => write!(f, "Added TOC to"),
            Self::Created => write!(f, "Created"),
        }
    }
}

/// Result of [`plan_home_update`] and [`update_home_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Path of the home document
    pub path: PathBuf,
    /// How the TOC was placed
    pub action: UpdateAction,
    /// `false` if the document already had exactly this content
    pub changed: bool,
    /// The full new document
    pub content: String,
}

/// Compute the new home document without touching the disk.
///
/// # Errors
///
/// Everything [`generate_toc`] can fail with, plus a home document that
/// exists but is not readable UTF-8.
pub fn plan_home_update(dir: &Path, options: &TocOptions) -> Result<UpdateOutcome> {
    let toc = generate_toc(dir, options)?;
    let path = dir.join(&options.home);
    let existing = read_text_if_exists(&path)
        .with_context(|| format!("Failed to read home document {}", path.display()))?;

    let (content, action, changed) = match existing {
        None => (toc, UpdateAction::Created, true),
        Some(old) => {
            let (content, position) = splice_toc(&old, &toc);
            let action = match position {
                SplicePosition::Replaced => UpdateAction::Replaced,
                SplicePosition::Prepended => UpdateAction::Prepended,
            };
            let changed = content != old;
            (content, action, changed)
        }
    };

    Ok(UpdateOutcome {
        path,
        action,
        changed,
        content,
    })
}

/// Regenerate the TOC and write it into the home document.
///
/// The document is replaced atomically and only when its content changes.
/// With `options.backup` the previous content is kept as `<home>.old`.
///
/// # Errors
///
/// Everything [`plan_home_update`] can fail with, plus write failures. A
/// failed write leaves the previous document in place.
pub fn update_home_page(dir: &Path, options: &TocOptions) -> Result<UpdateOutcome> {
    let outcome = plan_home_update(dir, options)?;

    if !outcome.changed {
        info!("{} is up to date", outcome.path.display());
        return Ok(outcome);
    }

    if options.backup && outcome.action != UpdateAction::Created {
        let backup = sibling_with_suffix(&outcome.path, BACKUP_SUFFIX);
        let previous = read_text_if_exists(&outcome.path)?.unwrap_or_default();
        atomic_write(&backup, previous.as_bytes())
            .with_context(|| format!("Failed to write backup {}", backup.display()))?;
        debug!("Backed up previous home document to {}", backup.display());
    }

    atomic_write(&outcome.path, outcome.content.as_bytes())
        .with_context(|| format!("Failed to write home document {}", outcome.path.display()))?;
    info!("{} {}", outcome.action, outcome.path.display());

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::LinkStyle;
    use crate::test_utils::init_test_logging;
    use std::fs;
    use tempfile::tempdir;

    fn wiki() -> tempfile::TempDir {
        init_test_logging(None);
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("Intro.md"), "# Intro\n").unwrap();
        fs::write(temp.path().join("Setup-Guide.md"), "Tags: Guide-Install\n").unwrap();
        fs::write(temp.path().join("FAQ.md"), "Tags: Guide-Install FAQ_Topics\n").unwrap();
        temp
    }

    const EXPECTED_TOC: &str = "\
<!--start TOC-->

# Table of Contents

[Intro](Intro.md)

## FAQ Topics

[FAQ](FAQ.md)

## Guide

### Install

[FAQ](FAQ.md)

[Setup Guide](Setup-Guide.md)

<!--end TOC-->
";

    #[test]
    fn test_generate_toc() {
        let temp = wiki();
        let toc = generate_toc(temp.path(), &TocOptions::default()).unwrap();
        assert_eq!(toc, EXPECTED_TOC);
    }

    #[test]
    fn test_home_page_is_never_listed() {
        let temp = wiki();
        fs::write(temp.path().join("Home.md"), "Tags: Should-Not-Appear\n").unwrap();
        let toc = generate_toc(temp.path(), &TocOptions::default()).unwrap();
        assert!(!toc.contains("Home"));
        assert!(!toc.contains("Should"));
    }

    #[test]
    fn test_update_creates_missing_home() {
        let temp = wiki();
        let outcome = update_home_page(temp.path(), &TocOptions::default()).unwrap();
        assert_eq!(outcome.action, UpdateAction::Created);
        assert!(outcome.changed);
        assert_eq!(fs::read_to_string(temp.path().join("Home.md")).unwrap(), EXPECTED_TOC);
    }

    #[test]
    fn test_update_replaces_region() {
        let temp = wiki();
        let home = temp.path().join("Home.md");
        fs::write(&home, "Welcome\n<!--start TOC-->\nstale\n<!--end TOC-->\nBye\n").unwrap();

        let outcome = update_home_page(temp.path(), &TocOptions::default()).unwrap();
        assert_eq!(outcome.action, UpdateAction::Replaced);
        assert_eq!(fs::read_to_string(&home).unwrap(), format!("Welcome\n{EXPECTED_TOC}Bye\n"));
        assert!(!temp.path().join("Home.md.tmp").exists());
    }

    #[test]
    fn test_update_prepends_without_markers() {
        let temp = wiki();
        let home = temp.path().join("Home.md");
        fs::write(&home, "Welcome\n").unwrap();

        let outcome = update_home_page(temp.path(), &TocOptions::default()).unwrap();
        assert_eq!(outcome.action, UpdateAction::Prepended);
        assert_eq!(fs::read_to_string(&home).unwrap(), format!("{EXPECTED_TOC}Welcome\n"));
    }

    #[test]
    fn test_second_update_is_unchanged() {
        let temp = wiki();
        update_home_page(temp.path(), &TocOptions::default()).unwrap();
        let outcome = update_home_page(temp.path(), &TocOptions::default()).unwrap();
        assert_eq!(outcome.action, UpdateAction::Replaced);
        assert!(!outcome.changed);
    }

    #[test]
    fn test_backup_keeps_previous_content() {
        let temp = wiki();
        let home = temp.path().join("Home.md");
        fs::write(&home, "Old text\n").unwrap();

        let options = TocOptions {
            backup: true,
            ..TocOptions::default()
        };
        update_home_page(temp.path(), &options).unwrap();
        assert_eq!(fs::read_to_string(temp.path().join("Home.md.old")).unwrap(), "Old text\n");

        // the backup is not picked up as a page on the next run
        let toc = generate_toc(temp.path(), &options).unwrap();
        assert!(!toc.contains("Home"));
    }

    #[test]
    fn test_plan_does_not_write() {
        let temp = wiki();
        let outcome = plan_home_update(temp.path(), &TocOptions::default()).unwrap();
        assert_eq!(outcome.content, EXPECTED_TOC);
        assert!(!temp.path().join("Home.md").exists());
    }

    #[test]
    fn test_custom_home_and_style() {
        let temp = wiki();
        let options = TocOptions {
            home: "Index.md".to_string(),
            render: RenderOptions {
                start_level: 3,
                link_style: LinkStyle::Github,
            },
            ..TocOptions::default()
        };
        update_home_page(temp.path(), &options).unwrap();

        let content = fs::read_to_string(temp.path().join("Index.md")).unwrap();
        assert!(content.contains("### Guide\n\n#### Install\n"));
        assert!(content.contains("[Setup Guide](wiki/Setup-Guide)"));
        assert!(!temp.path().join("Home.md").exists());
    }

    #[test]
    fn test_non_utf8_home_is_an_error() {
        let temp = wiki();
        let home = temp.path().join("Home.md");
        fs::write(&home, b"\xff\xfe\n").unwrap();

        assert!(update_home_page(temp.path(), &TocOptions::default()).is_err());
        assert_eq!(fs::read(&home).unwrap(), b"\xff\xfe\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_page_aborts_before_writing() {
        use std::os::unix::fs::PermissionsExt;

        let temp = wiki();
        let home = temp.path().join("Home.md");
        fs::write(&home, "Welcome\n<!--start TOC-->\nold\n<!--end TOC-->\n").unwrap();
        let locked = temp.path().join("Locked.md");
        fs::write(&locked, "Tags: Secret\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores file modes
        if fs::read(&locked).is_ok() {
            return;
        }

        let result = update_home_page(temp.path(), &TocOptions::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<WikiTocError>(),
            Some(WikiTocError::PermissionDenied { .. })
        ));
        assert_eq!(
            fs::read_to_string(&home).unwrap(),
            "Welcome\n<!--start TOC-->\nold\n<!--end TOC-->\n"
        );
        assert!(!temp.path().join("Home.md.tmp").exists());
    }

    #[test]
    fn test_validate_rejects_path_home() {
        for home in ["", "docs/Home.md", "..", "a\\b.md"] {
            let options = TocOptions {
                home: home.to_string(),
                ..TocOptions::default()
            };
            assert!(matches!(options.validate(), Err(WikiTocError::InvalidConfig { .. })), "{home}");
        }
    }

    #[test]
    fn test_from_config() {
        let config = TocConfig {
            home: Some("Index.md".to_string()),
            start_level: Some(4),
            exclude: vec!["^Draft".to_string()],
            ..TocConfig::default()
        };
        let options = TocOptions::from_config(&config);
        assert_eq!(options.home, "Index.md");
        assert_eq!(options.render.start_level, 4);
        assert_eq!(options.render.link_style, LinkStyle::Markdown);
        assert_eq!(options.exclude, ["^Draft"]);
        assert!(!options.backup);
    }
}
