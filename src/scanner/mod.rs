//! Wiki directory scanning.
//!
//! The scanner lists the candidate pages of a wiki directory, reads each one
//! looking for its tag declaration and builds the [`TagNode`] tree the
//! renderer consumes.
//!
//! # Scanning rules
//!
//! - Only regular files directly inside the directory are considered; the
//!   [`FileFilter`] removes dotfiles, the sidebar, the footer and the home
//!   document.
//! - File contents are decoded as UTF-8 with invalid sequences replaced, so a
//!   page with stray bytes never aborts the run.
//! - The first line starting with `Tags: ` that yields at least one tag path
//!   wins; the rest of the file is not read.
//! - A page without a declaration is attached at the root.
//!
//! # Example
//!
//! ```rust,no_run
//! use wikitoc::scanner::{FileFilter, scan_directory};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let filter = FileFilter::new("Home.md", &[])?;
//! let scan = scan_directory(Path::new("wiki"), &filter)?;
//! println!("{} pages, {} tagged", scan.pages.len(), scan.tagged_count());
//! # Ok(())
//! # }
//! ```

mod filter;

pub use filter::FileFilter;

use crate::core::{FileOperation, FileResultExt, WikiTocError};
use crate::tags::{TagNode, TagPath, parse_tag_line};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// One scanned wiki page and the tag paths it declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPage {
    /// File name relative to the wiki directory
    pub name: String,
    /// Declared tag paths; empty for a page without a declaration
    pub tags: Vec<TagPath>,
}

/// Result of scanning a wiki directory.
#[derive(Debug, Clone, Default)]
pub struct WikiScan {
    /// Every candidate page, sorted by name
    pub pages: Vec<ScannedPage>,
}

impl WikiScan {
    /// Number of pages with at least one tag path.
    #[must_use]
    pub fn tagged_count(&self) -> usize {
        self.pages.iter().filter(|page| !page.tags.is_empty()).count()
    }

    /// Number of pages attached at the root.
    #[must_use]
    pub fn untagged_count(&self) -> usize {
        self.pages.len() - self.tagged_count()
    }

    /// Build the tag tree from the scanned pages.
    #[must_use]
    pub fn tag_tree(&self) -> TagNode {
        build_tag_tree(&self.pages)
    }
}

/// Build the tag tree from scanned pages.
///
/// A page with tags is attached under every one of its paths and not at the
/// root; a page without tags is attached at the root only.
#[must_use]
pub fn build_tag_tree<'a, I>(pages: I) -> TagNode
where
    I: IntoIterator<Item = &'a ScannedPage>,
{
    let mut root = TagNode::new();

    for page in pages {
        if page.tags.is_empty() {
            root.insert_file(page.name.as_str());
            continue;
        }

        for tag in &page.tags {
            root.attach(tag, &page.name);
        }
    }

    root
}

/// List the candidate pages of `dir`, sorted by name.
///
/// # Errors
///
/// [`WikiTocError::WikiDirNotFound`] if `dir` does not exist,
/// [`WikiTocError::NotADirectory`] if it is a file, and a typed file-system
/// error if it cannot be listed.
pub fn list_candidates(dir: &Path, filter: &FileFilter) -> Result<Vec<(String, PathBuf)>> {
    ensure_wiki_dir(dir)?;

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).with_file_context(FileOperation::ReadDir, dir)? {
        let entry = entry.with_file_context(FileOperation::ReadDir, dir)?;
        let path = entry.path();

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Skipping file with a non UTF-8 name: {}", raw.to_string_lossy());
                continue;
            }
        };

        if filter.is_excluded(&name) {
            trace!("Excluded {name}");
            continue;
        }

        // Follows symlinks, so a link to a page counts as a page
        if !path.is_file() {
            trace!("Skipping non-file entry {name}");
            continue;
        }

        candidates.push((name, path));
    }

    candidates.sort();
    Ok(candidates)
}

/// Read the tag declaration of a single page.
///
/// Returns the tag paths of the first `Tags: ` line that yields any, or an
/// empty vector when the page declares none.
///
/// # Errors
///
/// Returns an error only if the file cannot be read; malformed UTF-8 is
/// replaced, never rejected.
pub fn scan_file(path: &Path) -> Result<Vec<TagPath>> {
    let bytes = fs::read(path).with_file_context(FileOperation::Read, path)?;
    Ok(find_tag_declaration(&String::from_utf8_lossy(&bytes)))
}

/// Find the first effective tag declaration in `content`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. A `Tags: ` line whose tokens
/// are all empty paths (`Tags: -`) is skipped like a bare `Tags: `.
///
/// ```
/// use wikitoc::scanner::find_tag_declaration;
///
/// let tags = find_tag_declaration("# Title\nTags: \nTags: Guide-Install\nTags: Later");
/// assert_eq!(tags.len(), 1);
/// assert_eq!(tags[0].to_string(), "Guide-Install");
/// ```
#[must_use]
pub fn find_tag_declaration(content: &str) -> Vec<TagPath> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for line in content.split(['\n', '\r']) {
        if let Some(tags) = parse_tag_line(line)
            && !tags.is_empty()
        {
            trace!("Tag declaration: {}", line.trim_end());
            return tags;
        }
    }

    Vec::new()
}

/// Scan every candidate page of `dir`.
///
/// # Errors
///
/// Fails if the directory cannot be listed or any candidate cannot be read.
/// Nothing is written, so a failed scan leaves the wiki untouched.
pub fn scan_directory(dir: &Path, filter: &FileFilter) -> Result<WikiScan> {
    let candidates = list_candidates(dir, filter)?;
    let mut pages = Vec::with_capacity(candidates.len());

    for (name, path) in candidates {
        let tags = scan_file(&path)?;
        if tags.is_empty() {
            debug!("{name}: untagged");
        } else {
            debug!(
                "{name}: {}",
                tags.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
            );
        }
        pages.push(ScannedPage {
            name,
            tags,
        });
    }

    let scan = WikiScan {
        pages,
    };
    info!(
        "Scanned {} pages in {} ({} tagged, {} untagged)",
        scan.pages.len(),
        dir.display(),
        scan.tagged_count(),
        scan.untagged_count()
    );

    Ok(scan)
}

fn ensure_wiki_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(WikiTocError::NotADirectory {
            path: dir.display().to_string(),
        }
        .into()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(WikiTocError::WikiDirNotFound {
            path: dir.display().to_string(),
        }
        .into()),
        Err(e) => Err(e).with_file_context(FileOperation::Metadata, dir),
    }
}
