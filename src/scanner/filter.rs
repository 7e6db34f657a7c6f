//! Decide which directory entries are wiki pages.

use crate::core::WikiTocError;
use anyhow::Result;
use regex::Regex;

/// Names that are never pages: dotfiles (`.git`, `.DS_Store`, the config
/// file), the sidebar and footer, and anything containing `Home.md`.
///
/// `_Footer.?md` also catches the dotless `_Footermd` some wikis carry.
const BUILTIN_EXCLUSIONS: &str = r"^\.|^_Sidebar\.md$|^_Footer.?md$|Home\.md";

/// Case-sensitive exclusion rule for wiki file names.
///
/// ```
/// use wikitoc::scanner::FileFilter;
///
/// let filter = FileFilter::new("Home.md", &[]).unwrap();
/// assert!(filter.is_excluded(".git"));
/// assert!(filter.is_excluded("_Sidebar.md"));
/// assert!(filter.is_excluded("Old-Home.md.bak"));
/// assert!(!filter.is_excluded("Setup-Guide.md"));
/// ```
#[derive(Debug, Clone)]
pub struct FileFilter {
    builtin: Regex,
    extra: Vec<Regex>,
    home: String,
    home_derived_prefix: String,
}

impl FileFilter {
    /// Build the filter for a wiki whose home document is `home`.
    ///
    /// `extra_patterns` are additional regular expressions searched anywhere
    /// in the file name.
    ///
    /// # Errors
    ///
    /// Returns [`WikiTocError::InvalidExcludePattern`] for a pattern that does
    /// not compile.
    pub fn new(home: &str, extra_patterns: &[String]) -> Result<Self> {
        let builtin = Regex::new(BUILTIN_EXCLUSIONS).map_err(|e| WikiTocError::Other {
            message: format!("built-in exclusion pattern failed to compile: {e}"),
        })?;

        let extra = extra_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| WikiTocError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            builtin,
            extra,
            home: home.to_string(),
            home_derived_prefix: format!("{home}."),
        })
    }

    /// `true` if `name` must not be scanned or listed.
    ///
    /// The home document and its `.tmp`/`.old` siblings are always excluded.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        name == self.home
            || name.starts_with(&self.home_derived_prefix)
            || self.builtin.is_match(name)
            || self.extra.iter().any(|pattern| pattern.is_match(name))
    }
}
