//! Test utilities for wikitoc
//!
//! Helpers for building throwaway wiki directories and for turning on logging
//! inside tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use wikitoc::test_utils::WikiFixture;
//!
//! let wiki = WikiFixture::new()
//!     .page("Intro.md", "# Intro\n")
//!     .tagged_page("Setup-Guide.md", "Guide-Install")
//!     .home("Welcome\n");
//!
//! assert!(wiki.path().join("Home.md").exists());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `level` set that level is used,
/// otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// A wiki directory in a temporary location, removed on drop.
///
/// Builder methods panic on I/O errors; this type is for tests only.
pub struct WikiFixture {
    dir: TempDir,
}

impl WikiFixture {
    /// Create an empty wiki directory.
    ///
    /// # Panics
    ///
    /// If the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp wiki dir"),
        }
    }

    /// Path of the wiki directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the wiki.
    #[must_use]
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Add a file with raw `content`.
    ///
    /// # Panics
    ///
    /// If the file cannot be written.
    #[must_use]
    pub fn page(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        fs::write(self.file(name), content).expect("write wiki page");
        self
    }

    /// Add a page declaring `tags` (space separated) on its second line.
    #[must_use]
    pub fn tagged_page(self, name: &str, tags: &str) -> Self {
        let title = name.strip_suffix(".md").unwrap_or(name);
        self.page(name, format!("# {title}\nTags: {tags}\n\nBody\n"))
    }

    /// Write `Home.md`.
    #[must_use]
    pub fn home(self, content: &str) -> Self {
        self.page("Home.md", content)
    }

    /// Write `.wikitoc.toml`.
    #[must_use]
    pub fn config(self, content: &str) -> Self {
        self.page(crate::constants::CONFIG_FILE_NAME, content)
    }

    /// Read a file of the wiki as UTF-8.
    ///
    /// # Panics
    ///
    /// If the file is missing or not UTF-8.
    #[must_use]
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("read wiki file")
    }
}

impl Default for WikiFixture {
    fn default() -> Self {
        Self::new()
    }
}
