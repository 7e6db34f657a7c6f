//! Atomic file write operations using temp-and-rename strategy.
//!
//! The home document is only ever replaced through [`atomic_write`], so an
//! interrupted run leaves either the old or the new content on disk, never a
//! truncated mix.

use crate::core::{FileOperation, FileResultExt};
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sibling path used while writing `path`: the file name with `suffix`
/// appended (`Home.md` → `Home.md.tmp`).
#[must_use]
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Write the content to `<file>.tmp` next to the target
/// 2. Sync the temporary file to disk
/// 3. Rename it over the target
///
/// The parent directory must already exist. If any step fails the temporary
/// file is removed and the target is left as it was.
///
/// # Errors
///
/// Returns a typed file-system error naming the step and path that failed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = sibling_with_suffix(path, crate::constants::TEMP_SUFFIX);

    let result = write_and_rename(&temp_path, path, content);
    if result.is_err() && temp_path.exists() {
        // Best effort cleanup
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_rename(temp_path: &Path, path: &Path, content: &[u8]) -> Result<()> {
    {
        let mut file =
            fs::File::create(temp_path).with_file_context(FileOperation::Write, temp_path)?;

        file.write_all(content).with_file_context(FileOperation::Write, temp_path)?;

        file.sync_all()
            .with_context(|| format!("Failed to sync {} to disk", temp_path.display()))?;
    }

    fs::rename(temp_path, path).with_file_context(FileOperation::Rename, path)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());

    Ok(())
}
