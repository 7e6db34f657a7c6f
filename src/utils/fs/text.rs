//! Text file reading.

use crate::core::{FileOperation, FileResultExt};
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Read a UTF-8 text file, treating a missing file as absent.
///
/// Returns `Ok(None)` when `path` does not exist.
///
/// # Errors
///
/// Any other read failure, including content that is not valid UTF-8: the
/// caller writes this text back, so it must not be altered by lossy decoding.
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_file_context(FileOperation::Read, path),
    }
}
