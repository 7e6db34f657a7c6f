//! Structured file system error handling
//!
//! Captures which operation failed on which path at the call site, so the CLI
//! can report a typed [`WikiTocError`] instead of parsing `io::Error` messages.

use crate::core::WikiTocError;
use std::path::Path;

/// Types of file operations performed by the scanner and the home updater
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Listing the wiki directory
    ReadDir,
    /// Reading a file completely
    Read,
    /// Writing a file
    Write,
    /// Replacing a file by renaming a temp file over it
    Rename,
    /// Getting file metadata
    Metadata,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::ReadDir => write!(f, "listing"),
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::Rename => write!(f, "replacing"),
            FileOperation::Metadata => write!(f, "getting metadata of"),
        }
    }
}

/// Convert an IO error into the matching typed error for `operation` on `path`.
pub fn classify_io_error(
    error: &std::io::Error,
    operation: FileOperation,
    path: &Path,
) -> WikiTocError {
    let path_str = path.display().to_string();
    let operation_desc = format!("{operation} {path_str}");

    match (error.kind(), operation) {
        (std::io::ErrorKind::NotFound, FileOperation::ReadDir) => WikiTocError::WikiDirNotFound {
            path: path_str,
        },
        (std::io::ErrorKind::PermissionDenied, _) => WikiTocError::PermissionDenied {
            operation: operation_desc,
            path: path_str,
        },
        _ => WikiTocError::FileSystemError {
            operation: operation_desc,
            path: path_str,
        },
    }
}

/// Extension trait for `io::Result` to add file operation context
pub trait FileResultExt<T> {
    /// Attach a typed [`WikiTocError`] describing `operation` on `path`.
    ///
    /// The original `io::Error` stays in the chain as the cause.
    fn with_file_context(self, operation: FileOperation, path: &Path) -> anyhow::Result<T>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(self, operation: FileOperation, path: &Path) -> anyhow::Result<T> {
        self.map_err(|error| {
            let typed = classify_io_error(&error, operation, path);
            anyhow::Error::new(error).context(typed)
        })
    }
}
