//! Core types for wikitoc
//!
//! Error handling shared by every other module:
//! - [`WikiTocError`] - enumerated failure modes
//! - [`ErrorContext`] - user-facing wrapper with details and a suggestion
//! - [`user_friendly_error`] - convert any [`anyhow::Error`] for CLI display
//! - [`FileResultExt`] - attach typed file-operation context to `io::Result`s

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, WikiTocError, user_friendly_error};
pub use file_error::{FileOperation, FileResultExt};
