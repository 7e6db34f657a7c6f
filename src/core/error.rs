//! Error handling for wikitoc
//!
//! This module provides the error types and user-facing error reporting for the
//! TOC generator. Two layers cooperate:
//! 1. **Strongly-typed errors** ([`WikiTocError`]) for the failures callers may
//!    want to match on
//! 2. **User-friendly messages** ([`ErrorContext`]) with details and a suggestion
//!    for CLI users
//!
//! Library functions return [`anyhow::Result`] and attach path-bearing context
//! with `.with_context(...)`. The binary funnels every failure through
//! [`user_friendly_error`] before printing it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use wikitoc::core::{WikiTocError, user_friendly_error};
//!
//! let error = WikiTocError::WikiDirNotFound {
//!     path: "docs/wiki".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display(); // colored error, details and suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for wikitoc operations.
///
/// # Error Categories
///
/// ## Wiki directory
/// - [`WikiDirNotFound`] - the directory to scan does not exist
/// - [`NotADirectory`] - the path exists but is a file
///
/// ## File system
/// - [`PermissionDenied`] - insufficient permissions on a file or directory
/// - [`FileSystemError`] - any other failed file operation
///
/// ## Configuration
/// - [`ConfigParseError`] - `.wikitoc.toml` is not valid TOML for [`TocConfig`]
/// - [`InvalidConfig`] - a config value is out of range or unknown
/// - [`InvalidExcludePattern`] - an `exclude` entry is not a valid regex
/// - [`InvalidStartLevel`] - heading level outside `1..=6`
///
/// [`WikiDirNotFound`]: WikiTocError::WikiDirNotFound
/// [`NotADirectory`]: WikiTocError::NotADirectory
/// [`PermissionDenied`]: WikiTocError::PermissionDenied
/// [`FileSystemError`]: WikiTocError::FileSystemError
/// [`ConfigParseError`]: WikiTocError::ConfigParseError
/// [`InvalidConfig`]: WikiTocError::InvalidConfig
/// [`InvalidExcludePattern`]: WikiTocError::InvalidExcludePattern
/// [`InvalidStartLevel`]: WikiTocError::InvalidStartLevel
/// [`TocConfig`]: crate::config::TocConfig
#[derive(Error, Debug, Clone)]
pub enum WikiTocError {
    /// The wiki directory does not exist.
    #[error("Wiki directory not found: {path}")]
    WikiDirNotFound {
        /// The directory that was requested
        path: String,
    },

    /// The wiki path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// The offending path
        path: String,
    },

    /// Permission denied while accessing a file or directory.
    #[error("Permission denied: {operation}")]
    PermissionDenied {
        /// What was being attempted (e.g. "reading wiki directory")
        operation: String,
        /// The path involved
        path: String,
    },

    /// A file system operation failed for a reason other than permissions.
    #[error("File system error: {operation}")]
    FileSystemError {
        /// What was being attempted
        operation: String,
        /// The path involved
        path: String,
    },

    /// The configuration file could not be parsed.
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Path of the configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// A configuration value is not acceptable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the value
        reason: String,
    },

    /// An `exclude` entry is not a valid regular expression.
    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    InvalidExcludePattern {
        /// The pattern as written in the configuration
        pattern: String,
        /// Regex compiler message
        reason: String,
    },

    /// Heading level outside the range Markdown supports.
    #[error("Invalid start level {level}: must be between 1 and 6")]
    InvalidStartLevel {
        /// The rejected level
        level: usize,
    },

    /// Catch-all for messages that have no dedicated variant.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Error wrapper that adds user-facing details and a suggestion.
///
/// ```rust,no_run
/// use wikitoc::core::{ErrorContext, WikiTocError};
///
/// let context = ErrorContext::new(WikiTocError::InvalidStartLevel { level: 9 })
///     .with_suggestion("Pass --start-level with a value from 1 to 6")
///     .with_details("Markdown only defines six heading levels");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: WikiTocError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no suggestion or details.
    #[must_use]
    pub const fn new(error: WikiTocError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error, shown in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion.
///
/// Typed [`WikiTocError`]s anywhere in the chain get tailored advice, bare
/// [`std::io::Error`]s get advice keyed on their kind, and everything else
/// keeps its full cause chain in the message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // Finds typed errors attached with `.context(...)` as well as the root
    if let Some(toc_error) = error.downcast_ref::<WikiTocError>() {
        return create_error_context(toc_error.clone(), &error);
    }

    for cause in error.chain() {
        if let Some(toc_error) = cause.downcast_ref::<WikiTocError>() {
            return create_error_context(toc_error.clone(), &error);
        }
    }

    let io_cause = error
        .downcast_ref::<std::io::Error>()
        .or_else(|| error.chain().find_map(|cause| cause.downcast_ref::<std::io::Error>()));
    if let Some(io_error) = io_cause {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(WikiTocError::PermissionDenied {
                    operation: error.to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion(
                    "Check the ownership and permissions of the wiki directory and its files",
                )
                .with_details(io_error.to_string());
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(WikiTocError::FileSystemError {
                    operation: error.to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(io_error.to_string());
            }
            _ => {}
        }
    }

    ErrorContext::new(WikiTocError::Other {
        message: message_with_chain(&error),
    })
}

fn message_with_chain(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: WikiTocError, full: &anyhow::Error) -> ErrorContext {
    match &error {
        WikiTocError::WikiDirNotFound {
            path,
        } => {
            let suggestion = format!(
                "Check the spelling of '{path}' or run wikitoc from inside the wiki checkout"
            );
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("The directory argument defaults to the current directory")
        }
        WikiTocError::NotADirectory {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the directory that contains the wiki pages, not a single page"),
        WikiTocError::PermissionDenied {
            path,
            ..
        } => {
            let suggestion = format!("Check the permissions of '{path}'");
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details(message_with_chain(full))
        }
        WikiTocError::FileSystemError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the wiki files are readable and the disk is writable")
            .with_details(message_with_chain(full)),
        WikiTocError::ConfigParseError {
            file,
            reason,
        } => {
            let suggestion = format!(
                "Fix the TOML syntax in {file}. Known keys: home, link_style, start_level, backup, exclude"
            );
            let details = reason.clone();
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }
        WikiTocError::InvalidConfig {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the values in .wikitoc.toml and the command-line flags"),
        WikiTocError::InvalidExcludePattern {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Exclude entries are regular expressions; escape literal dots as '\\.'"),
        WikiTocError::InvalidStartLevel {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use a start level from 1 to 6")
            .with_details("Markdown only defines six heading levels"),
        WikiTocError::Other {
            ..
        } => ErrorContext::new(error),
    }
}
