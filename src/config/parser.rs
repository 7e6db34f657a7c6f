//! Generic configuration parsing utilities.
//!
//! Reads a TOML file into any `DeserializeOwned` type, reporting read failures
//! as typed file-system errors and syntax problems as
//! [`WikiTocError::ConfigParseError`].
//!
//! ```rust,no_run
//! use wikitoc::config::{TocConfig, parse_config};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config: TocConfig = parse_config(Path::new("wiki/.wikitoc.toml"))?;
//! # Ok(())
//! # }
//! ```

use crate::core::{FileOperation, FileResultExt, WikiTocError};
use anyhow::Result;
use std::path::Path;

/// Parse the TOML file at `path` into `T`.
///
/// # Errors
///
/// - a typed file-system error if the file cannot be read
/// - [`WikiTocError::ConfigParseError`] if the content is not valid TOML or
///   does not match `T`
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).with_file_context(FileOperation::Read, path)?;

    let config: T = toml::from_str(&content).map_err(|e| WikiTocError::ConfigParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(config)
}
