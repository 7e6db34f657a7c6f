//! File system utilities
//!
//! - [`atomic_write`] replaces a file through a temp sibling
//!   and a rename, so readers never see a partial write
//! - [`read_text_if_exists`] reads a document that may not exist yet
//!
//! # Examples
//!
//! ```rust,no_run
//! use wikitoc::utils::fs::{atomic_write, read_text_if_exists};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let home = Path::new("wiki/Home.md");
//! let old = read_text_if_exists(home)?.unwrap_or_default();
//! atomic_write(home, format!("{old}\nmore\n").as_bytes())?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod text;

pub use atomic::{atomic_write, sibling_with_suffix};
pub use text::read_text_if_exists;
