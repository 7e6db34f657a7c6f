//! Utilities shared by the TOC pipeline
//!
//! - [`fs`] - atomic writes and optional text reads

pub mod fs;

pub use fs::{atomic_write, read_text_if_exists};
