//! Integration test suite for wikitoc
//!
//! Drives the `wikitoc` binary against temporary wiki directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **update**: rewriting the home document
//! - **print**: stdout output in Markdown and JSON
//! - **config**: `.wikitoc.toml` and `--config`
//! - **errors**: exit codes and error reports

mod config;
mod errors;
mod print;
mod update;

use assert_cmd::Command;
use wikitoc::test_utils::init_test_logging;

/// A `wikitoc` command with `RUST_LOG` cleared so log output is predictable.
pub fn wikitoc() -> Command {
    init_test_logging(None);
    let mut cmd = Command::cargo_bin("wikitoc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
