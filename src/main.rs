//! wikitoc CLI entry point
//!
//! Parses the command line, runs the command and turns any failure into a
//! colored error report with exit code 1.

use clap::Parser;
use wikitoc::cli;
use wikitoc::core::error::user_friendly_error;

fn main() {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
