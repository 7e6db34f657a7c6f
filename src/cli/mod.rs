//! Command-line interface for wikitoc.
//!
//! # Commands
//!
//! - `update` - regenerate the TOC inside the home document
//! - `print` - write the TOC (or the tag tree as JSON) to stdout
//!
//! # Global Options
//!
//! - `-v, --verbose` - debug logging
//! - `-q, --quiet` - errors only, no status lines
//! - `-c, --config <PATH>` - configuration file to use instead of
//!   `<DIR>/.wikitoc.toml`
//!
//! `RUST_LOG` takes precedence over both verbosity flags.
//!
//! # Examples
//!
//! ```bash
//! wikitoc update                       # current directory, Home.md
//! wikitoc update wiki --backup         # keep Home.md.old
//! wikitoc update --dry-run             # show the new Home.md
//! wikitoc print wiki --link-style github
//! wikitoc print --format json          # inspect the tag tree
//! ```

pub mod common;
mod print;
mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and embedders can run commands with a
/// chosen configuration instead of parsing arguments.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: Option<String>,

    /// Suppress status lines on stdout
    pub quiet: bool,

    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("warn"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Generate a Table of Contents for a Markdown wiki from per-page tags.
#[derive(Parser, Debug)]
#[command(
    name = "wikitoc",
    about = "Generate a tag-based Table of Contents for a Markdown wiki",
    version,
    long_about = "wikitoc scans a wiki directory for 'Tags: ' lines, builds a nested tag tree \
                  and writes it as a Table of Contents between <!--start TOC--> and \
                  <!--end TOC--> in the home document."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file to use instead of `<DIR>/.wikitoc.toml`
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate the TOC inside the home document
    Update(update::UpdateCommand),

    /// Print the TOC to stdout without touching the wiki
    Print(print::PrintCommand),
}

impl Cli {
    /// Run the selected command with the configuration from the global flags.
    ///
    /// # Errors
    ///
    /// Whatever the command fails with.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Build the [`CliConfig`] the global flags describe.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Run the selected command with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Whatever the command fails with.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Update(cmd) => cmd.execute(&config),
            Commands::Print(cmd) => cmd.execute(&config),
        }
    }
}
