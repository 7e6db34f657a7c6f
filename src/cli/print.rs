//! `wikitoc print`: show the TOC without writing anything.

use super::CliConfig;
use super::common::WikiArgs;
use crate::markdown::render_toc;
use crate::toc::scan_wiki;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

/// Output format of `wikitoc print`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    /// The TOC block as it would be written into the home document
    #[default]
    Markdown,
    /// The tag tree as pretty-printed JSON
    Json,
}

/// Print the TOC to stdout.
#[derive(Args, Debug)]
pub struct PrintCommand {
    #[command(flatten)]
    pub wiki: WikiArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = PrintFormat::Markdown)]
    pub format: PrintFormat,
}

impl PrintCommand {
    /// Scan the wiki and print the result in the chosen format.
    ///
    /// # Errors
    ///
    /// Configuration or scanning failures.
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let options = self.wiki.resolve_options(config.config_path.as_deref())?;
        let tree = scan_wiki(&self.wiki.dir, &options)?.tag_tree();

        match self.format {
            PrintFormat::Markdown => print!("{}", render_toc(&tree, &options.render)),
            PrintFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&tree).context("Failed to serialize tag tree")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
