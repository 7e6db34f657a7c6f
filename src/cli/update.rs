//! `wikitoc update`: rewrite the TOC in the home document.

use super::CliConfig;
use super::common::WikiArgs;
use crate::toc::{plan_home_update, update_home_page};
use anyhow::Result;
use clap::Args;
use colored::Colorize;

/// Regenerate the TOC inside the home document.
#[derive(Args, Debug)]
pub struct UpdateCommand {
    #[command(flatten)]
    pub wiki: WikiArgs,

    /// Keep the previous home document as `<home>.old`
    #[arg(long)]
    pub backup: bool,

    /// Print the updated home document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl UpdateCommand {
    /// Resolve options, then update (or preview) the home document.
    ///
    /// # Errors
    ///
    /// Configuration, scanning or write failures.
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut options = self.wiki.resolve_options(config.config_path.as_deref())?;
        options.backup |= self.backup;

        if self.dry_run {
            let outcome = plan_home_update(&self.wiki.dir, &options)?;
            print!("{}", outcome.content);
            return Ok(());
        }

        let outcome = update_home_page(&self.wiki.dir, &options)?;
        if !config.quiet {
            if outcome.changed {
                println!("{} {} {}", "✓".green(), outcome.action, outcome.path.display());
            } else {
                println!("{} {} is up to date", "✓".green(), outcome.path.display());
            }
        }

        Ok(())
    }
}
