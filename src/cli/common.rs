//! Arguments and option resolution shared by the subcommands.

use crate::config::TocConfig;
use crate::markdown::LinkStyle;
use crate::toc::TocOptions;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Wiki location and rendering flags accepted by every command.
#[derive(Args, Debug, Clone)]
pub struct WikiArgs {
    /// Wiki directory to scan
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Home document file name inside the wiki directory [default: Home.md]
    #[arg(long, value_name = "NAME")]
    pub home: Option<String>,

    /// Link syntax for pages [default: markdown]
    #[arg(long, value_enum)]
    pub link_style: Option<LinkStyle>,

    /// Heading level of the first tag level, 1-6 [default: 2]
    #[arg(long, value_name = "N")]
    pub start_level: Option<usize>,
}

impl WikiArgs {
    /// Configuration file values with these flags layered on top.
    ///
    /// # Errors
    ///
    /// The configuration file could not be loaded, or the result is invalid.
    pub fn resolve_options(&self, config_path: Option<&Path>) -> Result<TocOptions> {
        let config = TocConfig::load(&self.dir, config_path)?;
        let mut options = TocOptions::from_config(&config);
        self.apply_overrides(&mut options);
        options.validate()?;
        debug!("Resolved options: {options:?}");
        Ok(options)
    }

    fn apply_overrides(&self, options: &mut TocOptions) {
        if let Some(home) = &self.home {
            options.home.clone_from(home);
        }
        if let Some(style) = self.link_style {
            options.render.link_style = style;
        }
        if let Some(level) = self.start_level {
            options.render.start_level = level;
        }
    }
}
