//! Command handlers for the CLI.

mod check;
mod completions;
mod export;

use std::path::PathBuf;

use crate::cli::config::Config;

pub use check::handle_check;
pub use completions::handle_completions;
pub use export::handle_export;

/// Everything a handler needs to know about the site being exported.
#[derive(Debug)]
pub struct Project {
    /// Root of the static site
    pub root: PathBuf,
    /// Snapshot file to read
    pub snapshot: PathBuf,
    /// Locale requested on the command line or in the config
    pub locale: Option<String>,
    /// Loaded configuration
    pub config: Config,
}

impl Project {
    /// Resolves paths and locale from CLI arguments and the loaded config.
    pub fn new(
        root: PathBuf,
        cli_snapshot: Option<&PathBuf>,
        cli_locale: Option<&String>,
        config: Config,
    ) -> Self {
        let snapshot = config.snapshot_path(cli_snapshot, &root);
        let locale = config.locale(cli_locale);
        Self {
            root,
            snapshot,
            locale,
            config,
        }
    }
}
