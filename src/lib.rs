//! cms-export - export CMS content as Hugo config, data files and markdown

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{Project, handle_check, handle_completions, handle_export},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let config = Config::load(cli.config.as_deref(), &root)?;
    let project = Project::new(root, cli.snapshot.as_ref(), cli.locale.as_ref(), config);
    log::debug!(
        "root {}, snapshot {}",
        project.root.display(),
        project.snapshot.display()
    );

    match &cli.command {
        Command::Export(args) => handle_export(args, &project),
        Command::Check(args) => handle_check(args, &project),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Maps the `-v` count to a default filter; `RUST_LOG` still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
