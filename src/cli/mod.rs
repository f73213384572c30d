//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::infra::DataFormat;
use output::OutputFormat;

/// cms-export - export CMS content as Hugo config, data and markdown files
#[derive(Parser, Debug)]
#[command(name = "cms-export", version, about, long_about = None)]
pub struct Cli {
    /// Project root of the static site (default: current directory)
    #[arg(short = 'r', long, global = true)]
    pub root: Option<PathBuf>,

    /// Content snapshot to export (.json, .yml or .yaml)
    #[arg(short = 's', long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Configuration file (default: <root>/cms-export.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale to export (default: the site's first locale)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export the snapshot into the project
    Export(ExportArgs),

    /// Check the snapshot for problems (duplicate slugs, missing fields)
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Show what would be written without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Frontmatter format for content documents (yaml, toml, json)
    #[arg(long)]
    pub frontmatter: Option<DataFormat>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
