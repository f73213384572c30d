//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::ValidationIssue;
use crate::export::ExportSummary;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A file touched (or that would be touched) by an export.
#[derive(Debug, Serialize)]
pub struct FileAction {
    pub action: String,
    pub path: String,
}

/// Result of the `export` command.
#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub dry_run: bool,
    pub summary: ExportSummary,
    pub files: Vec<FileAction>,
}

/// A validation issue in listing output.
#[derive(Debug, Serialize)]
pub struct IssueListing {
    pub severity: String,
    pub location: String,
    pub message: String,
}

impl From<&ValidationIssue> for IssueListing {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            severity: issue.severity().to_string(),
            location: issue.location.clone(),
            message: issue.kind.to_string(),
        }
    }
}

/// Result of the `check` command.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub errors: usize,
    pub warnings: usize,
    pub issues: Vec<IssueListing>,
}
