//! Check command handler.

use anyhow::{Result, bail};

use super::Project;
use crate::cli::CheckArgs;
use crate::cli::output::{CheckReport, IssueListing, Output, OutputFormat};
use crate::domain::{Severity, validate_snapshot};
use crate::infra::{ContentSource, SnapshotFile};

pub fn handle_check(args: &CheckArgs, project: &Project) -> Result<()> {
    let snapshot = SnapshotFile::new(&project.snapshot).load()?;
    let summary = validate_snapshot(&snapshot);

    match args.format {
        OutputFormat::Json => {
            let report = CheckReport {
                errors: summary.error_count(),
                warnings: summary.warning_count(),
                issues: summary.issues_by_severity().map(IssueListing::from).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(report))?);
        }
        OutputFormat::Paths => {
            for issue in summary.issues_by_severity() {
                println!("{}", issue.location);
            }
        }
        OutputFormat::Human => {
            if summary.is_ok() {
                println!("Snapshot OK.");
                return Ok(());
            }

            for issue in summary.issues_by_severity() {
                let prefix = match issue.severity() {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                };
                println!("{}: {}", prefix, issue);
            }
            println!(
                "\nFound {} issue(s): {} error(s), {} warning(s)",
                summary.issues.len(),
                summary.error_count(),
                summary.warning_count()
            );
        }
    }

    if summary.has_errors() {
        bail!("check failed");
    }
    Ok(())
}
