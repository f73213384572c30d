//! Export command handler.

use anyhow::Result;

use super::Project;
use crate::cli::ExportArgs;
use crate::cli::output::{ExportReport, FileAction, Output, OutputFormat};
use crate::export::{ExportOptions, LocaleContext, export};
use crate::infra::{DryRunEmitter, FsEmitter, SnapshotFile};

pub fn handle_export(args: &ExportArgs, project: &Project) -> Result<()> {
    let report = run_export(args, project)?;

    match args.format {
        OutputFormat::Human => print_human(&report),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&report))?);
        }
        OutputFormat::Paths => {
            for file in report.files.iter().filter(|f| f.action != "clear") {
                println!("{}", file.path);
            }
        }
    }
    Ok(())
}

pub(crate) fn run_export(args: &ExportArgs, project: &Project) -> Result<ExportReport> {
    let source = SnapshotFile::new(&project.snapshot);
    let locale = LocaleContext::new(project.locale.clone());
    let options = project.config.export_options(args.frontmatter);

    if args.dry_run {
        let mut emitter = DryRunEmitter::new();
        let summary = export(&source, &mut emitter, &locale, &options)?;
        let files = emitter
            .operations()
            .iter()
            .map(|op| FileAction {
                action: op.action().to_string(),
                path: op.path().display().to_string(),
            })
            .collect();
        return Ok(ExportReport {
            dry_run: true,
            summary,
            files,
        });
    }

    let mut emitter = FsEmitter::new(&project.root);
    let summary = export(&source, &mut emitter, &locale, &options)?;
    let files = emitter
        .written()
        .iter()
        .map(|path| FileAction {
            action: action_for(path, &options).to_string(),
            path: path.display().to_string(),
        })
        .collect();
    Ok(ExportReport {
        dry_run: false,
        summary,
        files,
    })
}

fn action_for(path: &std::path::Path, options: &ExportOptions) -> &'static str {
    if options.hugo_configs.iter().any(|c| c == path) {
        "merge"
    } else {
        "write"
    }
}

fn print_human(report: &ExportReport) {
    if report.dry_run {
        println!("Dry run, nothing written:");
        for file in &report.files {
            println!("  {:<6} {}", file.action, file.path);
        }
        println!();
    }

    let summary = &report.summary;
    println!("Locale: {}", summary.locale);
    println!(
        "Data files: {} merged, {} written",
        summary.data_files_merged, summary.data_files_written
    );
    println!("Pages: {}", summary.pages_written);
    for collection in &summary.collections {
        println!(
            "  {} -> {} ({} entries)",
            collection.name, collection.directory, collection.entries
        );
    }

    let verb = if report.dry_run { "Would export" } else { "Exported" };
    println!("{} {} documents", verb, summary.documents_written());
}
