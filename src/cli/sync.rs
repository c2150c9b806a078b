use std::path::PathBuf;

use clap::Args;

use crate::index::{self, merge::RemovalReason, ExtractOptions, ReconcileReport, SyncOptions};
use crate::output::{self, human, CommandOutput, OutputFormat};

use super::Project;

#[derive(Args)]
pub struct SyncArgs {
    /// Directory containing the rendered recipe pages
    #[arg(long)]
    pub recipes_dir: Option<PathBuf>,

    /// Path to the JSON recipe index
    #[arg(long, alias = "json-file")]
    pub index_file: Option<PathBuf>,

    /// Report what would change without writing the index
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(
    args: &SyncArgs,
    config: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut project = Project::load(config)?;
    project.override_paths(args.recipes_dir.as_deref(), args.index_file.as_deref());

    let extract = ExtractOptions::for_site(&project.config.site.name);
    let opts = SyncOptions {
        dry_run: args.dry_run,
    };
    let outcome = index::sync_index(&project.paths, &extract, &opts)?;
    let report = outcome.report;

    if let OutputFormat::Json = format {
        output::print_output(&report, format);
        return Ok(());
    }

    if verbose {
        for line in detail_lines(&report) {
            println!("{line}");
        }
        println!();
    }
    println!("{}", report.human_display());

    if args.dry_run {
        human::info("Dry run completed. No files were modified.");
    } else {
        human::success(&format!("Updated {}", project.paths.index.display()));
    }
    if report.total_live == 0 {
        human::warning(
            r#"No live recipes found. Mark pages as live with <meta name="recipe-status" content="live">"#,
        );
    }
    Ok(())
}

/// Per-recipe lines printed under `--verbose`.
fn detail_lines(report: &ReconcileReport) -> Vec<String> {
    let mut lines = Vec::new();
    for id in &report.new {
        lines.push(format!("New recipe found: {id}"));
    }
    for updated in &report.updated {
        lines.push(format!("Updated recipe: {}", updated.id));
        for change in &updated.changes {
            lines.push(format!("  - {}: {} -> {}", change.field, change.old, change.new));
        }
    }
    for id in &report.unchanged {
        lines.push(format!("Unchanged recipe: {id}"));
    }
    for id in &report.skipped {
        lines.push(format!("Skipping non-live recipe: {id}"));
    }
    for removal in &report.removed {
        let why = match removal.reason {
            RemovalReason::FileMissing => "file not found",
            RemovalReason::NotLive => "marked as dead or has no status",
        };
        lines.push(format!("Recipe in index but {why}: {}", removal.id));
    }
    lines
}
