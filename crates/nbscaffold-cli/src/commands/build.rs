use crate::catalog;
use crate::cli::BuildArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use nbscaffold::core::io::fs::Outcome;
use nbscaffold::engine::plan::ScaffoldPlan;
use nbscaffold::engine::progress::ProgressReporter;
use nbscaffold::engine::report::{EntityKind, ScaffoldReport};
use nbscaffold::workflows;
use tracing::{info, warn};

pub fn run(args: BuildArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = config::build_config(&args)?;
    let root = &app.core_config.root;
    if app.used_fallback_root {
        println!(
            "Warning: configured root is unavailable, using {} instead.",
            root.display()
        );
    }

    info!("Resolving {} table(s) of contents...", app.volumes.len());
    let volumes = catalog::resolve_all(&app.volumes)?;
    let plan = workflows::scaffold::plan(&volumes, &app.core_config)?;

    if args.dry_run {
        print!("{}", render_plan(&plan));
        return Ok(());
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Scaffolding into {}...", root.display());
    info!("Invoking the core scaffold workflow...");
    let report = workflows::scaffold::run(&volumes, &app.core_config, &reporter)?;

    if report.is_noop() {
        warn!("Nothing to create; the tree is already complete.");
    }
    println!("{}", summary_line(&report));
    Ok(())
}

fn render_plan(plan: &ScaffoldPlan<'_>) -> String {
    let mut out = String::new();
    for (kind, path) in plan.entities() {
        let status = if path.exists() { "exists" } else { "new" };
        out.push_str(&format!("  [{:<6}] {:<9} {}\n", status, kind, path.display()));
    }
    out.push_str(&format!(
        "Plan: {} directories, {} documents under {}. Nothing was written.\n",
        plan.directory_count(),
        plan.document_count(),
        plan.root.display()
    ));
    out
}

fn summary_line(report: &ScaffoldReport) -> String {
    let created = report.created().count();
    let skipped = report.skipped().count();
    format!(
        "Summary: {} created ({} directories, {} documents, {} markers), {} already present.",
        created,
        report.count(EntityKind::Directory, Outcome::Created),
        report.count(EntityKind::Document, Outcome::Created),
        report.count(EntityKind::Marker, Outcome::Created),
        skipped
    )
}
