use crate::core::io::fs::{self, Outcome};
use crate::core::io::ipynb::IpynbFile;
use crate::core::io::traits::DocumentFile;
use crate::core::models::toc::Volume;
use crate::core::templates;
use crate::engine::config::ScaffoldConfig;
use crate::engine::error::ScaffoldError;
use crate::engine::plan::{PlannedDocument, ScaffoldPlan};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::report::{EntityKind, EntityRecord, ScaffoldReport};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Derives and validates every path for `volumes` without touching the filesystem.
pub fn plan<'a>(
    volumes: &'a [Volume],
    config: &ScaffoldConfig,
) -> Result<ScaffoldPlan<'a>, ScaffoldError> {
    ScaffoldPlan::build(volumes, config)
}

/// Scaffolds `volumes` under `config.root`.
///
/// Volumes, chapters, and sections are visited in declaration order. Directories are
/// created as needed; documents are written only where nothing exists yet, so a
/// repeated run leaves the tree unchanged and never alters hand-edited files.
///
/// The first filesystem failure aborts the run. Whatever was created before it stays
/// in place, and a re-run resumes from there.
#[instrument(skip_all, name = "scaffold_workflow")]
pub fn run(
    volumes: &[Volume],
    config: &ScaffoldConfig,
    reporter: &ProgressReporter,
) -> Result<ScaffoldReport, ScaffoldError> {
    let plan = plan(volumes, config)?;
    info!(
        "Scaffolding {} volume(s) into {:?}.",
        plan.volumes.len(),
        plan.root
    );

    let mut report = ScaffoldReport::new();
    let mut record = |kind: EntityKind, path: &Path, outcome: Outcome| {
        match outcome {
            Outcome::Created => info!("Created {} {:?}", kind, path),
            Outcome::Skipped => debug!("Exists, skipping {} {:?}", kind, path),
        }
        let entry = EntityRecord {
            kind,
            path: path.to_path_buf(),
            outcome,
        };
        reporter.report(Progress::Entity(entry.clone()));
        report.push(entry);
    };

    if fs::ensure_dir(&plan.root)? == Outcome::Created {
        reporter.report(Progress::Message(format!(
            "Created root directory {}",
            plan.root.display()
        )));
    }

    for volume in &plan.volumes {
        reporter.report(Progress::PhaseStart {
            name: format!("Volume {}: {}", volume.volume.number, volume.volume.topic),
        });

        record(EntityKind::Directory, &volume.dir, fs::ensure_dir(&volume.dir)?);
        record(
            EntityKind::Directory,
            &volume.chapters_dir,
            fs::ensure_dir(&volume.chapters_dir)?,
        );

        if let Some(templates_dir) = &volume.templates_dir {
            record(EntityKind::Directory, templates_dir, fs::ensure_dir(templates_dir)?);
            for document in &volume.templates {
                record(EntityKind::Document, &document.path, write_document(document)?);
            }
        }

        reporter.report(Progress::TaskStart {
            total_steps: volume.chapters.len() as u64,
        });
        for chapter in &volume.chapters {
            record(EntityKind::Directory, &chapter.dir, fs::ensure_dir(&chapter.dir)?);
            for document in &chapter.documents {
                record(EntityKind::Document, &document.path, write_document(document)?);
            }
            if let Some(marker) = &chapter.marker {
                record(EntityKind::Marker, marker, fs::touch_if_absent(marker)?);
            }
            reporter.report(Progress::TaskIncrement);
        }
        reporter.report(Progress::TaskFinish);
        reporter.report(Progress::PhaseFinish);
    }

    if let Some(learning_tools) = &plan.learning_tools {
        reporter.report(Progress::PhaseStart {
            name: "Learning tools".to_string(),
        });
        record(
            EntityKind::Directory,
            &learning_tools.dir,
            fs::ensure_dir(&learning_tools.dir)?,
        );
        reporter.report(Progress::TaskStart {
            total_steps: learning_tools.tools.len() as u64,
        });
        for tool in &learning_tools.tools {
            record(EntityKind::Directory, &tool.dir, fs::ensure_dir(&tool.dir)?);
            record(
                EntityKind::Document,
                &tool.document.path,
                write_document(&tool.document)?,
            );
            if let Some(marker) = &tool.marker {
                record(EntityKind::Marker, marker, fs::touch_if_absent(marker)?);
            }
            reporter.report(Progress::TaskIncrement);
        }
        reporter.report(Progress::TaskFinish);
        reporter.report(Progress::PhaseFinish);
    }

    info!("Scaffold complete: {} entities visited.", report.records().len());
    Ok(report)
}

fn write_document(document: &PlannedDocument<'_>) -> Result<Outcome, ScaffoldError> {
    fs::create_if_absent(&document.path, || {
        let notebook = templates::assemble(document.role, &document.context);
        IpynbFile::to_bytes(&notebook).map_err(|source| ScaffoldError::Serialization {
            path: document.path.clone(),
            source,
        })
    })
}
