//! The fully derived, validated list of everything a scaffold run may create.
//!
//! Building a plan touches no files. All naming happens here, and so does every check
//! that can reject a table of contents, so a rejected run writes nothing.

use super::config::ScaffoldConfig;
use super::error::ScaffoldError;
use super::report::EntityKind;
use crate::core::models::role::DocumentRole;
use crate::core::models::toc::{Chapter, Volume};
use crate::core::templates::DocumentContext;
use crate::core::utils::naming::{
    chapter_dir_name, section_file_name, section_stem, slugify, volume_dir_name,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CHAPTERS_DIR: &str = "chapters";
pub const TEMPLATES_DIR: &str = "templates";
pub const MARKER_FILE: &str = ".gitkeep";
pub const LEARNING_TOOLS_DIR: &str = "learning-tools";
pub const FLASHCARDS_TOOL_DIR: &str = "flashcards";
pub const SPACED_REPETITION_TOOL_DIR: &str = "spaced-repetition";

#[derive(Debug, Clone)]
pub struct PlannedDocument<'a> {
    pub path: PathBuf,
    pub role: DocumentRole,
    pub context: DocumentContext<'a>,
}

#[derive(Debug, Clone)]
pub struct ChapterPlan<'a> {
    pub chapter: &'a Chapter,
    pub dir: PathBuf,
    /// Section notes in section order, then the auxiliary documents, then the optional
    /// examples notebook.
    pub documents: Vec<PlannedDocument<'a>>,
    pub marker: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct VolumePlan<'a> {
    pub volume: &'a Volume,
    pub dir: PathBuf,
    pub chapters_dir: PathBuf,
    pub templates_dir: Option<PathBuf>,
    pub templates: Vec<PlannedDocument<'a>>,
    pub chapters: Vec<ChapterPlan<'a>>,
}

/// One tool directory under `learning-tools/` holding a single notebook.
#[derive(Debug, Clone)]
pub struct ToolPlan<'a> {
    pub dir: PathBuf,
    pub document: PlannedDocument<'a>,
    pub marker: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct LearningToolsPlan<'a> {
    pub dir: PathBuf,
    pub tools: Vec<ToolPlan<'a>>,
}

#[derive(Debug, Clone)]
pub struct ScaffoldPlan<'a> {
    pub root: PathBuf,
    pub volumes: Vec<VolumePlan<'a>>,
    /// Shared across volumes, so it is walked after all of them.
    pub learning_tools: Option<LearningToolsPlan<'a>>,
}

/// Tracks claimed paths case-insensitively, remembering who claimed each one.
#[derive(Default)]
struct PathRegistry {
    claimed: HashMap<String, String>,
}

impl PathRegistry {
    fn claim(&mut self, path: &Path, owner: String) -> Result<(), ScaffoldError> {
        let key = path.to_string_lossy().to_lowercase();
        if let Some(first) = self.claimed.get(&key) {
            return Err(ScaffoldError::PathCollision {
                path: path.to_path_buf(),
                first: first.clone(),
                second: owner,
            });
        }
        self.claimed.insert(key, owner);
        Ok(())
    }
}

fn non_empty(name: String, what: &'static str, title: &str) -> Result<String, ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName {
            what,
            title: title.to_string(),
        });
    }
    Ok(name)
}

impl<'a> ScaffoldPlan<'a> {
    /// Derives every path for `volumes` under `config.root`, in declaration order.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::EmptyName`] if a volume topic, chapter title, or section title
    ///   normalizes to nothing.
    /// - [`ScaffoldError::PathCollision`] if two entities would share a path (compared
    ///   case-insensitively).
    pub fn build(volumes: &'a [Volume], config: &ScaffoldConfig) -> Result<Self, ScaffoldError> {
        let mut registry = PathRegistry::default();
        let mut plans = Vec::with_capacity(volumes.len());

        for volume in volumes {
            plans.push(Self::plan_volume(volume, config, &mut registry)?);
        }
        let learning_tools = if config.layout.learning_tools {
            Some(Self::plan_learning_tools(config, &mut registry)?)
        } else {
            None
        };

        let plan = Self {
            root: config.root.clone(),
            volumes: plans,
            learning_tools,
        };
        debug!(
            "Planned {} directories and {} documents under {:?}",
            plan.directory_count(),
            plan.document_count(),
            plan.root
        );
        Ok(plan)
    }

    fn plan_volume(
        volume: &'a Volume,
        config: &ScaffoldConfig,
        registry: &mut PathRegistry,
    ) -> Result<VolumePlan<'a>, ScaffoldError> {
        let slug_source = volume.slug.as_deref().unwrap_or(&volume.topic);
        let slug = non_empty(slugify(slug_source), "Volume topic", slug_source)?;
        let owner = format!("volume {} '{}'", volume.number, volume.topic);

        let dir = config.root.join(volume_dir_name(volume.number, &slug));
        registry.claim(&dir, owner.clone())?;
        let chapters_dir = dir.join(CHAPTERS_DIR);
        registry.claim(&chapters_dir, format!("chapters of {}", owner))?;

        let (templates_dir, templates) = if config.layout.volume_templates {
            let templates_dir = dir.join(TEMPLATES_DIR);
            registry.claim(&templates_dir, format!("templates of {}", owner))?;
            let mut templates = Vec::new();
            for role in DocumentRole::VOLUME_TEMPLATES {
                let Some(name) = role.fixed_file_name() else {
                    continue;
                };
                let path = templates_dir.join(name);
                registry.claim(&path, format!("{} of {}", role, owner))?;
                templates.push(PlannedDocument {
                    path,
                    role,
                    context: DocumentContext::volume(volume),
                });
            }
            (Some(templates_dir), templates)
        } else {
            (None, Vec::new())
        };

        let mut chapters = Vec::with_capacity(volume.chapters.len());
        for chapter in volume.chapters.chapters() {
            chapters.push(Self::plan_chapter(
                volume,
                chapter,
                &chapters_dir,
                config,
                registry,
            )?);
        }

        Ok(VolumePlan {
            volume,
            dir,
            chapters_dir,
            templates_dir,
            templates,
            chapters,
        })
    }

    fn plan_chapter(
        volume: &'a Volume,
        chapter: &'a Chapter,
        chapters_dir: &Path,
        config: &ScaffoldConfig,
        registry: &mut PathRegistry,
    ) -> Result<ChapterPlan<'a>, ScaffoldError> {
        non_empty(slugify(&chapter.title), "Chapter title", &chapter.title)?;
        let owner = format!(
            "volume {} chapter {} '{}'",
            volume.number, chapter.number, chapter.title
        );
        let dir = chapters_dir.join(chapter_dir_name(chapter.number, &chapter.title));
        registry.claim(&dir, owner.clone())?;

        let mut documents = Vec::with_capacity(chapter.sections.len() + DocumentRole::AUXILIARY.len());
        for (index, title) in chapter.indexed_sections() {
            non_empty(section_stem(title), "Section title", title)?;
            let path = dir.join(section_file_name(chapter.number, index, title));
            registry.claim(
                &path,
                format!("section {}-{} '{}'", chapter.number, index, title),
            )?;
            documents.push(PlannedDocument {
                path,
                role: DocumentRole::SectionNotes,
                context: DocumentContext::section(volume, chapter, index),
            });
        }

        let examples = config
            .layout
            .chapter_examples
            .then_some(DocumentRole::ChapterExamples);
        for role in DocumentRole::AUXILIARY.into_iter().chain(examples) {
            let Some(name) = role.fixed_file_name() else {
                continue;
            };
            let path = dir.join(name);
            registry.claim(&path, format!("{} of {}", role, owner))?;
            documents.push(PlannedDocument {
                path,
                role,
                context: DocumentContext::chapter(volume, chapter),
            });
        }

        let marker = if config.layout.gitkeep {
            let path = dir.join(MARKER_FILE);
            registry.claim(&path, format!("marker of {}", owner))?;
            Some(path)
        } else {
            None
        };

        Ok(ChapterPlan {
            chapter,
            dir,
            documents,
            marker,
        })
    }

    fn plan_learning_tools(
        config: &ScaffoldConfig,
        registry: &mut PathRegistry,
    ) -> Result<LearningToolsPlan<'a>, ScaffoldError> {
        let dir = config.root.join(LEARNING_TOOLS_DIR);
        registry.claim(&dir, "learning tools".to_string())?;

        let mut tools = Vec::with_capacity(2);
        for (subdir, role) in [
            (FLASHCARDS_TOOL_DIR, DocumentRole::FlashcardsTemplate),
            (SPACED_REPETITION_TOOL_DIR, DocumentRole::SpacedRepetition),
        ] {
            let Some(name) = role.fixed_file_name() else {
                continue;
            };
            let owner = format!("learning tool '{}'", subdir);
            let tool_dir = dir.join(subdir);
            registry.claim(&tool_dir, owner.clone())?;
            let path = tool_dir.join(name);
            registry.claim(&path, format!("{} of {}", role, owner))?;
            let marker = if config.layout.gitkeep {
                let marker = tool_dir.join(MARKER_FILE);
                registry.claim(&marker, format!("marker of {}", owner))?;
                Some(marker)
            } else {
                None
            };
            tools.push(ToolPlan {
                dir: tool_dir,
                document: PlannedDocument {
                    path,
                    role,
                    context: DocumentContext::global(),
                },
                marker,
            });
        }

        Ok(LearningToolsPlan { dir, tools })
    }

    pub fn directory_count(&self) -> usize {
        self.entities()
            .filter(|(kind, _)| *kind == EntityKind::Directory)
            .count()
    }

    pub fn document_count(&self) -> usize {
        self.entities()
            .filter(|(kind, _)| *kind == EntityKind::Document)
            .count()
    }

    /// Every planned entity in the order a run visits them.
    pub fn entities(&self) -> impl Iterator<Item = (EntityKind, &Path)> + '_ {
        let volumes = self.volumes.iter().flat_map(|v| {
            let head = [
                (EntityKind::Directory, v.dir.as_path()),
                (EntityKind::Directory, v.chapters_dir.as_path()),
            ];
            let templates = v
                .templates_dir
                .iter()
                .map(|d| (EntityKind::Directory, d.as_path()))
                .chain(v.templates.iter().map(|d| (EntityKind::Document, d.path.as_path())));
            let chapters = v.chapters.iter().flat_map(|c| {
                std::iter::once((EntityKind::Directory, c.dir.as_path()))
                    .chain(c.documents.iter().map(|d| (EntityKind::Document, d.path.as_path())))
                    .chain(c.marker.iter().map(|m| (EntityKind::Marker, m.as_path())))
            });
            head.into_iter().chain(templates).chain(chapters)
        });
        let learning_tools = self.learning_tools.iter().flat_map(|lt| {
            let tools = lt.tools.iter().flat_map(|t| {
                [
                    (EntityKind::Directory, t.dir.as_path()),
                    (EntityKind::Document, t.document.path.as_path()),
                ]
                .into_iter()
                .chain(t.marker.iter().map(|m| (EntityKind::Marker, m.as_path())))
            });
            std::iter::once((EntityKind::Directory, lt.dir.as_path())).chain(tools)
        });
        volumes.chain(learning_tools)
    }
}
