//! Builds the notebook content for each [`DocumentRole`].
//!
//! Templates are static text with a few interpolated names. The structured content
//! lives in submodules: the flashcards deck in [`flashcards`] and the review scheduler
//! in [`spaced_repetition`].

pub mod flashcards;
pub mod spaced_repetition;

use crate::core::models::notebook::Notebook;
use crate::core::models::role::DocumentRole;
use crate::core::models::toc::{Chapter, Flashcard, Volume};
use crate::core::utils::naming::section_file_name;

/// Where a document sits in the tree: a volume (absent for root-level tools), usually a
/// chapter, and for section notes a 1-based section index.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentContext<'a> {
    pub volume: Option<&'a Volume>,
    pub chapter: Option<&'a Chapter>,
    pub section: Option<usize>,
}

impl<'a> DocumentContext<'a> {
    /// A document that belongs to no volume.
    pub fn global() -> Self {
        Self::default()
    }

    pub fn volume(volume: &'a Volume) -> Self {
        Self {
            volume: Some(volume),
            ..Self::default()
        }
    }

    pub fn chapter(volume: &'a Volume, chapter: &'a Chapter) -> Self {
        Self {
            chapter: Some(chapter),
            ..Self::volume(volume)
        }
    }

    pub fn section(volume: &'a Volume, chapter: &'a Chapter, index: usize) -> Self {
        Self {
            section: Some(index),
            ..Self::chapter(volume, chapter)
        }
    }

    fn chapter_title(&self) -> &str {
        self.chapter.map(|c| c.title.as_str()).unwrap_or("Chapter – TEMPLATE")
    }
}

/// Assembles the notebook for `role` in `ctx`.
///
/// Roles that need a chapter fall back to generic wording when `ctx.chapter` is
/// `None`; section notes without a valid section index produce a chapter-level note.
/// Section notes outside any volume fall back to the notes template.
pub fn assemble(role: DocumentRole, ctx: &DocumentContext<'_>) -> Notebook {
    match role {
        DocumentRole::SectionNotes => section_notes(ctx),
        DocumentRole::Dashboard => dashboard(ctx),
        DocumentRole::Journal => journal(ctx),
        DocumentRole::Flashcards => flashcards::chapter_deck(ctx.chapter_title(), chapter_cards(ctx)),
        DocumentRole::ExerciseBank => exercise_bank(ctx),
        DocumentRole::NotesTemplate => notes_template(),
        DocumentRole::FlashcardsTemplate => flashcards::template_deck(),
        DocumentRole::ChapterExamples => chapter_examples(ctx),
        DocumentRole::SpacedRepetition => spaced_repetition::helper(),
    }
}

fn chapter_cards<'a>(ctx: &DocumentContext<'a>) -> &'a [Flashcard] {
    ctx.chapter.map(|c| c.cards.as_slice()).unwrap_or(&[])
}

fn titled(heading: &str, body: &str) -> Notebook {
    let mut nb = Notebook::new();
    nb.push_markdown(format!("# {}\n\n{}", heading, body));
    nb
}

fn section_notes(ctx: &DocumentContext<'_>) -> Notebook {
    let (Some(volume), Some(chapter)) = (ctx.volume, ctx.chapter) else {
        return notes_template();
    };
    let volume = volume.number;
    let section = ctx
        .section
        .and_then(|i| i.checked_sub(1).and_then(|j| chapter.sections.get(j)).map(|t| (i, t)));

    match section {
        Some((index, title)) => titled(
            &format!("Section {}-{}: {}", chapter.number, index, title),
            &format!(
                "**Reading Notes** for Volume {}, Chapter {}, Section {}.\n\n> Insert key takeaways and equations here.",
                volume, chapter.number, index
            ),
        ),
        None => titled(
            &format!("Chapter {}: {}", chapter.number, chapter.title),
            &format!(
                "**Reading Notes** for Volume {}, Chapter {}.\n\n> Insert key takeaways and equations here.",
                volume, chapter.number
            ),
        ),
    }
}

fn dashboard(ctx: &DocumentContext<'_>) -> Notebook {
    let heading = match (ctx.volume, ctx.chapter) {
        (Some(v), Some(c)) => format!(
            "🗺️ Vol {} Chapter {} Master Overview: {}",
            v.number, c.number, c.title
        ),
        (Some(v), None) => format!("🗺️ Vol {} Master Overview: {}", v.number, v.topic),
        (None, Some(c)) => format!("🗺️ Chapter {} Master Overview: {}", c.number, c.title),
        (None, None) => "🗺️ Master Overview".to_string(),
    };
    let mut nb = titled(
        &heading,
        "## The Command Center\n\nUse this notebook to navigate your reading notes, exercises, and logs.",
    );

    if let Some(chapter) = ctx.chapter.filter(|c| !c.sections.is_empty()) {
        let links: Vec<String> = chapter
            .indexed_sections()
            .map(|(i, title)| {
                format!(
                    "- [{}-{} {}]({})",
                    chapter.number,
                    i,
                    title,
                    section_file_name(chapter.number, i, title)
                )
            })
            .collect();
        nb.push_markdown(format!("## Reading Notes\n\n{}", links.join("\n")));
    }

    nb.push_markdown(format!(
        "## Activities\n\n- [Flashcards]({})\n- [Exercise Bank]({})\n- [AI Q&A Journal]({})",
        DocumentRole::Flashcards.fixed_file_name().unwrap_or_default(),
        DocumentRole::ExerciseBank.fixed_file_name().unwrap_or_default(),
        DocumentRole::Journal.fixed_file_name().unwrap_or_default(),
    ));
    nb
}

fn journal(ctx: &DocumentContext<'_>) -> Notebook {
    let mut nb = titled(
        &format!("📓 AI Learning Journal: {}", ctx.chapter_title()),
        "## A Socratic Dialogue\n\nRecord your questions and AI insights here.",
    );
    nb.push_markdown("## Q1 – [date]\n\n**Question:**\n\n...\n\n**Answer (summary or paste):**\n\n...");
    nb
}

fn exercise_bank(ctx: &DocumentContext<'_>) -> Notebook {
    let mut nb = titled(
        &format!("🏋️ Exercise Bank: {}", ctx.chapter_title()),
        "## Problems & Solutions\n\nTest your understanding of the chapter concepts here.",
    );
    nb.push_markdown("## Problem 1\n\n**Statement:**\n\n**Solution:**\n");
    nb.push_markdown("## Problem 2\n\n**Statement:**\n\n**Solution:**\n");
    nb
}

fn chapter_examples(ctx: &DocumentContext<'_>) -> Notebook {
    let mut nb = Notebook::new();
    nb.push_markdown(format!(
        "# {} – Examples and Code Experiments\n",
        ctx.chapter_title()
    ))
    .push_markdown("Use this notebook for extra examples, numerical checks, and visualizations.")
    .push_code("# import common tools\nimport numpy as np\nimport matplotlib.pyplot as plt\n%matplotlib inline");
    nb
}

fn notes_template() -> Notebook {
    let mut nb = Notebook::new();
    nb.push_markdown("# Chapter – TEMPLATE – Reading Notes\n")
        .push_markdown("## Overview\n\n_Summarize the main ideas in your own words._")
        .push_markdown("## Key Definitions\n\n- \n- ")
        .push_markdown("## Key Equations\n\nWrite them with LaTeX, e.g. `$F = ma$`.\n")
        .push_markdown("## Derivations\n\nWalk through important derivations step by step.\n")
        .push_markdown("## Confusions / Questions\n\nWrite anything that feels unclear here.");
    nb
}
