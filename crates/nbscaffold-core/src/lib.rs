//! # nbscaffold Core Library
//!
//! Generates the skeleton of a study workspace: one directory per textbook chapter,
//! one reading-notes notebook per section, and a fixed set of support notebooks per
//! chapter (dashboard, Q&A journal, flashcards, exercise bank). Optional extras add an
//! examples notebook per chapter and a shared `learning-tools/` tree.
//!
//! Generation is deterministic and non-destructive. Names are pure functions of the
//! titles, and a document is written only where no file exists yet, so scaffolding can
//! be re-run over a tree that already holds hand-written notes.
//!
//! ## Layers
//!
//! - **[`core`]**: data models, naming rules, notebook serialization, existence-checked
//!   file creation, and document templates.
//! - **[`engine`]**: configuration, validated planning, errors, progress, and reports.
//! - **[`workflows`]**: the `plan` and `run` entry points.

pub mod core;
pub mod engine;
pub mod workflows;
