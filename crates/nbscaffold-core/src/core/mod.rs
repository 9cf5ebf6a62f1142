//! # Core Module
//!
//! The stateless foundation of the scaffolder.
//!
//! - **Data Models** ([`models`]) - Table of contents, notebook documents, and document roles
//! - **Naming** ([`utils`]) - The canonical title-to-name rules (slugs, section stems, file names)
//! - **File I/O** ([`io`]) - TOC loading, notebook serialization, existence-checked creation
//! - **Templates** ([`templates`]) - The content of each generated notebook

pub mod io;
pub mod models;
pub mod templates;
pub mod utils;
