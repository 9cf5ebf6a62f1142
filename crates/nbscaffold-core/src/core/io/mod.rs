//! Input/output for the scaffolder.
//!
//! This module reads the declarative tables of contents, serializes notebook documents
//! to the Jupyter on-disk format, and performs the existence-checked filesystem
//! mutations that make repeated scaffold runs safe.

pub mod fs;
pub mod ipynb;
pub mod toc;
pub mod traits;
