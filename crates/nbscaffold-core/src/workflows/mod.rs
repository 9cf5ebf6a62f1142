//! # Workflows Module
//!
//! The top-level entry points of the library.
//!
//! - **Scaffold Workflow** ([`scaffold`]) - Plans and creates the directory tree and
//!   notebooks for one or more volumes, skipping anything that already exists.

pub mod scaffold;
