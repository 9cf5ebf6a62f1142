//! # Engine Module
//!
//! Turns declarative tables of contents into a validated plan and carries the run-time
//! concerns around executing it.
//!
//! - **Configuration** ([`config`]) - Target root and optional layout extras
//! - **Planning** ([`plan`]) - Derived names, collision and degenerate-name checks
//! - **Reporting** ([`report`], [`progress`]) - Per-entity outcomes and progress events
//! - **Error Handling** ([`error`]) - The error type every fallible operation returns

pub mod config;
pub mod error;
pub mod plan;
pub mod progress;
pub mod report;
