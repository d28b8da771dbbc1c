//! Report generation module - aggregation, rendering and export.
//!
//! This module handles:
//! - Sorting parsed project results and grouping their issues by file
//! - Status classification and summary statistics
//! - Markdown rendering of the consolidated report
//! - Atomic export to Markdown and JSON files
//!
//! # Module Organization
//!
//! - `types` - Rendering model (ProjectReport, FileGroup, StatusSummary, icon tables)
//! - `aggregate` - Sorting and first-seen file grouping
//! - `stats` - Per-status project counts
//! - `markdown` - Deterministic markdown serialization
//! - `export` - Atomic file writes for Markdown and JSON

mod aggregate;
mod export;
mod markdown;
mod stats;
mod types;

// Re-export types
pub use types::{ProjectReport, StatusSummary};

pub use aggregate::aggregate;
pub use export::{export_json_report, export_markdown_report};
pub use markdown::render_markdown;
pub use stats::summarize_reports;
