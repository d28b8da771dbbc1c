//! Report type definitions for the rendering model.
//!
//! This module defines the aggregated view the markdown and JSON renderers
//! consume, plus the fixed icon tables for statuses and severities.

use crate::types::{IssueRecord, ProjectResult, Severity, Status};

impl Status {
    /// Get the fixed icon for this status.
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Pass => "✅",
            Status::Warnings => "⚠️",
            Status::Fail => "❌",
            Status::Crash => "💥",
        }
    }

    /// Get the display name for this status.
    pub fn name(&self) -> &'static str {
        match self {
            Status::Pass => "Pass",
            Status::Warnings => "Warnings",
            Status::Fail => "Fail",
            Status::Crash => "CRASH",
        }
    }
}

impl Severity {
    /// Get the icon shown in front of each issue line.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Warning => "⚠️",
            Severity::Error => "🛑",
        }
    }
}

/// Issues of one project that share a file, in log order.
#[derive(Debug, Clone, PartialEq)]
pub struct FileGroup {
    /// Relative file path (grouping key)
    pub file: String,
    /// Issues reported in this file
    pub issues: Vec<IssueRecord>,
}

/// One project's aggregated view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReport {
    /// Parsed result for the project
    pub result: ProjectResult,
    /// Highest-precedence status
    pub status: Status,
    /// Issues grouped by file, in first-seen file order
    pub file_groups: Vec<FileGroup>,
}

impl ProjectReport {
    /// Whether the project gets a collapsible detail section.
    ///
    /// Clean passes are only listed in the summary table; a crash always
    /// gets a detail section even without issues.
    pub fn has_details(&self) -> bool {
        !self.result.is_clean()
    }
}

/// Project counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct StatusSummary {
    /// Projects without any diagnostics
    pub passed: usize,
    /// Projects with warnings only
    pub warnings: usize,
    /// Projects with at least one error
    pub failed: usize,
    /// Projects where clang-tidy crashed
    pub crashed: usize,
    /// Total number of projects
    pub total: usize,
}
