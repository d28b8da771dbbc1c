//! Aggregation of parsed project results into the report view.
//!
//! Results arrive in discovery order; the report is always sorted by project
//! name and each project's issues are grouped by file in first-seen order.

use super::types::{FileGroup, ProjectReport};
use crate::types::{IssueRecord, ProjectResult, Status};
use log::debug;
use std::collections::HashMap;

/// Group issues by file, keeping the order in which files first appear.
///
/// Issue order inside each group is the original log order.
pub fn group_by_file(issues: &[IssueRecord]) -> Vec<FileGroup> {
    let mut groups: Vec<FileGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for issue in issues {
        let slot = *index.entry(issue.file.as_str()).or_insert_with(|| {
            groups.push(FileGroup { file: issue.file.clone(), issues: Vec::new() });
            groups.len() - 1
        });
        groups[slot].issues.push(issue.clone());
    }

    groups
}

/// Build the sorted report view from all parsed results.
pub fn aggregate(mut results: Vec<ProjectResult>) -> Vec<ProjectReport> {
    results.sort_by(|a, b| a.project.cmp(&b.project));

    let reports: Vec<ProjectReport> = results
        .into_iter()
        .map(|result| {
            let status = Status::of(&result);
            let file_groups = group_by_file(&result.issues);
            ProjectReport { result, status, file_groups }
        })
        .collect();

    debug!("Aggregated {} projects", reports.len());
    reports
}
