//! Summary statistics for a report run.

use super::types::{ProjectReport, StatusSummary};
use crate::types::Status;

/// Count projects per status.
///
/// # Arguments
/// * `reports` - Aggregated project reports
///
/// # Returns
/// A `StatusSummary` with one counter per status plus the total.
pub fn summarize_reports(reports: &[ProjectReport]) -> StatusSummary {
    let mut summary = StatusSummary::default();

    for report in reports {
        match report.status {
            Status::Pass => summary.passed += 1,
            Status::Warnings => summary.warnings += 1,
            Status::Fail => summary.failed += 1,
            Status::Crash => summary.crashed += 1,
        }
    }

    summary.total = reports.len();
    summary
}
