//! Markdown rendering of the aggregated report.
//!
//! The output is a pure function of the project reports and the
//! documentation URL table: no timestamps and no map iteration order, so
//! identical inputs always produce byte-identical text.

use super::types::{FileGroup, ProjectReport};
use crate::config::ReportConfig;
use crate::types::IssueRecord;

/// Report title line
pub const TITLE: &str = "### 🧪 Clang-Tidy Integration Test Results";

/// Format the `line:col` location, linked to the source when a base URL is known.
pub fn format_location(issue: &IssueRecord, doc_url: Option<&str>) -> String {
    match doc_url {
        Some(base) => format!(
            "[{}:{}]({}/{}#L{})",
            issue.line, issue.column, base, issue.file, issue.line
        ),
        None => format!("{}:{}", issue.line, issue.column),
    }
}

fn render_summary_table(out: &mut String, reports: &[ProjectReport]) {
    out.push_str("| Project | Status | Warnings | Errors | Crash |\n");
    out.push_str("| :--- | :--- | :--- | :--- | :--- |\n");

    for report in reports {
        let result = &report.result;
        let crash_mark = if result.crashed { "YES" } else { "-" };
        out.push_str(&format!(
            "| **{}** | {} {} | {} | {} | {} |\n",
            result.project,
            report.status.icon(),
            report.status.name(),
            result.warning_count,
            result.error_count,
            crash_mark
        ));
    }
}

fn render_file_group(out: &mut String, group: &FileGroup, doc_url: Option<&str>) {
    out.push_str(&format!("#### 📄 `{}`\n", group.file));

    for issue in &group.issues {
        out.push_str(&format!(
            "- {} **{}**: {} `[{}]`\n",
            issue.severity.icon(),
            format_location(issue, doc_url),
            issue.message,
            issue.check_name
        ));
        if !issue.context.is_empty() {
            out.push_str(&format!("  ```cpp\n  {}\n  ```\n", issue.context));
        }
    }
}

fn render_details(out: &mut String, report: &ProjectReport, doc_url: Option<&str>) {
    let result = &report.result;
    out.push_str(&format!(
        "\n<details>\n<summary><strong>🔍 {} Details ({} warnings, {} errors)</strong></summary>\n\n",
        result.project, result.warning_count, result.error_count
    ));

    if result.crashed {
        out.push_str("🚨 **CRASH DETECTED** in this project!\n\n");
    }

    for group in &report.file_groups {
        render_file_group(out, group, doc_url);
    }

    out.push_str("\n</details>\n");
}

/// Render the full markdown report.
///
/// # Arguments
/// * `reports` - Aggregated project reports, already sorted by name
/// * `config` - Supplies the per-project documentation URLs
pub fn render_markdown(reports: &[ProjectReport], config: &ReportConfig) -> String {
    let mut out = String::new();

    out.push_str(TITLE);
    out.push_str("\n\n");

    render_summary_table(&mut out, reports);
    out.push_str("\n---\n");

    for report in reports.iter().filter(|r| r.has_details()) {
        render_details(&mut out, report, config.doc_url(&report.result.project));
    }

    out
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;
