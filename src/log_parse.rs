/// Log parsing module for clang-tidy output
///
/// This module turns the text of one per-project clang-tidy log into a
/// `ProjectResult`:
/// - Crash detection (fatal signal / stack dump markers)
/// - Diagnostic line extraction with a single compiled pattern
/// - Relative path resolution and one-line context capture
use crate::types::{IssueRecord, ProjectResult, Severity};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Substrings that mark an abnormal termination of clang-tidy
pub const CRASH_MARKERS: &[&str] = &["Segmentation fault", "Stack dump:"];

lazy_static! {
    /// `<path>:<line>:<col>: <warning|error>: <message> [<check-name>]`
    static ref DIAGNOSTIC_LINE: Regex =
        Regex::new(r"^(.+?):(\d+):(\d+): (warning|error): (.+) \[(.+)\]$").unwrap();
}

/// Fields of a matched diagnostic line, borrowed from the log text
#[derive(Debug, PartialEq)]
struct DiagnosticLine<'a> {
    path: &'a str,
    line: u64,
    column: u64,
    severity: Severity,
    message: &'a str,
    check_name: &'a str,
}

/// Returns true if the line signals that the analyzed process crashed
pub fn is_crash_line(line: &str) -> bool {
    CRASH_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Digit runs too large for `u64` saturate instead of dropping the diagnostic
fn parse_position(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

fn match_diagnostic(line: &str) -> Option<DiagnosticLine<'_>> {
    let caps = DIAGNOSTIC_LINE.captures(line)?;
    Some(DiagnosticLine {
        path: caps.get(1)?.as_str(),
        line: parse_position(caps.get(2)?.as_str()),
        column: parse_position(caps.get(3)?.as_str()),
        severity: Severity::from_token(caps.get(4)?.as_str())?,
        message: caps.get(5)?.as_str(),
        check_name: caps.get(6)?.as_str(),
    })
}

/// Resolve the path shown in the report for a diagnostic
///
/// Everything after the first `<source_root>/<project>/` is used when present,
/// otherwise the basename of the path.
pub fn relative_path(path: &str, project: &str, source_root: &str) -> String {
    let prefix = if source_root.is_empty() {
        format!("{}/", project)
    } else {
        format!("{}/{}/", source_root.trim_end_matches('/'), project)
    };

    if let Some(pos) = path.find(&prefix) {
        return path[pos + prefix.len()..].to_string();
    }

    path.rsplit('/').next().unwrap_or(path).to_string()
}

/// The line after a diagnostic is its context unless blank or starting a new path
fn context_line(next: Option<&str>) -> String {
    match next {
        Some(raw) if !raw.trim().is_empty() && !raw.starts_with('/') => raw.trim().to_string(),
        _ => String::new(),
    }
}

/// Parse the full text of a log into a `ProjectResult`
///
/// Non-diagnostic lines are skipped; the parse itself never fails.
pub fn parse_log_text(project: &str, text: &str, source_root: &str) -> ProjectResult {
    let mut result = ProjectResult::empty(project);
    let lines: Vec<&str> = text.lines().collect();

    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if is_crash_line(line) {
            result.crashed = true;
            continue;
        }

        let Some(diag) = match_diagnostic(line) else {
            continue;
        };

        result.push_issue(IssueRecord {
            project: project.to_string(),
            file: relative_path(diag.path, project, source_root),
            line: diag.line,
            column: diag.column,
            severity: diag.severity,
            message: diag.message.to_string(),
            check_name: diag.check_name.to_string(),
            context: context_line(lines.get(idx + 1).copied()),
        });
    }

    debug!(
        "Parsed log for {}: {} warnings, {} errors, crashed={}",
        project, result.warning_count, result.error_count, result.crashed
    );

    result
}

/// Read and parse one log file
///
/// Undecodable bytes are replaced. A file that cannot be read yields an empty
/// result and a warning so the other projects are still reported.
pub fn parse_log_file(project: &str, path: &Path, source_root: &str) -> ProjectResult {
    debug!("Reading log for {} from {:?}", project, path);

    match fs::read(path) {
        Ok(bytes) => parse_log_text(project, &String::from_utf8_lossy(&bytes), source_root),
        Err(e) => {
            warn!("Error parsing {}: {}", path.display(), e);
            ProjectResult::empty(project)
        }
    }
}

#[cfg(test)]
#[path = "log_parse_test.rs"]
mod log_parse_test;
