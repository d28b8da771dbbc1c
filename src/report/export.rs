//! Report export functions for Markdown and JSON formats.
//!
//! Every artifact is written to a temporary file next to its destination
//! and then renamed into place, so a report is either complete or absent.

use super::stats::summarize_reports;
use super::types::ProjectReport;
use log::debug;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Give the temp file the permissions of the file it replaces, or 0644 for a
/// new file. `NamedTempFile` creates files readable by the owner only.
#[cfg(unix)]
fn copy_target_permissions(tmp: &File, path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(e) if e.kind() == ErrorKind::NotFound => fs::Permissions::from_mode(0o644),
        Err(e) => return Err(e),
    };
    tmp.set_permissions(permissions)
}

#[cfg(not(unix))]
fn copy_target_permissions(tmp: &File, path: &Path) -> std::io::Result<()> {
    match fs::metadata(path) {
        Ok(meta) => tmp.set_permissions(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    copy_target_permissions(tmp.as_file(), path)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}

/// Export the rendered markdown report.
pub fn export_markdown_report(markdown: &str, output_path: &Path) -> std::io::Result<()> {
    write_atomically(output_path, markdown.as_bytes())
}

/// Export project results as JSON.
///
/// Creates a JSON report with the status summary and, per project, its
/// status, counts and issues in log order.
///
/// # Arguments
/// * `reports` - Aggregated project reports, sorted by name
/// * `output_path` - Path to write the JSON file
pub fn export_json_report(reports: &[ProjectReport], output_path: &Path) -> std::io::Result<()> {
    use serde_json::json;

    let summary = summarize_reports(reports);
    let projects: Vec<serde_json::Value> = reports
        .iter()
        .map(|report| {
            json!({
                "project": report.result.project,
                "status": report.status,
                "warnings": report.result.warning_count,
                "errors": report.result.error_count,
                "crashed": report.result.crashed,
                "issues": report.result.issues,
            })
        })
        .collect();

    let report = json!({
        "summary": summary,
        "projects": projects,
    });

    let mut bytes = serde_json::to_vec_pretty(&report)?;
    bytes.push(b'\n');
    write_atomically(output_path, &bytes)
}
