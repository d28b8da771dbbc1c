/// Report engine - composition root of the report pipeline
///
/// This module handles:
/// - Discovering `<project>.log` files in the log directory
/// - Parsing all logs in parallel, joined before aggregation
/// - Aggregating, rendering and writing the report artifacts
use crate::config::ReportConfig;
use crate::log_parse;
use crate::report::{self, StatusSummary};
use crate::types::ProjectResult;
use glob::{Pattern, glob};
use log::debug;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// A log artifact discovered for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub project: String,
    pub path: PathBuf,
}

/// Outcome of a report run that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// The log directory does not exist; nothing was written
    MissingLogDir(PathBuf),
    /// The log directory has no `*.log` files; nothing was written
    NoLogs,
    /// The report was written
    Written { output: PathBuf, json_output: Option<PathBuf>, summary: StatusSummary },
}

/// Find `*.log` files directly inside `log_dir`, sorted by path
pub fn discover_logs(log_dir: &Path) -> Result<Vec<LogFile>, String> {
    let pattern = format!("{}/*.log", Pattern::escape(&log_dir.to_string_lossy()));
    debug!("Discovering logs with pattern {}", pattern);

    let entries = glob(&pattern).map_err(|e| format!("Invalid log directory pattern {}: {}", pattern, e))?;

    let mut logs: Vec<LogFile> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let project = path.file_stem()?.to_string_lossy().into_owned();
            Some(LogFile { project, path })
        })
        .collect();

    logs.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("Found {} log files in {:?}", logs.len(), log_dir);
    Ok(logs)
}

/// Parse every log; returns once all of them are done
pub fn parse_logs(logs: &[LogFile], source_root: &str) -> Vec<ProjectResult> {
    logs.par_iter().map(|log| log_parse::parse_log_file(&log.project, &log.path, source_root)).collect()
}

/// Run the whole pipeline: discover, parse, aggregate, render, write
///
/// Only a failure to write an output artifact is an error. Unreadable logs
/// are reported as empty projects.
pub fn generate_report(config: &ReportConfig) -> Result<ReportOutcome, String> {
    if !config.log_dir.is_dir() {
        return Ok(ReportOutcome::MissingLogDir(config.log_dir.clone()));
    }

    let logs = discover_logs(&config.log_dir)?;
    if logs.is_empty() {
        return Ok(ReportOutcome::NoLogs);
    }

    let results = parse_logs(&logs, &config.source_root);
    let reports = report::aggregate(results);
    let markdown = report::render_markdown(&reports, config);

    report::export_markdown_report(&markdown, &config.output)
        .map_err(|e| format!("Failed to write report {}: {}", config.output.display(), e))?;

    if let Some(json_path) = &config.json_output {
        report::export_json_report(&reports, json_path)
            .map_err(|e| format!("Failed to write JSON report {}: {}", json_path.display(), e))?;
    }

    Ok(ReportOutcome::Written {
        output: config.output.clone(),
        json_output: config.json_output.clone(),
        summary: report::summarize_reports(&reports),
    })
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
