/// Core data structures for parsed clang-tidy results
///
/// This module defines the per-issue and per-project records produced by the
/// log parser and consumed by the report aggregation and rendering steps.

/// Severity of a single clang-tidy diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Parse the severity token used in clang-tidy output ("warning" / "error")
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

/// One diagnostic reported by clang-tidy
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IssueRecord {
    pub project: String,
    /// Path relative to the project checkout, or the basename when no prefix matched
    pub file: String,
    pub line: u64,
    pub column: u64,
    pub severity: Severity,
    pub message: String,
    pub check_name: String,
    /// Source snippet from the line following the diagnostic, empty if none
    pub context: String,
}

/// Aggregate result for one project's log
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectResult {
    pub project: String,
    pub warning_count: usize,
    pub error_count: usize,
    pub crashed: bool,
    /// Issues in order of appearance in the log
    pub issues: Vec<IssueRecord>,
}

impl ProjectResult {
    /// Create an empty result (no issues, no crash)
    pub fn empty(project: &str) -> Self {
        ProjectResult {
            project: project.to_string(),
            warning_count: 0,
            error_count: 0,
            crashed: false,
            issues: Vec::new(),
        }
    }

    /// Append an issue, keeping the severity counters in sync
    pub fn push_issue(&mut self, issue: IssueRecord) {
        match issue.severity {
            Severity::Warning => self.warning_count += 1,
            Severity::Error => self.error_count += 1,
        }
        self.issues.push(issue);
    }

    /// Whether this project is a clean pass with nothing to show in detail
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && !self.crashed
    }
}

/// Overall status of a project run, highest precedence first: Crash > Fail > Warnings > Pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Status {
    Pass,
    Warnings,
    Fail,
    Crash,
}

impl Status {
    /// Classify from counts and the crash flag
    pub fn classify(warning_count: usize, error_count: usize, crashed: bool) -> Self {
        if crashed {
            Status::Crash
        } else if error_count > 0 {
            Status::Fail
        } else if warning_count > 0 {
            Status::Warnings
        } else {
            Status::Pass
        }
    }

    pub fn of(result: &ProjectResult) -> Self {
        Status::classify(result.warning_count, result.error_count, result.crashed)
    }
}
