//! Issue body parsing for workflow-triggered runs.
//!
//! A run request arrives as a GitHub issue body:
//!
//! ```text
//! https://github.com/llvm/llvm-project/pull/123 readability-identifier-naming
//! VariableCase: camelBack
//! IgnoreFailedSplit: true
//! ```
//!
//! The first line names the PR and the check; every following `key: value`
//! line becomes a clang-tidy `CheckOptions` entry.

use log::debug;
use serde_json::{Map, Number, Value};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// A parsed run request
#[derive(Debug, Clone, PartialEq)]
pub struct IssueRequest {
    pub pr_link: String,
    pub check_name: String,
    /// `{"CheckOptions": {...}}` as JSON, or empty when no options were given
    pub tidy_config: String,
}

/// Convert an option value to the most specific JSON type
fn option_value(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if raw.contains('.') {
        if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    } else if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n.into());
    }

    Value::String(raw.to_string())
}

/// Parse an issue body into a run request
pub fn parse_body(body: &str) -> Result<IssueRequest, String> {
    let body = body.trim();
    if body.is_empty() {
        return Err("Empty body".to_string());
    }

    let lines: Vec<&str> = body.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let first = lines.first().ok_or_else(|| "No valid lines found".to_string())?;

    let parts: Vec<&str> = first.split_whitespace().collect();
    if parts.len() < 2 {
        return Err("First line must contain PR_URL and CHECK_NAME".to_string());
    }
    let pr_link = parts[0].to_string();
    let check_name = parts[1].to_string();

    let prefix = format!("{}.", check_name);
    let mut options = Map::new();
    for line in &lines[1..] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let full_key = if key.starts_with(&prefix) { key.to_string() } else { format!("{}{}", prefix, key) };
        options.insert(full_key, option_value(value.trim()));
    }

    debug!("Parsed issue: pr={} check={} options={}", pr_link, check_name, options.len());

    let tidy_config = if options.is_empty() {
        String::new()
    } else {
        let mut root = Map::new();
        root.insert("CheckOptions".to_string(), Value::Object(options));
        Value::Object(root).to_string()
    };

    Ok(IssueRequest { pr_link, check_name, tidy_config })
}

/// Append the request to a GitHub Actions env file using heredoc entries
pub fn append_github_env(path: &Path, request: &IssueRequest) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (name, value) in [
        ("PR_LINK", &request.pr_link),
        ("CHECK_NAME", &request.check_name),
        ("TIDY_CONFIG", &request.tidy_config),
    ] {
        write!(file, "{}<<EOF\n{}\nEOF\n", name, value)?;
    }
    Ok(())
}
