/// Integration tests for the ctit binary
///
/// These tests run the built binary against the log fixtures in
/// `test-fixtures/logs` and inspect the generated report files.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

// Helper to get the log fixtures directory
fn fixtures_dir() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-fixtures/logs")
}

// Helper to run ctit in a working directory
fn run_ctit(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ctit"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run ctit {}: {}", args.join(" "), e))
}

// Helper to assert the command succeeded
fn assert_success(output: &Output, context: &str) {
    assert!(
        output.status.success(),
        "{} failed with status: {:?}\nstdout: {}\nstderr: {}",
        context,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn report_from_fixtures(work: &Path) -> String {
    let log_dir = fixtures_dir();
    let output = run_ctit(&["report", "--log-dir", log_dir.to_str().unwrap(), "--output", "issue.md"], work);
    assert_success(&output, "ctit report");
    fs::read_to_string(work.join("issue.md")).expect("report should be written")
}

#[test]
fn test_fixtures_exist() {
    let fixtures = fixtures_dir();
    assert!(fixtures.join("cppcheck.log").exists());
    assert!(fixtures.join("fmt.log").exists());
    assert!(fixtures.join("llvm-project.log").exists());
}

#[test]
fn test_report_summary_table() {
    let work = tempfile::tempdir().unwrap();
    let md = report_from_fixtures(work.path());

    assert!(md.starts_with("### 🧪 Clang-Tidy Integration Test Results\n\n"));

    let rows = [
        "| **cppcheck** | ❌ Fail | 3 | 1 | - |",
        "| **fmt** | ✅ Pass | 0 | 0 | - |",
        "| **llvm-project** | 💥 CRASH | 0 | 0 | YES |",
    ];
    let positions: Vec<usize> = rows.iter().map(|row| md.find(row).unwrap_or_else(|| panic!("missing {}", row))).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "rows must be sorted by project name");
}

#[test]
fn test_report_details() {
    let work = tempfile::tempdir().unwrap();
    let md = report_from_fixtures(work.path());

    // Clean projects get no detail block
    assert!(!md.contains("🔍 fmt Details"));

    assert!(md.contains("🔍 llvm-project Details (0 warnings, 0 errors)"));
    assert!(md.contains("🚨 **CRASH DETECTED** in this project!"));

    // cppcheck has a documentation URL by default, so locations are links
    assert!(md.contains("🔍 cppcheck Details (3 warnings, 1 errors)"));
    assert!(md.contains(
        "- ⚠️ **[120:13](https://github.com/danmar/cppcheck/blob/main/lib/token.cpp#L120)**: \
         the parameter 'str' is copied for each invocation but only used as a const reference \
         `[performance-unnecessary-value-param]`\n  ```cpp\n  120 | void Token::update(std::string str)\n  ```\n"
    ));
    assert!(md.contains("- 🛑 **[30:9](https://github.com/danmar/cppcheck/blob/main/cli/main.cpp#L30)**"));

    // Files in first-seen order, token.cpp issues kept together
    let token = md.find("#### 📄 `lib/token.cpp`").unwrap();
    let main = md.find("#### 📄 `cli/main.cpp`").unwrap();
    let long_fn = md.find("function is too long").unwrap();
    assert!(token < long_fn && long_fn < main);
}

#[test]
fn test_report_is_byte_identical_across_runs() {
    let work = tempfile::tempdir().unwrap();
    let first = report_from_fixtures(work.path());
    let second = report_from_fixtures(work.path());
    assert_eq!(first, second);
}

#[test]
fn test_config_file_controls_links() {
    let work = tempfile::tempdir().unwrap();
    fs::write(work.path().join("ctit.toml"), "[doc_urls]\nfmt = \"https://github.com/fmtlib/fmt/blob/master\"\n")
        .unwrap();

    let md = report_from_fixtures(work.path());
    assert!(md.contains("- ⚠️ **120:13**:"), "cppcheck has no link once the table is replaced");
}

#[test]
fn test_json_export() {
    let work = tempfile::tempdir().unwrap();
    let log_dir = fixtures_dir();
    let output = run_ctit(
        &["report", "--log-dir", log_dir.to_str().unwrap(), "--output", "issue.md", "--json", "issue.json"],
        work.path(),
    );
    assert_success(&output, "ctit report --json");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(work.path().join("issue.json")).unwrap()).unwrap();
    assert_eq!(value["summary"]["total"], 3);
    assert_eq!(value["projects"][0]["project"], "cppcheck");
    assert_eq!(value["projects"][0]["issues"].as_array().unwrap().len(), 4);
}

#[test]
fn test_no_logs_exits_successfully_without_report() {
    let work = tempfile::tempdir().unwrap();
    fs::create_dir(work.path().join("logs")).unwrap();

    let output = run_ctit(&["report"], work.path());
    assert_success(&output, "ctit report with empty log dir");
    assert!(String::from_utf8_lossy(&output.stdout).contains("No log files found."));
    assert!(!work.path().join("issue.md").exists());
}

#[test]
fn test_missing_log_dir_exits_successfully() {
    let work = tempfile::tempdir().unwrap();
    let output = run_ctit(&["report", "--log-dir", "nope"], work.path());
    assert_success(&output, "ctit report with missing log dir");
    assert!(String::from_utf8_lossy(&output.stdout).contains("not found"));
}

#[test]
fn test_unwritable_output_fails() {
    let work = tempfile::tempdir().unwrap();
    let log_dir = fixtures_dir();
    let output = run_ctit(
        &["report", "--log-dir", log_dir.to_str().unwrap(), "--output", "missing/dir/issue.md"],
        work.path(),
    );
    assert!(!output.status.success(), "report write failure must be fatal");
}

#[test]
fn test_no_subcommand_fails() {
    let work = tempfile::tempdir().unwrap();
    let output = run_ctit(&[], work.path());
    assert!(!output.status.success());
}

#[test]
fn test_parse_issue_appends_env_entries() {
    let work = tempfile::tempdir().unwrap();
    let env_file = work.path().join("github_env");

    let mut child = Command::new(env!("CARGO_BIN_EXE_ctit"))
        .args(["parse-issue", env_file.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn ctit");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"https://github.com/llvm/llvm-project/pull/1 bugprone-foo\nStrictMode: true\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_success(&output, "ctit parse-issue");

    let content = fs::read_to_string(&env_file).unwrap();
    assert_eq!(
        content,
        "PR_LINK<<EOF\nhttps://github.com/llvm/llvm-project/pull/1\nEOF\n\
         CHECK_NAME<<EOF\nbugprone-foo\nEOF\n\
         TIDY_CONFIG<<EOF\n{\"CheckOptions\":{\"bugprone-foo.StrictMode\":true}}\nEOF\n"
    );
}

#[test]
fn test_parse_issue_rejects_empty_body() {
    let work = tempfile::tempdir().unwrap();
    let env_file = work.path().join("github_env");

    let output = Command::new(env!("CARGO_BIN_EXE_ctit"))
        .args(["parse-issue", env_file.to_str().unwrap()])
        .stdin(Stdio::null())
        .current_dir(work.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!env_file.exists());
}
