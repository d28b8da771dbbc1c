use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default directory holding the per-project clang-tidy logs
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default markdown report path
pub const DEFAULT_OUTPUT_FILE: &str = "issue.md";

#[derive(Parser, Debug, Clone)]
#[command(name = "ctit")]
#[command(about = "Clang Tidy Integration Tester")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate markdown report from clang-tidy logs
    Report(ReportArgs),

    /// Parse an issue body from stdin and append PR_LINK, CHECK_NAME and TIDY_CONFIG to a GitHub env file
    ParseIssue(ParseIssueArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Directory containing <project>.log files
    #[arg(long, default_value = DEFAULT_LOG_DIR, value_name = "DIR")]
    pub log_dir: PathBuf,

    /// Output markdown file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE, value_name = "PATH")]
    pub output: PathBuf,

    /// Config file with source root and documentation URLs (default: ./ctit.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Checkout directory name used to shorten diagnostic paths (overrides config)
    #[arg(long, value_name = "NAME")]
    pub source_root: Option<String>,

    /// Also write the parsed results as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ParseIssueArgs {
    /// File to append the environment entries to (usually $GITHUB_ENV)
    #[arg(value_name = "ENV_FILE")]
    pub env_file: PathBuf,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

impl ReportArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.output.as_os_str().is_empty() {
            return Err("--output must not be empty".to_string());
        }

        if self.json.as_ref() == Some(&self.output) {
            return Err("--json and --output must point to different files".to_string());
        }

        Ok(())
    }
}
