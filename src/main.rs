// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod engine;
mod issue_body;
mod log_parse;
mod report;
mod types;
mod ui;

use cli::{Command, ParseIssueArgs, ReportArgs};
use engine::ReportOutcome;
use std::io::Read;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    let result = match args.command {
        Command::Report(report_args) => run_report(&report_args),
        Command::ParseIssue(issue_args) => run_parse_issue(&issue_args),
    };

    if let Err(e) = result {
        ui::print_error(&e);
        std::process::exit(1);
    }
}

/// Generate the markdown report from the per-project logs
fn run_report(args: &ReportArgs) -> Result<(), String> {
    args.validate()?;

    let config = config::build_report_config(args).map_err(|e| format!("Configuration error: {}", e))?;

    match engine::generate_report(&config)? {
        ReportOutcome::MissingLogDir(dir) => {
            ui::status(&format!("Log directory '{}' not found.", dir.display()));
        }
        ReportOutcome::NoLogs => {
            ui::status("No log files found.");
        }
        ReportOutcome::Written { output, json_output, summary } => {
            ui::status(&format!("Report generated: {}", output.display()));
            if let Some(json_path) = json_output {
                ui::status(&format!("JSON report saved to: {}", json_path.display()));
            }
            ui::print_summary(&summary);
        }
    }

    Ok(())
}

/// Read an issue body from stdin and append it to the env file
fn run_parse_issue(args: &ParseIssueArgs) -> Result<(), String> {
    let mut body = String::new();
    std::io::stdin().read_to_string(&mut body).map_err(|e| format!("Failed to read stdin: {}", e))?;

    let request = issue_body::parse_body(&body)?;
    issue_body::append_github_env(&args.env_file, &request)
        .map_err(|e| format!("Failed to write {}: {}", args.env_file.display(), e))?;

    Ok(())
}
