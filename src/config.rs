/// Configuration resolution module
///
/// This module handles:
/// - Loading the report configuration from a TOML file
/// - Falling back to built-in defaults when no file is present
/// - Looking up per-project documentation URLs
use crate::cli::ReportArgs;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "ctit.toml";

/// Directory name under which the test projects are checked out
pub const DEFAULT_SOURCE_ROOT: &str = "test-projects";

/// Resolved settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory containing `<project>.log` files
    pub log_dir: PathBuf,
    /// Markdown report destination
    pub output: PathBuf,
    /// Optional JSON export destination
    pub json_output: Option<PathBuf>,
    /// Checkout directory name used to derive relative file paths
    pub source_root: String,
    /// Project name -> documentation base URL for line links
    pub doc_urls: BTreeMap<String, String>,
}

/// On-disk shape of `ctit.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source_root: Option<String>,
    doc_urls: Option<BTreeMap<String, String>>,
}

/// Built-in documentation URL table
pub fn default_doc_urls() -> BTreeMap<String, String> {
    let mut urls = BTreeMap::new();
    urls.insert("cppcheck".to_string(), "https://github.com/danmar/cppcheck/blob/main".to_string());
    urls
}

impl ReportConfig {
    /// Defaults for the given log directory and output path
    pub fn new(log_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        ReportConfig {
            log_dir: log_dir.into(),
            output: output.into(),
            json_output: None,
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
            doc_urls: default_doc_urls(),
        }
    }

    /// Documentation base URL for a project, if one is configured
    pub fn doc_url(&self, project: &str) -> Option<&str> {
        self.doc_urls.get(project).map(|s| s.trim_end_matches('/')).filter(|s| !s.is_empty())
    }

    fn apply(mut self, file: ConfigFile) -> Self {
        if let Some(root) = file.source_root {
            self.source_root = root;
        }
        if let Some(urls) = file.doc_urls {
            self.doc_urls = urls;
        }
        self
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&text).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}

/// Build a complete `ReportConfig` from CLI arguments
///
/// An explicitly given config file must exist and parse. The default
/// `ctit.toml` is optional.
pub fn build_report_config(args: &ReportArgs) -> Result<ReportConfig, String> {
    let mut config = ReportConfig::new(args.log_dir.clone(), args.output.clone());
    config.json_output = args.json.clone();

    let file = match &args.config {
        Some(path) => {
            debug!("Loading config from {:?}", path);
            Some(read_config_file(path)?)
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                debug!("Loading default config from {:?}", default_path);
                Some(read_config_file(default_path)?)
            } else {
                debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                None
            }
        }
    };

    if let Some(file) = file {
        config = config.apply(file);
    }

    if let Some(root) = &args.source_root {
        config.source_root = root.clone();
    }

    debug!("Resolved report config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
