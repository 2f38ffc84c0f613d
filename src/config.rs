//! Configuration file support
//!
//! Loads settings from ~/.localcode.toml (or %USERPROFILE%\.localcode.toml on
//! Windows). Every key is optional.
//!
//! Example:
//! ```toml
//! interpreter = "python3"
//! source-extension = "py"
//! openable-extensions = ["txt", "py", "md"]
//! line-numbers = true
//! highlighting = true
//! extra-builtins = ["reveal_type"]
//! new-file-template = "# - Happy Coding! - #"
//! ```

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use toml::{Table, Value};

use crate::error::{EditorError, Result};

/// Content written into files created with "new file"
pub const DEFAULT_TEMPLATE: &str = "# - Happy Coding! - #";

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Program the run action invokes
    pub interpreter: String,
    /// Extension (without the dot) a file needs for the run action
    pub source_extension: String,
    /// Extensions that open when selected from a listing
    pub openable_extensions: Vec<String>,
    /// Initial content of new files
    pub new_file_template: String,
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Whether syntax highlighting starts enabled
    pub highlighting: bool,
    /// Names highlighted as built-ins on top of the shipped list
    pub extra_builtins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpreter: "python".to_string(),
            source_extension: "py".to_string(),
            openable_extensions: vec!["txt".to_string(), "py".to_string()],
            new_file_template: DEFAULT_TEMPLATE.to_string(),
            show_line_numbers: true,
            highlighting: true,
            extra_builtins: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".localcode.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".localcode.toml"))
        }
    }

    /// Load configuration from the user's file, falling back to defaults
    ///
    /// A missing or malformed file yields the defaults.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| contents.parse().ok())
            .unwrap_or_default()
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(value) = table.get("interpreter") {
            self.interpreter = expect_string("interpreter", value)?;
        }
        if let Some(value) = table.get("source-extension") {
            self.source_extension = expect_string("source-extension", value)?
                .trim_start_matches('.')
                .to_string();
        }
        if let Some(value) = table.get("openable-extensions") {
            self.openable_extensions = expect_strings("openable-extensions", value)?
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        if let Some(value) = table.get("new-file-template") {
            self.new_file_template = expect_string("new-file-template", value)?;
        }
        if let Some(value) = table.get("line-numbers") {
            self.show_line_numbers = expect_bool("line-numbers", value)?;
        }
        if let Some(value) = table.get("highlighting") {
            self.highlighting = expect_bool("highlighting", value)?;
        }
        if let Some(value) = table.get("extra-builtins") {
            self.extra_builtins = expect_strings("extra-builtins", value)?;
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = EditorError;

    /// Parse config file contents over the defaults
    fn from_str(contents: &str) -> Result<Self> {
        let table: Table = contents
            .parse()
            .map_err(|e: toml::de::Error| EditorError::Config(e.message().to_string()))?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }
}

fn expect_string(key: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EditorError::Config(format!("{} must be a string", key)))
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| EditorError::Config(format!("{} must be true or false", key)))
}

fn expect_strings(key: &str, value: &Value) -> Result<Vec<String>> {
    let invalid = || EditorError::Config(format!("{} must be a list of strings", key));
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
