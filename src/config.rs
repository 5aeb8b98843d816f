//! Shell configuration
//!
//! Loaded from `~/.config/myshell/myshell.yaml` when present; every field
//! has a default so a missing or partial file is fine. An explicitly
//! requested file that cannot be read or parsed is a hard error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: String,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "MyShell> ".to_string(),
            history: HistoryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub enabled: bool,
    /// History file path; empty means in-memory history only. A leading
    /// `~/` expands against the home directory.
    pub file: String,
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: String::new(),
            max_entries: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Full `tracing` filter directive; overrides `level` when non-empty.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            filter: String::new(),
        }
    }
}

impl LoggingConfig {
    /// The directive handed to the subscriber's env filter.
    pub fn directive(&self) -> String {
        if self.filter.is_empty() {
            self.level.as_str().to_string()
        } else {
            self.filter.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Load from the default location, falling back to defaults when the file
/// does not exist. A file that exists but fails to read or parse is an
/// error.
pub fn load() -> Result<Config, ConfigError> {
    let Some(home) = dirs::home_dir() else {
        return Ok(Config::default());
    };
    let path = home.join(".config/myshell/myshell.yaml");
    if path.exists() {
        load_from_file(&path)
    } else {
        Ok(Config::default())
    }
}

/// Load a specific file. Unlike [`load`], a missing file is an error here.
pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}
