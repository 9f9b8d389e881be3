// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How finalized usage data is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyMode {
    /// Store usage lists on every entity.
    #[default]
    Global,
    /// Refresh one class, its fields and its methods.
    Class(String),
    /// Only stream the data to the snapshot, leave entities untouched.
    StreamOnly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_file: Option<PathBuf>,
    pub parallel_accumulation: bool,
    pub max_threads: usize,
    pub apply_mode: ApplyMode,
    pub pretty_output: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: None,
            parallel_accumulation: true,
            max_threads: num_cpus::get(),
            apply_mode: ApplyMode::Global,
            pretty_output: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn with_parallel_accumulation(mut self, parallel: bool) -> Self {
        self.parallel_accumulation = parallel;
        self
    }

    pub fn with_apply_mode(mut self, mode: ApplyMode) -> Self {
        self.apply_mode = mode;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_threads == 0 {
            return Err("max_threads must be greater than 0".to_string());
        }
        if let ApplyMode::Class(name) = &self.apply_mode {
            if name.trim().is_empty() {
                return Err("apply_mode class name must not be empty".to_string());
            }
        }
        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "off" | "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(format!("unknown log_level: {}", self.log_level));
        }
        Ok(())
    }
}
