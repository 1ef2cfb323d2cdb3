//! CLI configuration management.
//!
//! Loads defaults from an optional TOML file, then applies `BSM_*`
//! environment variable overrides. Command-line flags win over both.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Default number of payoff curve points
    pub payoff_points: usize,
    /// Day-count basis used for the per-day theta column
    pub days_per_year: f64,
    /// Default output format
    pub format: OutputFormat,
    /// `BSM_*` values that did not parse
    #[serde(skip)]
    pub env_errors: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            payoff_points: 100,
            days_per_year: 365.0,
            format: OutputFormat::Table,
            env_errors: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` when it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("BSM_LOG_LEVEL") {
            self.log_level = log_level;
        }

        env_override("BSM_PAYOFF_POINTS", &mut self.payoff_points, &mut self.env_errors);
        env_override("BSM_DAYS_PER_YEAR", &mut self.days_per_year, &mut self.env_errors);

        if let Ok(format) = std::env::var("BSM_FORMAT") {
            match format.to_lowercase().as_str() {
                "json" => self.format = OutputFormat::Json,
                "table" => self.format = OutputFormat::Table,
                _ => self
                    .env_errors
                    .push(format!("BSM_FORMAT: expected 'table' or 'json', got '{format}'")),
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.env_errors.clone();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.payoff_points < 2 {
            errors.push(format!(
                "payoff_points must be at least 2, got {}",
                self.payoff_points
            ));
        }

        if !(self.days_per_year.is_finite() && self.days_per_year > 0.0) {
            errors.push(format!(
                "days_per_year must be positive, got {}",
                self.days_per_year
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Applies `name` from the environment to `current`, recording a value that
/// does not parse so `validate` can report it.
fn env_override<T: FromStr>(name: &str, current: &mut T, errors: &mut Vec<String>) {
    if let Ok(raw) = std::env::var(name) {
        match raw.parse() {
            Ok(value) => *current = value,
            Err(_) => errors.push(format!("{name}: cannot parse '{raw}'")),
        }
    }
}
