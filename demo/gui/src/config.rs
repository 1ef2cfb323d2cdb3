//! Dashboard configuration management.
//!
//! Handles loading of the dashboard configuration from TOML files with
//! environment variable override support.

use pricer_models::prelude::{OptionParameters, OptionType};
use serde::Deserialize;
use std::path::{Path, PathBuf};
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

/// Initial values of the option pricer form
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormDefaults {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: OptionType::Call,
        }
    }
}

impl FormDefaults {
    /// Unvalidated parameters; `OptionParameters::validate` decides.
    pub fn as_parameters(&self) -> OptionParameters {
        OptionParameters {
            spot: self.spot,
            strike: self.strike,
            time_to_maturity: self.maturity,
            risk_free_rate: self.rate,
            volatility: self.volatility,
            option_type: self.option_type,
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file path; the terminal is owned by the UI
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Number of payoff curve points
    #[serde(default = "default_payoff_points")]
    pub payoff_points: usize,

    /// Day-count basis for the per-day theta figure
    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,

    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Initial form values
    #[serde(default)]
    pub defaults: FormDefaults,

    /// `BSM_*` values that did not parse
    #[serde(skip)]
    pub env_errors: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("bsm-dashboard.log")
}

fn default_payoff_points() -> usize {
    100
}

fn default_days_per_year() -> f64 {
    365.0
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: default_log_file(),
            payoff_points: default_payoff_points(),
            days_per_year: default_days_per_year(),
            tick_rate_ms: default_tick_rate_ms(),
            defaults: FormDefaults::default(),
            env_errors: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
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

        if let Ok(log_file) = std::env::var("BSM_LOG_FILE") {
            self.log_file = PathBuf::from(log_file);
        }

        env_override("BSM_PAYOFF_POINTS", &mut self.payoff_points, &mut self.env_errors);
        env_override("BSM_DAYS_PER_YEAR", &mut self.days_per_year, &mut self.env_errors);
        env_override("BSM_TICK_RATE_MS", &mut self.tick_rate_ms, &mut self.env_errors);

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.env_errors.clone();

        // Validate log level
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

        if self.tick_rate_ms == 0 {
            errors.push("tick_rate_ms must be at least 1".to_string());
        }

        // Form defaults must be priceable
        if let Err(e) = self.defaults.as_parameters().validate() {
            errors.push(format!("defaults: {e}"));
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
