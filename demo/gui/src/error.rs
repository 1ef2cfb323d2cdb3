//! Error types for the dashboard.

use thiserror::Error;

use crate::config::ConfigError;

/// Dashboard error type
#[derive(Debug, Error)]
pub enum DashboardError {
    /// No project is registered under this id
    #[error("Unknown project: {0}")]
    UnknownProject(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Terminal or log file IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
