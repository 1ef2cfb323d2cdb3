//! Error types for the CLI.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing input rejected by the model
    #[error("{0}")]
    Pricing(#[from] PricingError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_passes_through() {
        let err: CliError = PricingError::non_positive("spot", 0.0).into();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: spot = 0 (must be strictly positive)"
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("no spots given".to_string());
        assert!(err.to_string().contains("no spots given"));
    }
}
