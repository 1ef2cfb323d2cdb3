//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The single error kind raised by the pricing core

use thiserror::Error;

/// Pricing errors.
///
/// Every failure of the pricing core is a deterministic input-validation
/// failure, reported synchronously before any formula is evaluated. There is
/// one kind, `InvalidParameter`, carrying the offending field, its value and
/// the violated constraint.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::non_positive("time_to_maturity", 0.0);
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter: time_to_maturity = 0 (must be strictly positive)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// A parameter violates its precondition.
    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Name of the offending parameter
        name: String,
        /// The rejected value
        value: f64,
        /// The constraint that was violated
        reason: String,
    },
}

impl PricingError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Parameter must be strictly positive.
    pub fn non_positive(name: impl Into<String>, value: f64) -> Self {
        Self::invalid_parameter(name, value, "must be strictly positive")
    }

    /// Parameter must be a finite number.
    pub fn non_finite(name: impl Into<String>, value: f64) -> Self {
        Self::invalid_parameter(name, value, "must be finite")
    }

    /// A payoff curve needs at least two points.
    pub fn too_few_points(num_points: usize) -> Self {
        Self::invalid_parameter("num_points", num_points as f64, "must be at least 2")
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

/// Checks that `value` is finite and strictly positive.
///
/// # Examples
/// ```
/// use pricer_core::types::error::ensure_positive;
///
/// assert!(ensure_positive("spot", 100.0).is_ok());
/// assert!(ensure_positive("spot", 0.0).is_err());
/// assert!(ensure_positive("spot", f64::NAN).is_err());
/// ```
pub fn ensure_positive(name: &str, value: f64) -> Result<(), PricingError> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(PricingError::non_positive(name, value));
    }
    Ok(())
}

/// Checks that `value` is finite (rejects NaN and ±∞).
pub fn ensure_finite(name: &str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::non_finite(name, value));
    }
    Ok(())
}
