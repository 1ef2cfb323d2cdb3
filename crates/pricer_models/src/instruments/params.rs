//! Option parameters with validation.
//!
//! `OptionParameters` is the single input of every pricing operation. It is a
//! plain `Copy` value constructed per evaluation.

use pricer_core::types::error::{ensure_finite, ensure_positive};
use pricer_core::types::PricingError;

use super::option_type::OptionType;

/// Inputs of a vanilla European option valuation.
///
/// Fields are public so the value can be built literally, but every
/// operation re-checks the invariants through [`OptionParameters::validate`]
/// before touching a formula:
/// - `spot`, `strike`, `time_to_maturity`, `volatility` strictly positive
/// - every field finite (`risk_free_rate` may be zero or negative)
/// - σ√T strictly positive and σ²T finite after floating-point rounding
/// - the discounted strike K·e^(-rT) finite
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(params.strike, 100.0);
///
/// // Expiry must be strictly positive
/// assert!(OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Current price of the underlying (S)
    pub spot: f64,
    /// Exercise price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Annualised, continuously compounded risk-free rate (r)
    pub risk_free_rate: f64,
    /// Annualised volatility of log-returns (σ)
    pub volatility: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Creates validated option parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first field that violates
    /// its constraint, checked in declaration order.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every precondition of the pricing formulas.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_maturity", self.time_to_maturity)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        ensure_positive("volatility", self.volatility)?;

        // Representable inputs whose combinations still leave f64 range
        let total_volatility = self.total_volatility();
        if total_volatility <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                self.volatility,
                "volatility * sqrt(time_to_maturity) underflows to zero",
            ));
        }
        if !(self.volatility * total_volatility * self.time_to_maturity.sqrt()).is_finite() {
            return Err(PricingError::invalid_parameter(
                "volatility",
                self.volatility,
                "volatility^2 * time_to_maturity overflows",
            ));
        }
        if !(self.strike * self.discount_factor()).is_finite() {
            return Err(PricingError::invalid_parameter(
                "risk_free_rate",
                self.risk_free_rate,
                "discounted strike K * exp(-rT) overflows",
            ));
        }
        Ok(())
    }

    /// Same parameters with a different option type.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }

    /// σ√T, the standard deviation of the log-spot at maturity.
    #[inline]
    pub fn total_volatility(&self) -> f64 {
        self.volatility * self.time_to_maturity.sqrt()
    }
}
