//! Analytical Greeks for the Black-Scholes model.
//!
//! - Delta = ∂V/∂S: call N(d₁), put N(d₁) - 1
//! - Gamma = ∂²V/∂S²: φ(d₁) / (S·σ·√T), identical for calls and puts
//! - Theta = -∂V/∂T: -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂), plus r·K·e^(-rT) for puts
//!
//! Theta is quoted **per year**. Dashboards that label it as a daily decay
//! must convert explicitly with [`GreeksResult::theta_per_day`].

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::PricingError;
use tracing::trace;

use super::black_scholes::{d1_d2_unchecked, price_from_d, PricingResult};
use crate::instruments::{OptionParameters, OptionType};

/// First- and second-order sensitivities of the option price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// Annualised time decay, -∂V/∂T
    pub theta: f64,
}

impl GreeksResult {
    /// Theta expressed per day for a given day-count basis (365 or 252 are usual).
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::GreeksResult;
    ///
    /// let greeks = GreeksResult { delta: 0.5, gamma: 0.02, theta: -7.3 };
    /// assert!((greeks.theta_per_day(365.0) + 0.02).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn theta_per_day(&self, days_per_year: f64) -> f64 {
        self.theta / days_per_year
    }
}

/// Price and Greeks from a single d₁/d₂ evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    /// Price with d₁/d₂
    pub pricing: PricingResult,
    /// Sensitivities
    pub greeks: GreeksResult,
}

fn greeks_from_d(params: &OptionParameters, d1: f64, d2: f64) -> GreeksResult {
    let sqrt_t = params.time_to_maturity.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let cdf_d1 = norm_cdf(d1);
    let carry = params.risk_free_rate * params.strike * params.discount_factor();

    let gamma = pdf_d1 / (params.spot * params.volatility * sqrt_t);

    // Common term: -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)
    let base_theta =
        -(params.spot * pdf_d1 * params.volatility) / (2.0 * sqrt_t) - carry * norm_cdf(d2);

    let (delta, theta) = match params.option_type {
        OptionType::Call => (cdf_d1, base_theta),
        OptionType::Put => (cdf_d1 - 1.0, base_theta + carry),
    };

    GreeksResult { delta, gamma, theta }
}

/// Computes Delta, Gamma and Theta.
///
/// # Errors
/// Same preconditions as [`price`](super::black_scholes::price).
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks;
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let g = greeks(&params).unwrap();
///
/// assert!((g.delta - 0.6368).abs() < 1e-4);
/// assert!((g.gamma - 0.0188).abs() < 1e-4);
/// assert!((g.theta + 6.41).abs() < 1e-2);
/// ```
pub fn greeks(params: &OptionParameters) -> Result<GreeksResult, PricingError> {
    params.validate()?;

    let (d1, d2) = d1_d2_unchecked(params);
    let result = greeks_from_d(params, d1, d2);

    trace!(
        option_type = %params.option_type,
        delta = result.delta,
        gamma = result.gamma,
        theta = result.theta,
        "computed greeks"
    );

    Ok(result)
}

/// Computes price and Greeks together, sharing d₁/d₂.
///
/// Output is bit-identical to calling [`price`](super::black_scholes::price)
/// and [`greeks`] separately.
pub fn evaluate(params: &OptionParameters) -> Result<Valuation, PricingError> {
    params.validate()?;

    let (d1, d2) = d1_d2_unchecked(params);
    let pricing = PricingResult {
        price: price_from_d(params, d1, d2),
        d1,
        d2,
    };
    let greeks = greeks_from_d(params, d1, d2);

    Ok(Valuation { pricing, greeks })
}
