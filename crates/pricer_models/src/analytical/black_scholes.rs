//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes-Merton price of
//! European call and put options (no dividend yield).
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::PricingError;
use tracing::trace;

use crate::instruments::{OptionParameters, OptionType};

/// Output of the pricer: theoretical price plus the standardised scores.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let result = price(&params).unwrap();
///
/// assert!((result.price - 10.4506).abs() < 1e-4);
/// assert!((result.d1 - 0.35).abs() < 1e-12);
/// assert!((result.d2 - 0.15).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Theoretical option price
    pub price: f64,
    /// d₁ term
    pub d1: f64,
    /// d₂ term
    pub d2: f64,
}

/// Computes the d₁ and d₂ terms of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T
///
/// # Errors
/// `PricingError::InvalidParameter` if the parameters fail validation.
pub fn d1_d2(params: &OptionParameters) -> Result<(f64, f64), PricingError> {
    params.validate()?;
    Ok(d1_d2_unchecked(params))
}

/// d₁/d₂ for parameters already validated by the caller.
#[inline]
pub(crate) fn d1_d2_unchecked(params: &OptionParameters) -> (f64, f64) {
    let vol_sqrt_t = params.total_volatility();

    let log_moneyness = (params.spot / params.strike).ln();
    let drift =
        (params.risk_free_rate + 0.5 * params.volatility * params.volatility) * params.time_to_maturity;

    let d1 = (log_moneyness + drift) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price from precomputed d₁/d₂.
#[inline]
pub(crate) fn price_from_d(params: &OptionParameters, d1: f64, d2: f64) -> f64 {
    let discounted_strike = params.strike * params.discount_factor();

    match params.option_type {
        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        OptionType::Call => params.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        OptionType::Put => discounted_strike * norm_cdf(-d2) - params.spot * norm_cdf(-d1),
    }
}

/// Computes the European option price.
///
/// Validates the parameters first, so no NaN or infinity can leak out of
/// the formula.
///
/// # Errors
/// `PricingError::InvalidParameter` if spot, strike, time to maturity or
/// volatility is not strictly positive, or any field is not finite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let call = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let put = call.with_option_type(OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = price(&call).unwrap().price - price(&put).unwrap().price
///     - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
pub fn price(params: &OptionParameters) -> Result<PricingResult, PricingError> {
    params.validate()?;

    let (d1, d2) = d1_d2_unchecked(params);
    let price = price_from_d(params, d1, d2);

    trace!(
        option_type = %params.option_type,
        spot = params.spot,
        strike = params.strike,
        price,
        d1,
        d2,
        "priced option"
    );

    Ok(PricingResult { price, d1, d2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> OptionParameters {
        OptionParameters::new(spot, strike, expiry, rate, vol, option_type).unwrap()
    }

    // ==========================================================
    // Reference values
    // ==========================================================

    #[test]
    fn test_atm_call_reference() {
        let result = price(&params(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)).unwrap();
        assert_relative_eq!(result.price, 10.450583572185565, epsilon = 1e-10);
        assert_relative_eq!(result.d1, 0.35, epsilon = 1e-12);
        assert_relative_eq!(result.d2, 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_atm_put_reference() {
        let result = price(&params(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put)).unwrap();
        assert_relative_eq!(result.price, 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_six_month_put_reference() {
        let result = price(&params(200.0, 200.0, 0.5, 0.02, 0.2, OptionType::Put)).unwrap();
        assert_relative_eq!(result.price, 10.251274976745293, epsilon = 1e-10);
        assert_relative_eq!(result.d2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_matches_price_output() {
        let p = params(110.0, 95.0, 0.75, 0.03, 0.25, OptionType::Call);
        let (d1, d2) = d1_d2(&p).unwrap();
        let result = price(&p).unwrap();
        assert_eq!(d1, result.d1);
        assert_eq!(d2, result.d2);
        assert_relative_eq!(d1 - d2, 0.25 * 0.75_f64.sqrt(), epsilon = 1e-14);
    }

    // ==========================================================
    // Put-call parity
    // ==========================================================

    #[test]
    fn test_put_call_parity() {
        for &(spot, strike, expiry, rate, vol) in &[
            (100.0, 100.0, 1.0, 0.05, 0.2),
            (80.0, 120.0, 2.0, 0.01, 0.35),
            (150.0, 90.0, 0.25, -0.005, 0.15),
        ] {
            let call = params(spot, strike, expiry, rate, vol, OptionType::Call);
            let put = call.with_option_type(OptionType::Put);

            let lhs = price(&call).unwrap().price - price(&put).unwrap().price;
            let rhs = spot - strike * (-rate * expiry).exp();
            assert_relative_eq!(lhs, rhs, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    // ==========================================================
    // Limits
    // ==========================================================

    #[test]
    fn test_low_volatility_call_tends_to_discounted_intrinsic() {
        let p = params(100.0, 90.0, 1.0, 0.05, 1e-6, OptionType::Call);
        let expected = 100.0 - 90.0 * (-0.05_f64).exp();
        assert_relative_eq!(price(&p).unwrap().price, expected, epsilon = 1e-8);

        let otm = params(80.0, 100.0, 1.0, 0.05, 1e-6, OptionType::Call);
        assert!(price(&otm).unwrap().price.abs() < 1e-12);
    }

    #[test]
    fn test_short_expiry_tends_to_intrinsic() {
        let call = params(105.0, 100.0, 1e-8, 0.05, 0.2, OptionType::Call);
        assert_relative_eq!(price(&call).unwrap().price, 5.0, epsilon = 1e-6);

        let put = call.with_option_type(OptionType::Put);
        assert!(price(&put).unwrap().price.abs() < 1e-6);
    }

    #[test]
    fn test_deep_itm_call() {
        let p = params(200.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        let result = price(&p).unwrap();
        let lower_bound = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(result.price >= lower_bound - 1e-10);
    }

    // ==========================================================
    // Errors
    // ==========================================================

    #[test]
    fn test_zero_expiry_rejected() {
        let p = OptionParameters {
            time_to_maturity: 0.0,
            ..params(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
        };
        let err = price(&p).unwrap_err();
        assert_eq!(err.parameter(), "time_to_maturity");
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let p = OptionParameters {
            volatility: -0.1,
            ..params(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
        };
        assert!(matches!(
            price(&p),
            Err(PricingError::InvalidParameter { .. })
        ));
        assert!(d1_d2(&p).is_err());
    }

    #[test]
    fn test_out_of_range_combinations_rejected_not_nan() {
        let overflowing_discount = OptionParameters {
            risk_free_rate: -1000.0,
            ..params(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
        };
        assert_eq!(price(&overflowing_discount).unwrap_err().parameter(), "risk_free_rate");

        let vanishing_vol = OptionParameters {
            time_to_maturity: 1e-300,
            volatility: 1e-300,
            ..params(100.0, 100.0, 1.0, 0.0, 0.2, OptionType::Call)
        };
        assert_eq!(price(&vanishing_vol).unwrap_err().parameter(), "volatility");
        assert!(d1_d2(&vanishing_vol).is_err());
    }

    #[test]
    fn test_determinism() {
        let p = params(97.3, 101.2, 0.41, 0.031, 0.27, OptionType::Put);
        let a = price(&p).unwrap();
        let b = price(&p).unwrap();
        assert_eq!(a.price.to_bits(), b.price.to_bits());
        assert_eq!(a.d1.to_bits(), b.d1.to_bits());
        assert_eq!(a.d2.to_bits(), b.d2.to_bits());
    }
}
