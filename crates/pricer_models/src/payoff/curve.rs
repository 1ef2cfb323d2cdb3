//! Profit/loss at maturity over a range of terminal spots.
//!
//! The curve plots `intrinsic(s) - premium` for `s` evenly spaced over
//! `[0.5·S, 1.5·S]`, which is what the payoff chart draws.

use pricer_core::types::error::ensure_finite;
use pricer_core::types::PricingError;
use tracing::debug;

use crate::instruments::{OptionParameters, OptionType};

/// Lower edge of the spot grid, as a fraction of the current spot.
pub const SPOT_RANGE_LOW: f64 = 0.5;

/// Upper edge of the spot grid, as a fraction of the current spot.
pub const SPOT_RANGE_HIGH: f64 = 1.5;

/// One point of the payoff curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPoint {
    /// Terminal spot
    pub spot_at_maturity: f64,
    /// Intrinsic value minus premium paid
    pub net_profit: f64,
}

/// Generates the net-profit curve of a long option position.
///
/// Returns exactly `num_points` points with strictly increasing
/// `spot_at_maturity`; the first is `0.5·S` and the last `1.5·S`.
///
/// # Arguments
/// * `params` - Option parameters (only spot, strike and type are used)
/// * `price` - Premium paid for the option
/// * `num_points` - Number of grid points, at least 2
///
/// # Errors
/// `PricingError::InvalidParameter` if `num_points < 2`, `price` is not
/// finite, `params` fails validation, or the upper grid edge `1.5·S`
/// overflows.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParameters, OptionType};
/// use pricer_models::payoff::payoff_curve;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let curve = payoff_curve(&params, 10.45, 3).unwrap();
///
/// assert_eq!(curve[0].spot_at_maturity, 50.0);
/// assert_eq!(curve[1].spot_at_maturity, 100.0);
/// assert_eq!(curve[2].spot_at_maturity, 150.0);
/// assert!((curve[2].net_profit - 39.55).abs() < 1e-12);
/// ```
pub fn payoff_curve(
    params: &OptionParameters,
    price: f64,
    num_points: usize,
) -> Result<Vec<PayoffPoint>, PricingError> {
    if num_points < 2 {
        return Err(PricingError::too_few_points(num_points));
    }
    params.validate()?;
    ensure_finite("price", price)?;

    let low = params.spot * SPOT_RANGE_LOW;
    let high = params.spot * SPOT_RANGE_HIGH;
    if !high.is_finite() {
        return Err(PricingError::invalid_parameter(
            "spot",
            params.spot,
            "1.5 * spot overflows the payoff grid",
        ));
    }
    let last = num_points - 1;

    let curve: Vec<PayoffPoint> = (0..num_points)
        .map(|i| {
            let spot_at_maturity = if i == last {
                high
            } else {
                low + (high - low) * (i as f64 / last as f64)
            };
            PayoffPoint {
                spot_at_maturity,
                net_profit: params.option_type.intrinsic(spot_at_maturity, params.strike) - price,
            }
        })
        .collect();

    debug!(num_points, low, high, "generated payoff curve");
    Ok(curve)
}

/// Terminal spot at which the position breaks even.
///
/// - Call: K + premium
/// - Put: K - premium
///
/// Returns `None` when a put's premium is at least the strike, since no
/// positive spot then recovers the premium.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParameters, OptionType};
/// use pricer_models::payoff::breakeven;
///
/// let call = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(breakeven(&call, 10.0), Some(110.0));
/// assert_eq!(breakeven(&call.with_option_type(OptionType::Put), 10.0), Some(90.0));
/// ```
pub fn breakeven(params: &OptionParameters, premium: f64) -> Option<f64> {
    let level = match params.option_type {
        OptionType::Call => params.strike + premium,
        OptionType::Put => params.strike - premium,
    };
    (level > 0.0 && level.is_finite()).then_some(level)
}

/// Bounds of a payoff curve, used to scale the chart and shade the loss
/// and profit zones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffSummary {
    /// Smallest terminal spot on the curve
    pub min_spot: f64,
    /// Largest terminal spot on the curve
    pub max_spot: f64,
    /// Worst net profit (the maximum loss when negative)
    pub min_profit: f64,
    /// Best net profit on the plotted range
    pub max_profit: f64,
}

impl PayoffSummary {
    /// Summarises a curve. Returns `None` for an empty slice.
    pub fn from_curve(curve: &[PayoffPoint]) -> Option<Self> {
        let first = curve.first()?;
        let init = Self {
            min_spot: first.spot_at_maturity,
            max_spot: first.spot_at_maturity,
            min_profit: first.net_profit,
            max_profit: first.net_profit,
        };

        Some(curve.iter().fold(init, |acc, p| Self {
            min_spot: acc.min_spot.min(p.spot_at_maturity),
            max_spot: acc.max_spot.max(p.spot_at_maturity),
            min_profit: acc.min_profit.min(p.net_profit),
            max_profit: acc.max_profit.max(p.net_profit),
        }))
    }

    /// Whether part of the plotted range ends in a loss.
    pub fn has_loss_zone(&self) -> bool {
        self.min_profit < 0.0
    }

    /// Whether part of the plotted range ends in a profit.
    pub fn has_profit_zone(&self) -> bool {
        self.max_profit > 0.0
    }
}
