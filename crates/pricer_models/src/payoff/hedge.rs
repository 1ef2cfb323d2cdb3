//! Protective put: holding the underlying plus a long put.
//!
//! A producer who will sell the underlying at maturity buys a put struck at
//! the price they want to lock in. Whatever the market does, the proceeds
//! never fall below `K - premium`.

use pricer_core::types::error::ensure_finite;
use pricer_core::types::PricingError;

use crate::instruments::{OptionParameters, OptionType};

/// Proceeds breakdown for one terminal spot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeOutcome {
    /// Terminal spot
    pub spot_at_maturity: f64,
    /// Proceeds from selling the underlying at the market
    pub market_sale: f64,
    /// Put payoff, max(K - s, 0)
    pub option_payoff: f64,
    /// Premium paid up front
    pub premium: f64,
    /// market_sale + option_payoff - premium
    pub total_received: f64,
    /// Proceeds without the hedge
    pub unhedged: f64,
}

impl HedgeOutcome {
    /// Hedged minus unhedged proceeds (negative when the put expires worthless).
    pub fn hedge_gain(&self) -> f64 {
        self.total_received - self.unhedged
    }
}

/// A holding protected by a long put.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{OptionParameters, OptionType};
/// use pricer_models::payoff::HedgeScenario;
///
/// let params = OptionParameters::new(200.0, 200.0, 0.5, 0.02, 0.2, OptionType::Put).unwrap();
/// let premium = price(&params).unwrap().price;
/// let hedge = HedgeScenario::protective_put(&params, premium).unwrap();
///
/// let crash = hedge.outcome(150.0);
/// assert!((crash.total_received - (150.0 + 50.0 - premium)).abs() < 1e-12);
///
/// let rally = hedge.outcome(250.0);
/// assert!((rally.total_received - (250.0 - premium)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeScenario {
    strike: f64,
    premium: f64,
}

impl HedgeScenario {
    /// Builds the scenario from put parameters and the premium paid.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `params` is invalid or describes a
    /// call, or the premium is not finite.
    pub fn protective_put(params: &OptionParameters, premium: f64) -> Result<Self, PricingError> {
        params.validate()?;
        ensure_finite("premium", premium)?;
        if params.option_type != OptionType::Put {
            return Err(PricingError::invalid_parameter(
                "option_type",
                f64::NAN,
                "a protective hedge needs a put",
            ));
        }

        Ok(Self {
            strike: params.strike,
            premium,
        })
    }

    /// Strike of the protecting put.
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Premium paid for the put.
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Guaranteed minimum proceeds, K - premium.
    pub fn floor(&self) -> f64 {
        self.strike - self.premium
    }

    /// Proceeds when the underlying ends at `spot_at_maturity`.
    pub fn outcome(&self, spot_at_maturity: f64) -> HedgeOutcome {
        let option_payoff = OptionType::Put.intrinsic(spot_at_maturity, self.strike);
        HedgeOutcome {
            spot_at_maturity,
            market_sale: spot_at_maturity,
            option_payoff,
            premium: self.premium,
            total_received: spot_at_maturity + option_payoff - self.premium,
            unhedged: spot_at_maturity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::price;
    use approx::assert_relative_eq;

    fn wheat_put() -> OptionParameters {
        OptionParameters::new(200.0, 200.0, 0.5, 0.02, 0.2, OptionType::Put).unwrap()
    }

    #[test]
    fn test_crash_scenario() {
        let premium = price(&wheat_put()).unwrap().price;
        let hedge = HedgeScenario::protective_put(&wheat_put(), premium).unwrap();

        let outcome = hedge.outcome(150.0);
        assert_eq!(outcome.market_sale, 150.0);
        assert_eq!(outcome.option_payoff, 50.0);
        assert_relative_eq!(outcome.total_received, 200.0 - premium, epsilon = 1e-12);
        assert!(outcome.hedge_gain() > 0.0);
    }

    #[test]
    fn test_rally_scenario() {
        let premium = price(&wheat_put()).unwrap().price;
        let hedge = HedgeScenario::protective_put(&wheat_put(), premium).unwrap();

        let outcome = hedge.outcome(250.0);
        assert_eq!(outcome.option_payoff, 0.0);
        assert_relative_eq!(outcome.total_received, 250.0 - premium, epsilon = 1e-12);
        assert_relative_eq!(outcome.hedge_gain(), -premium, epsilon = 1e-12);
    }

    #[test]
    fn test_floor_holds_below_strike() {
        let hedge = HedgeScenario::protective_put(&wheat_put(), 10.25).unwrap();
        for s in [1.0, 50.0, 120.0, 199.99] {
            assert_relative_eq!(hedge.outcome(s).total_received, hedge.floor(), epsilon = 1e-9);
        }
        assert!(hedge.outcome(260.0).total_received > hedge.floor());
    }

    #[test]
    fn test_call_rejected() {
        let call = wheat_put().with_option_type(OptionType::Call);
        let err = HedgeScenario::protective_put(&call, 5.0).unwrap_err();
        assert_eq!(err.parameter(), "option_type");
    }

    #[test]
    fn test_non_finite_premium_rejected() {
        let err = HedgeScenario::protective_put(&wheat_put(), f64::INFINITY).unwrap_err();
        assert_eq!(err.parameter(), "premium");
    }
}
