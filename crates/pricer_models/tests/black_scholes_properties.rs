//! Property and scenario tests for the Black-Scholes pricer.
//!
//! # Test Categories
//!
//! 1. **Reference scenarios**: ATM call, six-month put, 100-point payoff curve
//! 2. **Properties**: put-call parity, Delta bounds, Gamma symmetry, determinism
//! 3. **Thread safety**: concurrent evaluation yields identical bits

use approx::assert_relative_eq;
use pricer_models::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_atm_call_scenario() {
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    let valuation = evaluate(&params).unwrap();

    assert_relative_eq!(valuation.pricing.price, 10.45, epsilon = 5e-3);
    assert_relative_eq!(valuation.greeks.delta, 0.6368, epsilon = 5e-5);
    assert_relative_eq!(valuation.greeks.gamma, 0.0188, epsilon = 5e-5);
    assert_relative_eq!(valuation.greeks.theta, -6.41, epsilon = 5e-3);
}

#[test]
fn test_six_month_put_scenario() {
    let params = OptionParameters::new(200.0, 200.0, 0.5, 0.02, 0.2, OptionType::Put).unwrap();
    let premium = price(&params).unwrap().price;
    assert_relative_eq!(premium, 10.2513, epsilon = 1e-4);

    let hedge = HedgeScenario::protective_put(&params, premium).unwrap();
    assert_relative_eq!(
        hedge.outcome(150.0).total_received,
        150.0 + (200.0 - 150.0) - premium,
        epsilon = 1e-12
    );
}

#[test]
fn test_payoff_curve_scenario() {
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    let premium = price(&params).unwrap().price;
    let curve = payoff_curve(&params, premium, 100).unwrap();

    assert_eq!(curve.len(), 100);
    assert_eq!(curve[0].spot_at_maturity, 50.0);
    assert_eq!(curve[99].spot_at_maturity, 150.0);
    assert_eq!(curve[0].net_profit, -premium);
    assert_relative_eq!(curve[99].net_profit, 50.0 - premium, epsilon = 1e-12);
}

#[test]
fn test_invalid_inputs() {
    let valid = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();

    let zero_expiry = OptionParameters {
        time_to_maturity: 0.0,
        ..valid
    };
    assert!(matches!(
        price(&zero_expiry),
        Err(PricingError::InvalidParameter { .. })
    ));

    let negative_vol = OptionParameters {
        volatility: -0.1,
        ..valid
    };
    assert!(matches!(
        greeks(&negative_vol),
        Err(PricingError::InvalidParameter { .. })
    ));
}

// ============================================================================
// Thread safety
// ============================================================================

#[test]
fn test_concurrent_evaluation_is_bit_identical() {
    let params = OptionParameters::new(97.0, 103.0, 0.6, 0.025, 0.31, OptionType::Put).unwrap();
    let expected = evaluate(&params).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| evaluate(&params).unwrap()))
            .collect();

        for handle in handles {
            let got = handle.join().expect("pricing thread panicked");
            assert_eq!(got.pricing.price.to_bits(), expected.pricing.price.to_bits());
            assert_eq!(got.greeks.theta.to_bits(), expected.greeks.theta.to_bits());
        }
    });
}

// ============================================================================
// Property-based tests
// ============================================================================

fn params_strategy() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        1.0f64..500.0,   // spot
        1.0f64..500.0,   // strike
        0.01f64..5.0,    // time to maturity
        -0.05f64..0.15,  // rate
        0.01f64..1.0,    // volatility
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_put_call_parity((spot, strike, expiry, rate, vol) in params_strategy()) {
        let call = OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let put = call.with_option_type(OptionType::Put);

        let lhs = price(&call).unwrap().price - price(&put).unwrap().price;
        let rhs = spot - strike * (-rate * expiry).exp();
        prop_assert!((lhs - rhs).abs() <= 1e-9 * (spot + strike));
    }

    #[test]
    fn prop_delta_bounds((spot, strike, expiry, rate, vol) in params_strategy()) {
        let call = OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let call_delta = greeks(&call).unwrap().delta;
        let put_delta = greeks(&call.with_option_type(OptionType::Put)).unwrap().delta;

        prop_assert!((0.0..=1.0).contains(&call_delta));
        prop_assert!((-1.0..=0.0).contains(&put_delta));
    }

    #[test]
    fn prop_gamma_symmetry((spot, strike, expiry, rate, vol) in params_strategy()) {
        let call = OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let call_gamma = greeks(&call).unwrap().gamma;
        let put_gamma = greeks(&call.with_option_type(OptionType::Put)).unwrap().gamma;

        prop_assert_eq!(call_gamma.to_bits(), put_gamma.to_bits());
        prop_assert!(call_gamma >= 0.0);
    }

    #[test]
    fn prop_price_non_negative_and_finite((spot, strike, expiry, rate, vol) in params_strategy()) {
        for option_type in [OptionType::Call, OptionType::Put] {
            let params = OptionParameters::new(spot, strike, expiry, rate, vol, option_type).unwrap();
            let result = price(&params).unwrap();
            prop_assert!(result.price.is_finite());
            prop_assert!(result.price >= -1e-9 * (spot + strike));
        }
    }

    #[test]
    fn prop_deterministic((spot, strike, expiry, rate, vol) in params_strategy()) {
        let params = OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Put).unwrap();
        prop_assert_eq!(evaluate(&params).unwrap(), evaluate(&params).unwrap());
    }

    #[test]
    fn prop_payoff_curve_monotone(
        (spot, strike, expiry, rate, vol) in params_strategy(),
        num_points in 2usize..400,
    ) {
        let params = OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let curve = payoff_curve(&params, 1.0, num_points).unwrap();

        prop_assert_eq!(curve.len(), num_points);
        for pair in curve.windows(2) {
            prop_assert!(pair[1].spot_at_maturity > pair[0].spot_at_maturity);
        }
    }
}
