//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Both are pure, stateless and reentrant, so they can be called from any
//! number of threads without synchronisation.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// Going through `erfc` rather than `1 + erf` keeps full relative precision in
/// the lower tail, where `Φ(x)` is tiny.
///
/// # Accuracy
/// Limited only by `statrs`' `erfc`, which is accurate to double precision.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-9);
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((norm_pdf(1.0) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1 for all x
        let test_values = [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_lower_tail_precision() {
        // Φ(-8) ≈ 6.22e-16; a 1 - erf formulation would round this to zero
        let tail = norm_cdf(-8.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 6.220960574271785e-16, max_relative = 1e-9);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        let cdf_10 = norm_cdf(10.0);
        assert!(cdf_10 > 0.9999999);
        assert!(cdf_10 <= 1.0);

        let cdf_neg_10 = norm_cdf(-10.0);
        assert!(cdf_neg_10 < 0.0000001);
        assert!(cdf_neg_10 >= 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0), 0.24197072451914337, epsilon = 1e-14);
        assert_relative_eq!(norm_pdf(2.0), 0.05399096651318806, epsilon = 1e-14);
        assert_relative_eq!(norm_pdf(3.0), 0.004431848411938008, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_pdf_approaches_zero() {
        assert!(norm_pdf(5.0) < 1e-5);
        assert!(norm_pdf(8.0) < 1e-12);
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    #[test]
    fn test_cdf_pdf_relationship() {
        // Central difference of Φ approximates φ
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-8);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_norm_cdf_in_unit_interval(x in -40.0f64..40.0) {
                let p = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&p));
            }

            #[test]
            fn test_norm_pdf_non_negative(x in -40.0f64..40.0) {
                prop_assert!(norm_pdf(x) >= 0.0);
                prop_assert!(norm_pdf(x) <= FRAC_1_SQRT_2PI);
            }
        }
    }
}
