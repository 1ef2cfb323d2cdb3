//! Option type (call or put) and its intrinsic payoff.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Right conveyed by a vanilla European option.
///
/// # Variants
/// - `Call`: right to buy at the strike, payoff max(S - K, 0)
/// - `Put`: right to sell at the strike, payoff max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Intrinsic value at maturity for the given spot and strike.
    #[inline]
    pub fn intrinsic(&self, spot_at_maturity: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot_at_maturity - strike).max(0.0),
            OptionType::Put => (strike - spot_at_maturity).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Returns the other leg (call ↔ put).
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Lowercase identifier, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid_parameter(
                "option_type",
                f64::NAN,
                format!("unknown option type '{}', expected call or put", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Call.intrinsic(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_put_intrinsic() {
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_predicates_and_opposite() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
        assert_eq!(OptionType::Call.opposite(), OptionType::Put);
        assert_eq!(OptionType::Put.opposite(), OptionType::Call);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" Put ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "binary".parse::<OptionType>().unwrap_err();
        assert_eq!(err.parameter(), "option_type");
        assert!(err.to_string().contains("binary"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for ty in [OptionType::Call, OptionType::Put] {
            assert_eq!(ty.to_string().parse::<OptionType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_default_is_call() {
        assert_eq!(OptionType::default(), OptionType::Call);
    }
}
