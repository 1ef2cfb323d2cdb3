//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form valuation of a single vanilla European option.
//!
//! This crate provides:
//! - Instrument inputs (`OptionType`, `OptionParameters`)
//! - Black-Scholes price with d₁/d₂
//! - Analytical Greeks (Delta, Gamma, annualised Theta)
//! - Payoff curves, breakeven and the protective-put hedge
//!
//! ## Design Principles
//!
//! - **Enum-based option type** instead of string discriminators
//! - **Pure functions**: no state, no I/O, `Send + Sync` value types
//! - **Fail before computing**: invalid input returns
//!   `PricingError::InvalidParameter`, never a NaN
//!
//! ## Usage
//!
//! ```rust
//! use pricer_models::prelude::*;
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)?;
//! let valuation = evaluate(&params)?;
//! let curve = payoff_curve(&params, valuation.pricing.price, 100)?;
//!
//! assert_eq!(curve.len(), 100);
//! assert!(valuation.greeks.delta > 0.5);
//! # Ok::<(), pricer_core::types::PricingError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod payoff;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::analytical::{
        d1_d2, evaluate, greeks, price, GreeksResult, PricingResult, Valuation,
    };
    pub use crate::instruments::{OptionParameters, OptionType};
    pub use crate::payoff::{
        breakeven, payoff_curve, HedgeOutcome, HedgeScenario, PayoffPoint, PayoffSummary,
    };
    pub use pricer_core::types::PricingError;
}
