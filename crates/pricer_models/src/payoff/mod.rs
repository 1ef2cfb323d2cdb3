//! Payoff analysis at maturity.
//!
//! This module provides:
//! - `curve`: net-profit curve over a spot range, breakeven and chart bounds
//! - `hedge`: protective-put proceeds for a holder of the underlying

pub mod curve;
pub mod hedge;

pub use curve::{breakeven, payoff_curve, PayoffPoint, PayoffSummary};
pub use hedge::{HedgeOutcome, HedgeScenario};
