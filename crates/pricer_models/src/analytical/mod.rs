//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions:
//! - Black-Scholes price with d₁/d₂ (`black_scholes`)
//! - Analytical Greeks: Delta, Gamma, Theta (`greeks`)
//!
//! ## Design Principles
//!
//! - **Validate first**: every entry point checks `OptionParameters` before
//!   evaluating `ln`/`sqrt`, so invalid input never yields NaN
//! - **Stateless**: pure functions over `f64`, safe to call from any thread
//! - **Single d₁/d₂ pass**: `evaluate` shares the standardised scores between
//!   price and Greeks

pub mod black_scholes;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{d1_d2, price, PricingResult};
pub use greeks::{evaluate, greeks, GreeksResult, Valuation};
