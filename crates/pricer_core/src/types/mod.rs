//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error type for parameter validation
//!
//! # Re-exports
//!
//! - [`PricingError`] from `error`

pub mod error;

pub use error::PricingError;
