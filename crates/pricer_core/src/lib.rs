//! # pricer_core: Mathematical Foundation for the Black-Scholes Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - The shared error type: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: Complementary error function at full double precision
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_pdf};
//! use pricer_core::types::PricingError;
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! assert!(norm_pdf(0.0) > norm_pdf(1.0));
//!
//! let err = PricingError::non_positive("volatility", -0.1);
//! assert!(err.to_string().contains("volatility"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
