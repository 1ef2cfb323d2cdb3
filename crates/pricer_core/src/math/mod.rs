//! Numerical building blocks shared by the pricing models.
//!
//! - `distributions`: standard normal CDF and PDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
