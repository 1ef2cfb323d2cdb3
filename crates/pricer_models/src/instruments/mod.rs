//! Instrument definitions.
//!
//! This module provides:
//! - [`OptionType`]: call/put discriminator with intrinsic payoff
//! - [`OptionParameters`]: validated inputs of a European option valuation

pub mod option_type;
pub mod params;

pub use option_type::OptionType;
pub use params::OptionParameters;
