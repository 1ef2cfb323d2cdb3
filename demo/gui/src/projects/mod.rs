//! Projects shipped with the dashboard.

pub mod option_pricer;

pub use option_pricer::{FarmerCase, OptionPricerProject, PricerOutput};
