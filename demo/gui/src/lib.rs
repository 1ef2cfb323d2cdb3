//! # Demo GUI
//!
//! Terminal dashboard for the Black-Scholes option pricer.
//!
//! Uses ratatui for rendering and crossterm for terminal handling.
//!
//! ### Pages
//! - **Home**: one card per registered project
//! - **Project**: the selected project page; the option pricer shows the
//!   parameter form, price and Greeks, the payoff diagram and a hedging
//!   case study

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod navigation;
pub mod projects;
pub mod registry;
pub mod screens;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{Dashboard, TuiApp};
    pub use crate::config::{ConfigError, DashboardConfig, FormDefaults};
    pub use crate::error::{DashboardError, Result};
    pub use crate::navigation::NavigationState;
    pub use crate::projects::OptionPricerProject;
    pub use crate::registry::{Project, ProjectRegistry};
}
