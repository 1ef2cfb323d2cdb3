//! Price command implementation
//!
//! Prices a single European option with the closed-form Black-Scholes model.

use pricer_models::prelude::{price, OptionParameters, PricingResult};
use serde::Serialize;
use tracing::info;

use super::{render, render_table};
use crate::config::OutputFormat;
use crate::Result;

#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    parameters: &'a OptionParameters,
    #[serde(flatten)]
    result: PricingResult,
}

/// Run the price command
pub fn run(params: &OptionParameters, format: OutputFormat) -> Result<String> {
    info!(option_type = %params.option_type, "Pricing option");

    let result = price(params)?;
    let report = PriceReport {
        parameters: params,
        result,
    };

    render(format, &report, || {
        render_table(
            &format!("European {}", params.option_type),
            &[
                ("Price".to_string(), format!("{:.4}", result.price)),
                ("d1".to_string(), format!("{:.4}", result.d1)),
                ("d2".to_string(), format!("{:.4}", result.d2)),
            ],
        )
    })
}
