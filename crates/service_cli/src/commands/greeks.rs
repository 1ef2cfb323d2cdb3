//! Greeks command implementation

use pricer_models::prelude::{greeks, GreeksResult, OptionParameters};
use serde::Serialize;
use tracing::info;

use super::{render, render_table};
use crate::config::OutputFormat;
use crate::Result;

#[derive(Debug, Serialize)]
struct GreeksReport<'a> {
    parameters: &'a OptionParameters,
    #[serde(flatten)]
    greeks: GreeksResult,
    theta_per_day: f64,
    days_per_year: f64,
}

/// Run the greeks command
///
/// Theta is reported per year; `days_per_year` only drives the extra
/// per-day column.
pub fn run(params: &OptionParameters, days_per_year: f64, format: OutputFormat) -> Result<String> {
    info!(option_type = %params.option_type, days_per_year, "Computing Greeks");

    let result = greeks(params)?;
    let theta_per_day = result.theta_per_day(days_per_year);
    let report = GreeksReport {
        parameters: params,
        greeks: result,
        theta_per_day,
        days_per_year,
    };

    render(format, &report, || {
        render_table(
            &format!("Greeks ({})", params.option_type),
            &[
                ("Delta".to_string(), format!("{:.4}", result.delta)),
                ("Gamma".to_string(), format!("{:.4}", result.gamma)),
                ("Theta (per year)".to_string(), format!("{:.4}", result.theta)),
                (
                    format!("Theta (per day, /{days_per_year})"),
                    format!("{:.4}", theta_per_day),
                ),
            ],
        )
    })
}
