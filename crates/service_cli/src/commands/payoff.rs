//! Payoff command implementation
//!
//! Prints the net profit at maturity of a long option position over
//! 50%-150% of the current spot, with the breakeven level.

use pricer_models::prelude::{
    breakeven, payoff_curve, price, OptionParameters, PayoffPoint, PayoffSummary,
};
use serde::Serialize;
use tracing::info;

use super::{render, render_table};
use crate::config::OutputFormat;
use crate::Result;

#[derive(Debug, Serialize)]
struct PayoffReport<'a> {
    parameters: &'a OptionParameters,
    premium: f64,
    breakeven: Option<f64>,
    summary: Option<PayoffSummary>,
    points: Vec<PayoffPoint>,
}

/// Run the payoff command
pub fn run(params: &OptionParameters, num_points: usize, format: OutputFormat) -> Result<String> {
    info!(option_type = %params.option_type, num_points, "Generating payoff curve");

    let premium = price(params)?.price;
    let points = payoff_curve(params, premium, num_points)?;
    let report = PayoffReport {
        parameters: params,
        premium,
        breakeven: breakeven(params, premium),
        summary: PayoffSummary::from_curve(&points),
        points,
    };

    render(format, &report, || render_payoff_table(&report))
}

fn render_payoff_table(report: &PayoffReport<'_>) -> String {
    let mut rows = vec![
        ("Premium".to_string(), format!("{:.4}", report.premium)),
        (
            "Breakeven".to_string(),
            report
                .breakeven
                .map_or_else(|| "n/a".to_string(), |b| format!("{b:.4}")),
        ),
    ];
    if let Some(summary) = report.summary {
        rows.push(("Worst net profit".to_string(), format!("{:.4}", summary.min_profit)));
        rows.push(("Best net profit".to_string(), format!("{:.4}", summary.max_profit)));
    }

    let summary = render_table(
        &format!("Long {} at maturity", report.parameters.option_type),
        &rows,
    );

    let curve_rows: Vec<(String, String)> = report
        .points
        .iter()
        .map(|p| {
            (
                format!("{:.4}", p.spot_at_maturity),
                format!("{:.4}", p.net_profit),
            )
        })
        .collect();
    let curve = render_table("Spot at maturity / Net profit", &curve_rows);

    format!("{summary}\n{curve}")
}
