//! Hedge command implementation
//!
//! Shows what a holder who sells the underlying at maturity receives when
//! protected by a long put, next to the unhedged proceeds.

use pricer_models::prelude::{price, HedgeOutcome, HedgeScenario, OptionParameters};
use serde::Serialize;
use tracing::{info, warn};

use super::{render, render_table};
use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Terminal spots used when none are given, as fractions of the strike.
const DEFAULT_SPOT_FRACTIONS: [f64; 3] = [0.75, 1.0, 1.25];

#[derive(Debug, Serialize)]
struct HedgeReport<'a> {
    parameters: &'a OptionParameters,
    premium: f64,
    floor: f64,
    outcomes: Vec<HedgeOutcome>,
}

/// Run the hedge command
pub fn run(params: &OptionParameters, spots: &[f64], format: OutputFormat) -> Result<String> {
    if let Some(bad) = spots.iter().find(|s| !(s.is_finite() && **s >= 0.0)) {
        return Err(CliError::InvalidArgument(format!(
            "spot at maturity must be a non-negative number, got {bad}"
        )));
    }
    if params.option_type.is_call() {
        warn!("Hedge scenario requires a put; rejecting call parameters");
    }

    let premium = price(params)?.price;
    let scenario = HedgeScenario::protective_put(params, premium)?;

    let spots: Vec<f64> = if spots.is_empty() {
        DEFAULT_SPOT_FRACTIONS
            .iter()
            .map(|f| f * params.strike)
            .collect()
    } else {
        spots.to_vec()
    };
    info!(strike = scenario.strike(), premium, count = spots.len(), "Evaluating hedge");

    let report = HedgeReport {
        parameters: params,
        premium,
        floor: scenario.floor(),
        outcomes: spots.iter().map(|&s| scenario.outcome(s)).collect(),
    };

    render(format, &report, || render_hedge_table(&report))
}

fn render_hedge_table(report: &HedgeReport<'_>) -> String {
    let mut sections = vec![render_table(
        "Protective put",
        &[
            ("Strike".to_string(), format!("{:.4}", report.parameters.strike)),
            ("Premium".to_string(), format!("{:.4}", report.premium)),
            ("Guaranteed floor".to_string(), format!("{:.4}", report.floor)),
        ],
    )];

    for outcome in &report.outcomes {
        sections.push(render_table(
            &format!("Spot at maturity {:.4}", outcome.spot_at_maturity),
            &[
                ("Market sale".to_string(), format!("{:.4}", outcome.market_sale)),
                ("Put payoff".to_string(), format!("{:.4}", outcome.option_payoff)),
                ("Premium paid".to_string(), format!("{:.4}", -outcome.premium)),
                ("Total received".to_string(), format!("{:.4}", outcome.total_received)),
                ("Unhedged".to_string(), format!("{:.4}", outcome.unhedged)),
                ("Hedge gain".to_string(), format!("{:.4}", outcome.hedge_gain())),
            ],
        ));
    }

    sections.join("\n")
}
