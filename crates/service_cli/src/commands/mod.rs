//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands return their
//! rendered output so they can be tested without capturing stdout.

pub mod greeks;
pub mod hedge;
pub mod payoff;
pub mod price;

use clap::Args;
use pricer_models::prelude::{OptionParameters, OptionType};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Option contract arguments shared by every command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct OptionArgs {
    /// Current price of the underlying
    #[arg(short, long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price
    #[arg(short = 'k', long, default_value_t = 100.0)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(short, long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.05, allow_hyphen_values = true)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(long, default_value_t = 0.2)]
    pub vol: f64,

    /// Option type (call or put)
    #[arg(short = 't', long = "type", default_value = "call")]
    pub option_type: OptionType,
}

impl OptionArgs {
    /// Build validated option parameters.
    pub fn to_parameters(&self) -> Result<OptionParameters> {
        Ok(OptionParameters::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.vol,
            self.option_type,
        )?)
    }
}

/// Render a serialisable report as pretty JSON.
pub(crate) fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render label/value rows as a two-column box table.
pub(crate) fn render_table(title: &str, rows: &[(String, String)]) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{mid}{}{right}",
            "─".repeat(label_width + 2),
            "─".repeat(value_width + 2)
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule("┌", "┬", "┐"));
    lines.push(format!(
        "│ {title:<label_width$} │ {:>value_width$} │",
        ""
    ));
    lines.push(rule("├", "┼", "┤"));
    for (label, value) in rows {
        lines.push(format!(
            "│ {label:<label_width$} │ {value:>value_width$} │"
        ));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

/// Dispatches to the table or JSON renderer.
pub(crate) fn render<T: Serialize>(
    format: OutputFormat,
    report: &T,
    table: impl FnOnce() -> String,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table()),
        OutputFormat::Json => to_json(report),
    }
}

#[cfg(test)]
pub(crate) fn atm_call_args() -> OptionArgs {
    OptionArgs {
        spot: 100.0,
        strike: 100.0,
        maturity: 1.0,
        rate: 0.05,
        vol: 0.2,
        option_type: OptionType::Call,
    }
}
