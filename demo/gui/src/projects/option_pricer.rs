//! Week 1 project: Black-Scholes option pricer.
//!
//! A parameter form, the price with d1/d2 and a plain-language reading,
//! Delta/Gamma/Theta, the payoff diagram at maturity, and the protective put
//! case study of a farmer hedging a harvest.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use pricer_core::types::PricingError;
use pricer_models::prelude::*;
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::form::{Field, PricerForm};
use crate::registry::Project;
use crate::screens::{format_elapsed, format_money};

/// Everything shown after a successful compute.
#[derive(Debug, Clone, PartialEq)]
pub struct PricerOutput {
    /// Parameters the results belong to
    pub params: OptionParameters,
    /// Price, d1/d2 and Greeks
    pub valuation: Valuation,
    /// Net profit at maturity
    pub curve: Vec<PayoffPoint>,
    /// Curve bounds
    pub summary: PayoffSummary,
    /// Spot at which the position breaks even
    pub breakeven: Option<f64>,
    /// Wall time of the computation
    pub elapsed: Duration,
}

impl PricerOutput {
    /// Price, Greeks and payoff curve for `params`.
    pub fn compute(params: &OptionParameters, payoff_points: usize) -> Result<Self, PricingError> {
        let started = Instant::now();

        let valuation = evaluate(params)?;
        let premium = valuation.pricing.price;
        let curve = payoff_curve(params, premium, payoff_points)?;
        let summary = PayoffSummary::from_curve(&curve)
            .ok_or_else(|| PricingError::too_few_points(curve.len()))?;

        Ok(Self {
            params: *params,
            valuation,
            breakeven: breakeven(params, premium),
            summary,
            curve,
            elapsed: started.elapsed(),
        })
    }

    /// One-sentence reading of the price.
    pub fn interpretation(&self) -> String {
        let right = match self.params.option_type {
            OptionType::Call => "buy",
            OptionType::Put => "sell",
        };
        format!(
            "For the right, but not the obligation, to {right} the underlying at {} in {} year(s) \
             while it trades at {} today, the market values this contract at {} today.",
            format_money(self.params.strike),
            self.params.time_to_maturity,
            format_money(self.params.spot),
            format_money(self.valuation.pricing.price),
        )
    }
}

/// The prudent farmer: a wheat producer buys a put to lock in a floor price
/// for a harvest sold in six months.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarmerCase {
    /// Put bought by the farmer
    pub params: OptionParameters,
    /// Hedge built from the put
    pub scenario: HedgeScenario,
    /// Outcome if wheat falls to [`FarmerCase::CRASH_SPOT`]
    pub crash: HedgeOutcome,
    /// Outcome if wheat rises to [`FarmerCase::RALLY_SPOT`]
    pub rally: HedgeOutcome,
}

impl FarmerCase {
    /// Wheat price at harvest in the bad case
    pub const CRASH_SPOT: f64 = 150.0;
    /// Wheat price at harvest in the good case
    pub const RALLY_SPOT: f64 = 250.0;

    /// Prices the put and evaluates both harvest outcomes.
    pub fn new() -> Result<Self, PricingError> {
        let params = OptionParameters::new(200.0, 200.0, 0.5, 0.02, 0.2, OptionType::Put)?;
        let premium = price(&params)?.price;
        let scenario = HedgeScenario::protective_put(&params, premium)?;

        Ok(Self {
            params,
            scenario,
            crash: scenario.outcome(Self::CRASH_SPOT),
            rally: scenario.outcome(Self::RALLY_SPOT),
        })
    }
}

/// The option pricer page.
pub struct OptionPricerProject {
    form: PricerForm,
    payoff_points: usize,
    days_per_year: f64,
    outcome: Option<Result<PricerOutput, PricingError>>,
    farmer: Result<FarmerCase, PricingError>,
}

impl OptionPricerProject {
    /// Page with the configured form defaults and curve resolution.
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            form: PricerForm::new(&config.defaults),
            payoff_points: config.payoff_points,
            days_per_year: config.days_per_year,
            outcome: None,
            farmer: FarmerCase::new(),
        }
    }

    /// Parameter form
    pub fn form(&self) -> &PricerForm {
        &self.form
    }

    /// Result of the last compute, if any
    pub fn outcome(&self) -> Option<&Result<PricerOutput, PricingError>> {
        self.outcome.as_ref()
    }

    /// Validate the form and run the pricer.
    pub fn compute(&mut self) {
        let result = self
            .form
            .to_parameters()
            .and_then(|params| PricerOutput::compute(&params, self.payoff_points));

        match &result {
            Ok(output) => info!(
                option_type = %output.params.option_type,
                price = output.valuation.pricing.price,
                elapsed_us = output.elapsed.as_micros() as u64,
                "option priced"
            ),
            Err(e) => warn!(error = %e, "rejected pricer input"),
        }
        self.outcome = Some(result);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Field::ALL
            .iter()
            .map(|&field| {
                let focused = field == self.form.focused();
                let marker = if focused {
                    Span::styled("> ", Style::default().fg(Color::Cyan))
                } else {
                    Span::raw("  ")
                };
                let value_style = if focused {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    marker,
                    Span::styled(format!("{:<20}", field.label()), Style::default().fg(Color::Yellow)),
                    Span::styled(self.form.input(field).to_string(), value_style),
                ])
            })
            .collect();

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<20}", "Option type"), Style::default().fg(Color::Yellow)),
            Span::styled(
                self.form.option_type().as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "  [Tab] field  [t] call/put  [Enter] compute",
            Style::default().fg(Color::DarkGray),
        )));

        let form = Paragraph::new(lines).block(
            Block::default()
                .title(" Parameters ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(form, area);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let lines = match &self.outcome {
            None => vec![Line::from(Span::styled(
                "Press Enter to compute the price.",
                Style::default().fg(Color::DarkGray),
            ))],
            Some(Err(e)) => vec![Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            ))],
            Some(Ok(output)) => vec![
                Line::from(vec![
                    Span::styled("Option price: ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format_money(output.valuation.pricing.price),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("d1: ", Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{:.4}", output.valuation.pricing.d1)),
                    Span::styled("   d2: ", Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{:.4}", output.valuation.pricing.d2)),
                ]),
                Line::from(vec![
                    Span::styled("Computed in ", Style::default().fg(Color::DarkGray)),
                    Span::styled(format_elapsed(output.elapsed), Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(""),
                Line::from(output.interpretation()),
            ],
        };

        let results = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Result ").borders(Borders::ALL));
        frame.render_widget(results, area);
    }

    fn draw_greeks(&self, frame: &mut Frame, area: Rect) {
        let lines = match &self.outcome {
            Some(Ok(output)) => {
                let greeks = output.valuation.greeks;
                vec![
                    Line::from(vec![
                        Span::styled("Delta (Δ):         ", Style::default().fg(Color::Yellow)),
                        Span::raw(format!("{:.4}", greeks.delta)),
                    ]),
                    Line::from(vec![
                        Span::styled("Gamma (Γ):         ", Style::default().fg(Color::Yellow)),
                        Span::raw(format!("{:.4}", greeks.gamma)),
                    ]),
                    Line::from(vec![
                        Span::styled("Theta (Θ) per year:", Style::default().fg(Color::Yellow)),
                        Span::raw(format!(" {:.4}", greeks.theta)),
                    ]),
                    Line::from(vec![
                        Span::styled("Theta per day:     ", Style::default().fg(Color::Yellow)),
                        Span::raw(format!(
                            "{:.4} (/{})",
                            greeks.theta_per_day(self.days_per_year),
                            self.days_per_year
                        )),
                    ]),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Breakeven:         ", Style::default().fg(Color::Yellow)),
                        Span::styled(
                            output
                                .breakeven
                                .map_or_else(|| "none".to_string(), format_money),
                            Style::default().fg(Color::Magenta),
                        ),
                    ]),
                ]
            }
            _ => vec![Line::from(Span::styled(
                "No sensitivities yet.",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let panel = Paragraph::new(lines)
            .block(Block::default().title(" Greeks ").borders(Borders::ALL));
        frame.render_widget(panel, area);
    }

    fn draw_payoff_chart(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);

        let Some(Ok(output)) = &self.outcome else {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                "The payoff diagram appears after a successful compute.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block.title(" Net profit at maturity "));
            frame.render_widget(placeholder, area);
            return;
        };

        let summary = output.summary;
        let (loss, profit): (Vec<PayoffPoint>, Vec<PayoffPoint>) =
            output.curve.iter().copied().partition(|p| p.net_profit < 0.0);
        let loss_data: Vec<(f64, f64)> = loss.iter().map(|p| (p.spot_at_maturity, p.net_profit)).collect();
        let profit_data: Vec<(f64, f64)> =
            profit.iter().map(|p| (p.spot_at_maturity, p.net_profit)).collect();

        let y_low = summary.min_profit.min(0.0);
        let y_high = summary.max_profit.max(0.0);
        let pad = ((y_high - y_low) * 0.05).max(1.0);
        let y_bounds = [y_low - pad, y_high + pad];
        let x_bounds = [summary.min_spot, summary.max_spot];

        let zero_line = [(x_bounds[0], 0.0), (x_bounds[1], 0.0)];
        let spot_marker = [(output.params.spot, y_bounds[0]), (output.params.spot, y_bounds[1])];

        let mut datasets = vec![
            Dataset::default()
                .name("zero")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::White))
                .data(&zero_line),
            Dataset::default()
                .name("current spot")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Magenta))
                .data(&spot_marker),
        ];
        if summary.has_loss_zone() {
            datasets.push(
                Dataset::default()
                    .name("loss")
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::Red))
                    .data(&loss_data),
            );
        }
        if summary.has_profit_zone() {
            datasets.push(
                Dataset::default()
                    .name("profit")
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::Green))
                    .data(&profit_data),
            );
        }

        let x_labels = vec![
            Span::raw(format_money(x_bounds[0])),
            Span::raw(format_money(output.params.spot)),
            Span::raw(format_money(x_bounds[1])),
        ];
        let y_labels = vec![
            Span::raw(format_money(y_bounds[0])),
            Span::raw("0"),
            Span::raw(format_money(y_bounds[1])),
        ];

        let chart = Chart::new(datasets)
            .block(block.title(format!(
                " Net profit at maturity (K = {}) ",
                format_money(output.params.strike)
            )))
            .x_axis(
                Axis::default()
                    .title("Spot at maturity")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("Profit / loss")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(y_bounds)
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    fn draw_farmer_case(&self, frame: &mut Frame, area: Rect) {
        let lines = match &self.farmer {
            Ok(case) => {
                let premium = case.scenario.premium();
                let outcome_line = |label: &str, o: &HedgeOutcome| {
                    Line::from(vec![
                        Span::styled(format!("{label} at {}: ", format_money(o.spot_at_maturity)), Style::default().fg(Color::Yellow)),
                        Span::raw(format!(
                            "sells {} + put {} - premium {} = ",
                            format_money(o.market_sale),
                            format_money(o.option_payoff),
                            format_money(o.premium)
                        )),
                        Span::styled(
                            format_money(o.total_received),
                            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" ({} unhedged)", format_money(o.unhedged)),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                };
                vec![
                    Line::from("A farmer fears the wheat price will fall before the harvest in 6 months."),
                    Line::from(format!(
                        "Put S = K = {}, T = {} y, r = {}%, σ = {}%: premium {} per tonne, floor {}.",
                        format_money(case.params.spot),
                        case.params.time_to_maturity,
                        case.params.risk_free_rate * 100.0,
                        case.params.volatility * 100.0,
                        format_money(premium),
                        format_money(case.scenario.floor()),
                    )),
                    outcome_line("Wheat", &case.crash),
                    outcome_line("Wheat", &case.rally),
                    Line::from(Span::styled(
                        format!(
                            "A little upside ({}) is given up to guarantee a minimum price.",
                            format_money(premium)
                        ),
                        Style::default().fg(Color::Cyan),
                    )),
                ]
            }
            Err(e) => vec![Line::from(Span::styled(e.to_string(), Style::default().fg(Color::Red)))],
        };

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Use case: the prudent farmer ").borders(Borders::ALL));
        frame.render_widget(panel, area);
    }
}

impl Project for OptionPricerProject {
    fn id(&self) -> &'static str {
        "p01_option_pricer"
    }

    fn title(&self) -> &'static str {
        "Week 1: Option Pricer"
    }

    fn icon(&self) -> &'static str {
        "📊"
    }

    fn description(&self) -> &'static str {
        "Black-Scholes model for European calls and puts."
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11), // Form, result, Greeks
                Constraint::Min(10),    // Payoff chart
                Constraint::Length(8),  // Farmer case
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(36),
                Constraint::Percentage(30),
            ])
            .split(rows[0]);

        self.draw_form(frame, top[0]);
        self.draw_results(frame, top[1]);
        self.draw_greeks(frame, top[2]);
        self.draw_payoff_chart(frame, rows[1]);
        self.draw_farmer_case(frame, rows[2]);
    }

    fn handle_key(&mut self, key: KeyCode) -> bool {
        let handled = match key {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                self.form.focus_next();
                true
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                self.form.focus_prev();
                true
            }
            KeyCode::Char('t') => {
                self.form.toggle_option_type();
                true
            }
            KeyCode::Enter => {
                self.compute();
                true
            }
            KeyCode::Backspace => {
                self.form.pop_char();
                true
            }
            KeyCode::Char(c) => self.form.push_char(c),
            _ => false,
        };

        if handled {
            debug!(?key, focused = ?self.form.focused(), "pricer form key");
        }
        handled
    }
}
