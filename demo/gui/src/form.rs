//! Editable option parameter form.

use pricer_core::types::PricingError;
use pricer_models::prelude::{OptionParameters, OptionType};

use crate::config::FormDefaults;

/// Numeric inputs of the form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Spot price
    Spot,
    /// Strike price
    Strike,
    /// Time to maturity in years
    Maturity,
    /// Risk-free rate
    Rate,
    /// Volatility
    Volatility,
}

impl Field {
    /// All fields in focus order.
    pub const ALL: [Field; 5] = [
        Field::Spot,
        Field::Strike,
        Field::Maturity,
        Field::Rate,
        Field::Volatility,
    ];

    /// Label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spot => "Spot (S)",
            Self::Strike => "Strike (K)",
            Self::Maturity => "Maturity (years)",
            Self::Rate => "Risk-free rate (r)",
            Self::Volatility => "Volatility (σ)",
        }
    }

    /// Parameter name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Strike => "strike",
            Self::Maturity => "time_to_maturity",
            Self::Rate => "risk_free_rate",
            Self::Volatility => "volatility",
        }
    }
}

/// Text inputs plus the call/put toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct PricerForm {
    inputs: [String; 5],
    option_type: OptionType,
    focused: usize,
}

impl PricerForm {
    /// Form prefilled from configured defaults.
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            inputs: [
                defaults.spot.to_string(),
                defaults.strike.to_string(),
                defaults.maturity.to_string(),
                defaults.rate.to_string(),
                defaults.volatility.to_string(),
            ],
            option_type: defaults.option_type,
            focused: 0,
        }
    }

    /// Field with keyboard focus
    pub fn focused(&self) -> Field {
        Field::ALL[self.focused]
    }

    /// Raw text of a field
    pub fn input(&self, field: Field) -> &str {
        &self.inputs[Self::index(field)]
    }

    /// Selected option type
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % Field::ALL.len();
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + Field::ALL.len() - 1) % Field::ALL.len();
    }

    /// Switch between call and put.
    pub fn toggle_option_type(&mut self) {
        self.option_type = self.option_type.opposite();
    }

    /// Append a character to the focused field. Only characters that can
    /// appear in a decimal number are accepted.
    pub fn push_char(&mut self, c: char) -> bool {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.inputs[self.focused].push(c);
            true
        } else {
            false
        }
    }

    /// Delete the last character of the focused field.
    pub fn pop_char(&mut self) -> bool {
        self.inputs[self.focused].pop().is_some()
    }

    /// Parse and validate the form.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first field that is not a
    /// number, or the first violated parameter constraint.
    pub fn to_parameters(&self) -> Result<OptionParameters, PricingError> {
        let mut values = [0.0; 5];
        for (value, field) in values.iter_mut().zip(Field::ALL) {
            *value = self.parse(field)?;
        }
        let [spot, strike, maturity, rate, volatility] = values;

        OptionParameters::new(spot, strike, maturity, rate, volatility, self.option_type)
    }

    fn parse(&self, field: Field) -> Result<f64, PricingError> {
        let text = self.input(field).trim();
        text.parse::<f64>().map_err(|_| {
            PricingError::invalid_parameter(field.name(), f64::NAN, format!("'{text}' is not a number"))
        })
    }

    fn index(field: Field) -> usize {
        match field {
            Field::Spot => 0,
            Field::Strike => 1,
            Field::Maturity => 2,
            Field::Rate => 3,
            Field::Volatility => 4,
        }
    }
}
