//! bsm - Command Line Black-Scholes Pricer
//!
//! Headless entry point for the European option pricer.
//!
//! # Commands
//!
//! - `bsm price` - Price, d1 and d2
//! - `bsm greeks` - Delta, Gamma and Theta
//! - `bsm payoff --points <n>` - Net profit curve at maturity and breakeven
//! - `bsm hedge --at <spot>...` - Protective put outcome at chosen spots
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only parses arguments, loads
//! configuration and formats output. All pricing lives in `pricer_models`.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::OptionArgs;
use config::{CliConfig, OutputFormat};

/// Black-Scholes European Option Pricer CLI
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "bsm.toml")]
    config: String,

    /// Output format (overrides the configuration file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option and show d1/d2
    Price {
        #[command(flatten)]
        option: OptionArgs,
    },

    /// Compute Delta, Gamma and Theta
    Greeks {
        #[command(flatten)]
        option: OptionArgs,
    },

    /// Net profit at maturity over 50%-150% of spot
    Payoff {
        #[command(flatten)]
        option: OptionArgs,

        /// Number of curve points (defaults to the configured value)
        #[arg(short, long)]
        points: Option<usize>,
    },

    /// Protective put outcome for a holder selling at maturity
    Hedge {
        #[command(flatten)]
        option: OptionArgs,

        /// Spot(s) at maturity to evaluate (defaults to 75%, 100% and 125% of strike)
        #[arg(long = "at", num_args = 1..)]
        at: Vec<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(Path::new(&cli.config))?.with_env_override();
    config.validate()?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };

    // Initialise tracing; logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(path = %cli.config, ?config, "Configuration loaded");

    let format = cli.format.unwrap_or(config.format);

    let output = match cli.command {
        Commands::Price { option } => commands::price::run(&option.to_parameters()?, format)?,
        Commands::Greeks { option } => {
            commands::greeks::run(&option.to_parameters()?, config.days_per_year, format)?
        }
        Commands::Payoff { option, points } => commands::payoff::run(
            &option.to_parameters()?,
            points.unwrap_or(config.payoff_points),
            format,
        )?,
        Commands::Hedge { option, at } => commands::hedge::run(&option.to_parameters()?, &at, format)?,
    };

    println!("{output}");
    Ok(())
}
