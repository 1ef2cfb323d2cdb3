//! Dashboard TUI Entry Point

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use demo_gui::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Black-Scholes option pricer dashboard
#[derive(Parser)]
#[command(name = "bsm-dashboard")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "bsm-dashboard.toml")]
    config: PathBuf,

    /// Log file (overrides the configuration file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = DashboardConfig::load_or_default(&args.config)?.with_env_override();
    if let Some(log_file) = args.log_file {
        config.log_file = log_file;
    }
    config.validate()?;

    // The terminal belongs to the UI, so logs go to a file
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .init();

    // Create and run the TUI app
    let mut app = TuiApp::new(&config)?;
    app.run()?;

    Ok(())
}
