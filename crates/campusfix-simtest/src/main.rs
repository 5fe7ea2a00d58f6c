//! CampusFix Headless Simulation Harness
//!
//! Plays campus sessions without any front end and validates the simulation
//! rules end to end. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p campusfix-simtest -- validate
//!   cargo run -p campusfix-simtest -- --seed 7 run --days 5 --crews 2
//!   cargo run -p campusfix-simtest -- --config session.json run --json

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use campusfix_core::prelude::*;

mod triage;
mod validate;

#[derive(Parser)]
#[command(name = "campusfix-simtest")]
#[command(about = "Headless campus maintenance simulation harness", long_about = None)]
#[command(version)]
struct Cli {
    /// Session config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed, overrides the config file
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session with the triage policy and report the outcome
    Run {
        /// Simulated days to play
        #[arg(short, long, default_value_t = 5)]
        days: u32,

        /// Incidents a crew roster can resolve per hour
        #[arg(long, default_value_t = 1)]
        crews: usize,

        /// Print the final session snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the rule checks and exit non-zero on failure
    Validate,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let outcome = match load_config(&cli) {
        Ok(config) => match cli.command {
            Commands::Run { days, crews, json } => triage::run(config, days, crews, json, cli.verbose),
            Commands::Validate => validate::run(cli.verbose),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Read the config file if one was given, then apply flag overrides.
fn load_config(cli: &Cli) -> Result<SessionConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_path(path)?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}
