//! Monte Carlo page-replacement fault analysis CLI.
//!
//! This binary is a single entry point for the experiment. It performs:
//! 1. **Default run:** With no arguments, runs the full reference experiment
//!    (1000 trials, working-set sizes 4-20) and prints the text report.
//! 2. **Configured run:** `--config` loads a JSON configuration; `--trials`
//!    and `--seed` override individual fields.
//! 3. **Machine output:** `--json` emits the fault table as JSON.

use clap::Parser;
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use faultsim_core::config::Config;
use faultsim_core::sim::Experiment;

#[derive(Parser, Debug)]
#[command(
    name = "faultsim",
    author,
    version,
    about = "Monte Carlo page-replacement fault analysis",
    long_about = "Estimates page faults produced by LRU, FIFO, and Clock replacement over \
synthetic reference traces, across a range of working-set sizes.\n\nWith no arguments the \
full reference experiment runs and the report is printed as\n  Working Set <k> - <POLICY> - <total_faults>\n\nExamples:\n  faultsim\n  faultsim --seed 42 --trials 100\n  faultsim --config sweep.json --json"
)]
struct Cli {
    /// JSON configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured number of Monte Carlo trials.
    #[arg(long)]
    trials: Option<u64>,

    /// Seed the trace generator for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the fault table as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = cli
        .config
        .as_deref()
        .map_or_else(Config::default, load_config);
    if let Some(trials) = cli.trials {
        config.experiment.trials = trials;
    }
    if let Some(seed) = cli.seed {
        config.experiment.seed = Some(seed);
    }

    let mut experiment = Experiment::from_config(config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1)
    });

    let table = experiment.run().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1)
    });

    if cli.json {
        let rendered = serde_json::to_string_pretty(&table).unwrap_or_else(|e| {
            eprintln!("Error serializing results: {e}");
            process::exit(1)
        });
        println!("{rendered}");
    } else {
        table.print();
    }
}

/// Loads and parses a JSON configuration file, exiting on failure.
fn load_config(path: &str) -> Config {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {path}: {e}");
        process::exit(1)
    });
    Config::from_json(&contents).unwrap_or_else(|e| {
        eprintln!("Error parsing config {path}: {e}");
        process::exit(1)
    })
}
