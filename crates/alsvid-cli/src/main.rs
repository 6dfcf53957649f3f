//! Alsvid command-line interface.
//!
//! Thin wrapper around `alsvid-grover`: parse a configuration, run the
//! amplified search, print the decoded subsets.

use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{demo, search};

/// Alsvid - quantum-style subset-sum search by amplitude amplification
#[derive(Parser)]
#[command(name = "alsvid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for subsets of a weight list summing to a target
    Search {
        /// Comma-separated weight list, e.g. 1,3,6,4,2
        #[arg(short, long, required_unless_present = "input")]
        weights: Option<String>,

        /// Target sum
        #[arg(short, long, required_unless_present = "input")]
        target: Option<u64>,

        /// Data register width in bits (default: wide enough for the total sum)
        #[arg(short, long)]
        data_width: Option<u32>,

        /// Number of amplification rounds
        #[arg(short, long, default_value = "7")]
        iterations: usize,

        /// JSON scenario file with weights/data_width/target/iterations
        #[arg(long, conflicts_with_all = ["weights", "target", "data_width"])]
        input: Option<PathBuf>,

        /// Also sample this many measurement shots
        #[arg(long)]
        shots: Option<u64>,

        /// RNG seed for sampling (random if omitted)
        #[arg(long, requires = "shots")]
        seed: Option<u64>,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in example scenarios
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Search {
            weights,
            target,
            data_width,
            iterations,
            input,
            shots,
            seed,
            json,
        } => search::execute(
            input.as_deref(),
            weights.as_deref(),
            target,
            data_width,
            iterations,
            shots,
            seed,
            json,
        ),

        Commands::Demo => demo::execute(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
