//! Search command implementation.

use anyhow::{Context, Result};
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fs;
use std::path::Path;

use alsvid_grover::{Candidate, GroverSearch, SearchConfig, decode};

/// Machine-readable run report for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    config: &'a SearchConfig,
    solutions: &'a [Candidate],
    max_residual: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<&'a [u64]>,
}

/// Execute the search command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    input: Option<&Path>,
    weights: Option<&str>,
    target: Option<u64>,
    data_width: Option<u32>,
    iterations: usize,
    shots: Option<u64>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = match input {
        Some(path) => load_config(path)?,
        None => {
            let weights = parse_weights(weights.expect("clap enforces --weights"))?;
            let data_width = data_width.unwrap_or_else(|| default_data_width(&weights));
            SearchConfig::new(
                weights,
                data_width,
                target.expect("clap enforces --target"),
                iterations,
            )
        }
    };

    let search = GroverSearch::new(config)?;
    let config = search.config();

    if !json {
        println!(
            "{} Searching {} weights for sum {} ({}-bit register, {} rounds)",
            style("→").cyan().bold(),
            config.weights.len(),
            config.target,
            config.data_width,
            config.iterations
        );
    }

    let outcome = search.run()?;
    let solutions = decode(&outcome.distribution, &config.weights);

    let counts = match shots {
        Some(shots) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Some(search.run_sampled(&mut rng, shots)?)
        }
        None => None,
    };

    if json {
        let report = Report {
            config,
            solutions: &solutions,
            max_residual: outcome.max_residual,
            counts: counts.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_solutions(&solutions);
    if let Some(counts) = &counts {
        print_counts(counts, config.weights.len());
    }

    Ok(())
}

/// Load a scenario file.
fn load_config(path: &Path) -> Result<SearchConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read scenario file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("cannot parse scenario file {}", path.display()))
}

/// Parse a comma-separated weight list.
pub(crate) fn parse_weights(csv: &str) -> Result<Vec<u64>> {
    csv.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u64>()
                .with_context(|| format!("invalid weight '{part}'"))
        })
        .collect()
}

/// Smallest width that holds the total sum without wrapping.
pub(crate) fn default_data_width(weights: &[u64]) -> u32 {
    let max_sum: u64 = weights.iter().sum();
    (u64::BITS - max_sum.leading_zeros()).max(1)
}

fn print_solutions(solutions: &[Candidate]) {
    if solutions.is_empty() {
        println!("  no subset reaches a nonzero maximum probability");
        return;
    }
    for candidate in solutions {
        let set = candidate
            .weights
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {{{set}}}  {}",
            style(format!("p={:.4}", candidate.probability)).dim()
        );
    }
}

fn print_counts(counts: &[u64], pattern_width: usize) {
    let mut ranked: Vec<(usize, u64)> = counts
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, n)| *n > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    println!("  sampled counts:");
    for (pattern, count) in ranked.iter().take(8) {
        println!("    {pattern:0pattern_width$b}  {count}");
    }
}
