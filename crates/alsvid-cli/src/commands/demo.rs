//! Demo command: run the built-in example scenarios.

use anyhow::Result;
use console::style;

use alsvid_grover::{GroverSearch, SearchConfig, decode};

/// Execute the demo command.
pub fn execute() -> Result<()> {
    let scenarios = [
        SearchConfig::new(vec![1, 3, 6, 4, 2], 4, 6, 7),
        SearchConfig::new(vec![5, 7, 8, 9, 1], 5, 16, 7),
    ];

    for config in scenarios {
        println!(
            "{} weights {:?}, target {} ({}-bit register, {} rounds)",
            style("→").cyan().bold(),
            config.weights,
            config.target,
            config.data_width,
            config.iterations
        );

        let search = GroverSearch::new(config)?;
        let outcome = search.run()?;
        let solutions = decode(&outcome.distribution, &search.config().weights);

        if solutions.is_empty() {
            println!("  no subset reaches a nonzero maximum probability");
            continue;
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

    Ok(())
}
