//! Amplitude-amplification driver.
//!
//! Prepares the kickback ancilla and the uniform address superposition,
//! then alternates oracle marking with the diffusion reflection for a
//! configured number of rounds, and finally reads out the marginal
//! distribution over the address register. Deterministic for a given
//! configuration; no retries.

use rand::Rng;
use tracing::{debug, warn};

use alsvid_state::Statevector;

use crate::config::SearchConfig;
use crate::error::SearchResult;
use crate::layout::Layout;
use crate::oracle::SumOracle;

/// Residual data-register mass above this after an uncompute pass is
/// reported as numerical drift.
pub const DRIFT_TOLERANCE: f64 = 1e-9;

/// Result of one amplified run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Probability per address pattern (most-significant qubit first),
    /// summing to 1.
    pub distribution: Vec<f64>,
    /// Largest residual data-register mass seen after any oracle round.
    /// Values above [`DRIFT_TOLERANCE`] indicate an uncompute asymmetry.
    pub max_residual: f64,
}

/// Grover-style subset-sum search over a fixed weight list.
pub struct GroverSearch {
    config: SearchConfig,
    layout: Layout,
    oracle: SumOracle,
}

impl GroverSearch {
    /// Validate the configuration and build the oracle.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        config.validate()?;
        let layout = config.layout();
        let oracle = SumOracle::new(config.weights.clone(), config.target_pattern(), layout);
        Ok(Self {
            config,
            layout,
            oracle,
        })
    }

    /// The configuration this search was built from.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the configured number of amplification rounds.
    pub fn run(&self) -> SearchResult<SearchOutcome> {
        self.run_rounds(self.config.iterations)
    }

    /// Run an explicit number of rounds.
    ///
    /// `rounds = 0` skips amplification entirely and returns the uniform
    /// superposition's distribution — the baseline every amplified run is
    /// measured against.
    pub fn run_rounds(&self, rounds: usize) -> SearchResult<SearchOutcome> {
        let (sv, max_residual) = self.evolve(rounds)?;
        let distribution = sv.probabilities(&self.layout.address_qubits());
        debug!(
            rounds,
            max_residual,
            peak = distribution.iter().cloned().fold(0.0, f64::max),
            "amplification finished"
        );
        Ok(SearchOutcome {
            distribution,
            max_residual,
        })
    }

    /// Run the configured rounds, then sample `shots` measurement outcomes.
    ///
    /// Returns one count per address pattern. The distribution itself stays
    /// available through [`run`](Self::run); sampling is for shot-based
    /// output.
    pub fn run_sampled<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        shots: u64,
    ) -> SearchResult<Vec<u64>> {
        let (sv, _) = self.evolve(self.config.iterations)?;
        let mut counts = vec![0u64; 1 << self.layout.address_width()];
        for _ in 0..shots {
            let index = sv.sample(rng);
            counts[self.layout.address_pattern_of(index)] += 1;
        }
        Ok(counts)
    }

    fn evolve(&self, rounds: usize) -> SearchResult<(Statevector, f64)> {
        let mut sv = Statevector::new(self.layout.total_qubits())?;

        // Ancilla to |−⟩ so conditional flips kick back as −1 phases.
        let ancilla = self.layout.ancilla();
        sv.x(ancilla);
        sv.h(ancilla);

        // Uniform superposition over all address patterns.
        for q in self.layout.address_qubits() {
            sv.h(q);
        }

        let mut max_residual = 0.0f64;
        for round in 0..rounds {
            self.oracle.apply(&mut sv);
            let residual = self.oracle.residual_data_mass(&sv);
            if residual > DRIFT_TOLERANCE {
                warn!(
                    round,
                    residual, "data register not restored after oracle uncompute"
                );
            }
            max_residual = max_residual.max(residual);
            self.diffuse(&mut sv);
        }
        Ok((sv, max_residual))
    }

    /// Inversion about the mean over the address register.
    ///
    /// The reflection about the all-zero pattern reuses the kickback
    /// ancilla, so the same primitive that marks oracle hits also drives
    /// the diffusion (differing from the textbook form by a harmless global
    /// phase).
    fn diffuse(&self, sv: &mut Statevector) {
        let address = self.layout.address_qubits();
        for &q in &address {
            sv.h(q);
        }
        sv.mcx(&address, 0, self.layout.ancilla());
        for &q in &address {
            sv.h(q);
        }
    }
}
