//! Run configuration: weights, register width, target and iteration count.

use alsvid_state::MAX_QUBITS;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{SearchError, SearchResult};
use crate::layout::Layout;

/// Everything that parameterizes one subset-sum search.
///
/// Sums accumulate modulo 2^`data_width`: a register narrower than the
/// maximum possible sum wraps instead of erroring, which turns the run into
/// a modular-sum search. `validate` flags that with a warning, not a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Candidate weights, one address qubit each.
    pub weights: Vec<u64>,
    /// Data register width in bits.
    pub data_width: u32,
    /// Desired subset sum (reduced modulo 2^`data_width` for matching).
    pub target: u64,
    /// Number of oracle + diffusion rounds.
    pub iterations: usize,
}

impl SearchConfig {
    /// Create a configuration.
    pub fn new(weights: Vec<u64>, data_width: u32, target: u64, iterations: usize) -> Self {
        Self {
            weights,
            data_width,
            target,
            iterations,
        }
    }

    /// The register layout this configuration implies.
    pub fn layout(&self) -> Layout {
        Layout::new(self.weights.len(), self.data_width)
    }

    /// The target reduced to the data register's width.
    pub fn target_pattern(&self) -> u64 {
        if self.data_width >= u64::BITS {
            self.target
        } else {
            self.target & ((1 << self.data_width) - 1)
        }
    }

    /// Check the configuration before any state is allocated.
    pub fn validate(&self) -> SearchResult<()> {
        if self.weights.is_empty() {
            return Err(SearchError::EmptyWeights);
        }
        if self.iterations == 0 {
            return Err(SearchError::ZeroIterations);
        }
        if self.data_width == 0 {
            return Err(SearchError::ZeroDataWidth);
        }
        let qubits = self.layout().total_qubits();
        if qubits > MAX_QUBITS {
            return Err(SearchError::RegisterTooLarge {
                qubits,
                weights: self.weights.len(),
                data_width: self.data_width,
                max: MAX_QUBITS,
            });
        }
        let max_sum: u64 = self.weights.iter().sum();
        if self.data_width < u64::BITS && max_sum >> self.data_width != 0 {
            warn!(
                max_sum,
                modulus = 1u64 << self.data_width,
                "data register narrower than the maximum sum — sums wrap"
            );
        }
        Ok(())
    }
}
