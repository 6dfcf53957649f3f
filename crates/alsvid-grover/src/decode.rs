//! Decoding: from address-pattern probabilities back to weight subsets.

use serde::Serialize;

/// Absolute tolerance when comparing pattern probabilities to the maximum.
/// Equally-marked patterns agree to far better than this; genuinely
/// distinct probability levels differ by far more.
pub const PROB_TOLERANCE: f64 = 1e-9;

/// One maximal-probability address pattern and its selected weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Address-register bit pattern, most-significant qubit first.
    pub pattern: usize,
    /// Weights selected by the pattern's set bits.
    pub weights: Vec<u64>,
    /// The pattern's probability.
    pub probability: f64,
}

/// Map a probability distribution to the subsets of maximal probability.
///
/// Collects every pattern within [`PROB_TOLERANCE`] of the maximum, maps
/// set bits to their weights (address qubit `i` ↔ `weights[i]`), and drops
/// the all-zero pattern — the empty subset is never an answer. Pure and
/// idempotent; returns an empty collection when no pattern rises above
/// zero within tolerance.
pub fn decode(distribution: &[f64], weights: &[u64]) -> Vec<Candidate> {
    let k = weights.len();
    debug_assert_eq!(distribution.len(), 1 << k);

    let max = distribution.iter().cloned().fold(0.0, f64::max);
    if max <= PROB_TOLERANCE {
        return vec![];
    }

    let mut candidates = vec![];
    for (pattern, &probability) in distribution.iter().enumerate() {
        if pattern == 0 || max - probability > PROB_TOLERANCE {
            continue;
        }
        let selected = (0..k)
            .filter(|i| (pattern >> (k - 1 - i)) & 1 == 1)
            .map(|i| weights[i])
            .collect();
        candidates.push(Candidate {
            pattern,
            weights: selected,
            probability,
        });
    }
    candidates
}
