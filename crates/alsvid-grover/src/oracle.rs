//! Fourier-adder marking oracle.
//!
//! Marks (sign-flips, via the kickback ancilla) every basis state whose
//! selected weights sum to the target pattern modulo 2^width:
//!
//! 1. QFT on the data register — turns it into a phase accumulator.
//! 2. Per weight, a controlled-phase schedule from its address qubit onto
//!    every data qubit: base angle 2π·w/2^width on the least-significant
//!    bit, doubling toward the most-significant. Carries need no explicit
//!    logic; the Fourier representation absorbs them.
//! 3. Inverse QFT — the data register now holds the modular sum.
//! 4. Pattern-conditioned flip of the ancilla on data = target. With the
//!    ancilla in |−⟩ this lands as a −1 phase on matching states only.
//! 5. The same adder with negated angles, restoring data to |0…0⟩.
//!
//! Step 5 must mirror step 2's indexing exactly; any asymmetry leaves stray
//! amplitude on the data register and corrupts every later round. The
//! schedule is a set of mutually commuting diagonal phases, so running the
//! same loop with a sign factor is sufficient.

use std::f64::consts::TAU;

use alsvid_state::{Statevector, iqft, qft};

use crate::layout::Layout;

/// Marking oracle for one (weights, target, layout) triple.
///
/// Built once per run; applying it has no error paths. A target pattern
/// wider than the data register would silently mis-mark, so construction is
/// fed the already-reduced pattern from
/// [`SearchConfig::target_pattern`](crate::SearchConfig::target_pattern).
pub struct SumOracle {
    weights: Vec<u64>,
    target_pattern: u64,
    layout: Layout,
}

impl SumOracle {
    /// Create the oracle.
    pub fn new(weights: Vec<u64>, target_pattern: u64, layout: Layout) -> Self {
        debug_assert_eq!(weights.len(), layout.address_width());
        Self {
            weights,
            target_pattern,
            layout,
        }
    }

    /// Mark every address pattern whose weighted sum hits the target.
    ///
    /// Leaves all magnitudes over (address, data) unchanged; only the sign
    /// of marked states flips.
    pub fn apply(&self, sv: &mut Statevector) {
        let data = self.layout.data_qubits();

        qft(sv, &data);
        self.add_weighted_sum(sv, 1.0);
        iqft(sv, &data);

        sv.mcx(&data, self.target_pattern as usize, self.layout.ancilla());

        // Uncompute.
        qft(sv, &data);
        self.add_weighted_sum(sv, -1.0);
        iqft(sv, &data);
    }

    /// Probability mass left outside data = |0…0⟩.
    ///
    /// Should be ~0 after every application; anything above tolerance means
    /// the uncompute pass lost its angle/index symmetry.
    pub fn residual_data_mass(&self, sv: &Statevector) -> f64 {
        let probs = sv.probabilities(&self.layout.data_qubits());
        (1.0 - probs[0]).max(0.0)
    }

    /// Accumulate `sign`·Σ wᵢ (for set address bits) into the
    /// Fourier-transformed data register.
    fn add_weighted_sum(&self, sv: &mut Statevector, sign: f64) {
        let modulus = (1u64 << self.layout.data_width()) as f64;
        for (i, &weight) in self.weights.iter().enumerate() {
            let control = self.layout.address_qubit(i);
            let mut angle = sign * TAU * weight as f64 / modulus;
            // Least-significant data qubit first; angle doubles per step.
            for &data_qubit in self.layout.data_qubits().iter().rev() {
                sv.cp(control, data_qubit, angle);
                angle *= 2.0;
            }
        }
    }
}
