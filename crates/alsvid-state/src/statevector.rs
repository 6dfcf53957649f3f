//! Dense statevector amplitude register.

use num_complex::Complex64;
use rand::Rng;
use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::qubit::QubitId;

/// Dense-simulation bound: the amplitude vector grows as 2^n.
pub const MAX_QUBITS: usize = 24;

/// A normalized vector of 2^n complex amplitudes.
///
/// Every gate mutates the vector in place and preserves the squared-norm
/// invariant; probability extraction never mutates. Basis index bit `q` is
/// the state of qubit `q`.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> StateResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1 << num_qubits;
        debug!(num_qubits, size, "allocating statevector");
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Create a statevector from explicit amplitudes.
    ///
    /// The vector length must be a power of two and the squared norm must
    /// already be 1 within `1e-6`.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> StateResult<Self> {
        if amplitudes.is_empty() || !amplitudes.len().is_power_of_two() {
            return Err(StateError::NonPowerOfTwoLength(amplitudes.len()));
        }
        let num_qubits = amplitudes.len().trailing_zeros() as usize;
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let norm_sqr: f64 = amplitudes.iter().map(Complex64::norm_sqr).sum();
        if (norm_sqr - 1.0).abs() > 1e-6 {
            return Err(StateError::NotNormalized(norm_sqr));
        }
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the amplitude of a basis state.
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// Sum of squared magnitudes (1 within floating tolerance for any
    /// unitarily evolved state).
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    /// Apply an arbitrary 2×2 matrix to one qubit.
    ///
    /// Visits every basis-index pair differing only in `qubit`'s bit and
    /// replaces the amplitude pair by the matrix product. The matrix must be
    /// unitary; this is not checked outside debug builds.
    pub fn apply_single_qubit(&mut self, qubit: QubitId, matrix: [[Complex64; 2]; 2]) {
        let mask = self.qubit_mask(qubit);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = matrix[0][0] * a + matrix[0][1] * b;
                self.amplitudes[j] = matrix[1][0] * a + matrix[1][1] * b;
            }
        }
        #[cfg(debug_assertions)]
        {
            let norm_sqr = self.norm_sqr();
            debug_assert!(
                (norm_sqr - 1.0).abs() < 1e-6,
                "non-unitary matrix broke normalization: norm² = {norm_sqr}"
            );
        }
    }

    /// Apply a Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) {
        let mask = self.qubit_mask(qubit);
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    /// Apply a Pauli-X (bit flip) gate.
    pub fn x(&mut self, qubit: QubitId) {
        let mask = self.qubit_mask(qubit);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Apply a controlled phase: multiply by e^(iθ) where both bits are 1.
    pub fn cp(&mut self, control: QubitId, target: QubitId, theta: f64) {
        let ctrl_mask = self.qubit_mask(control);
        let tgt_mask = self.qubit_mask(target);
        debug_assert_ne!(ctrl_mask, tgt_mask, "control and target must differ");
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] *= phase;
            }
        }
    }

    /// Swap two qubits.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) {
        let mask1 = self.qubit_mask(q1);
        let mask2 = self.qubit_mask(q2);
        for i in 0..self.amplitudes.len() {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Apply a NOT on `target` conditioned on an arbitrary bit pattern over
    /// `controls`.
    ///
    /// `controls[0]` is matched against the most-significant bit of
    /// `pattern`; every control must match its 0/1 bit for the flip to fire.
    /// An all-ones pattern recovers the usual multi-controlled X.
    pub fn mcx(&mut self, controls: &[QubitId], pattern: usize, target: QubitId) {
        let width = controls.len();
        assert!(width > 0, "mcx requires at least one control");
        assert!(
            width >= usize::BITS as usize - pattern.leading_zeros() as usize,
            "pattern {pattern:#b} wider than {width} controls"
        );
        let tgt_mask = self.qubit_mask(target);
        let mut care = 0usize;
        let mut want = 0usize;
        for (pos, &q) in controls.iter().enumerate() {
            let mask = self.qubit_mask(q);
            debug_assert_eq!(care & mask, 0, "duplicate control {q}");
            care |= mask;
            if (pattern >> (width - 1 - pos)) & 1 == 1 {
                want |= mask;
            }
        }
        assert_eq!(care & tgt_mask, 0, "target {target} is also a control");
        for i in 0..self.amplitudes.len() {
            if (i & care == want) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Read-only extraction
    // =========================================================================

    /// Marginal probabilities over a qubit subset.
    ///
    /// Returns 2^k values indexed by the bit pattern over `qubits`, first
    /// listed qubit as the most-significant bit; each value sums the squared
    /// magnitudes of all amplitudes consistent with that pattern. Pure read.
    pub fn probabilities(&self, qubits: &[QubitId]) -> Vec<f64> {
        for &q in qubits {
            let _ = self.qubit_mask(q);
        }
        let mut probs = vec![0.0; 1 << qubits.len()];
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p == 0.0 {
                continue;
            }
            let mut pattern = 0usize;
            for &q in qubits {
                pattern = (pattern << 1) | ((i >> q.0) & 1);
            }
            probs[pattern] += p;
        }
        probs
    }

    /// Sample one measurement outcome over the full computational basis.
    ///
    /// Does not collapse the state; the caller owns the RNG.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        // Rounding can leave cumulative a hair under 1.
        self.amplitudes.len() - 1
    }

    fn qubit_mask(&self, qubit: QubitId) -> usize {
        assert!(
            (qubit.0 as usize) < self.num_qubits,
            "qubit {qubit} out of range for {} qubits",
            self.num_qubits
        );
        qubit.mask()
    }
}
