//! Error types for the state crate.

use thiserror::Error;

/// Errors produced when constructing an amplitude register.
///
/// Gate kernels themselves have no error paths: an out-of-range qubit index
/// is a programmer error and fails fast by assertion.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StateError {
    /// Requested register exceeds the dense-simulation bound.
    #[error("{requested} qubits exceed the dense statevector bound of {max} (2^n amplitudes)")]
    TooManyQubits {
        /// The requested qubit count.
        requested: usize,
        /// Maximum supported qubit count.
        max: usize,
    },

    /// Amplitude vector length is not a power of two.
    #[error("amplitude vector of length {0} does not describe a whole number of qubits")]
    NonPowerOfTwoLength(usize),

    /// Amplitude vector is not normalized.
    #[error("amplitude vector has squared norm {0}, expected 1")]
    NotNormalized(f64),
}

/// Result type for state-vector operations.
pub type StateResult<T> = Result<T, StateError>;
