//! Error types for the search crate.

use alsvid_state::StateError;
use thiserror::Error;

/// Errors produced when configuring or running a subset-sum search.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Weight list contains no entries.
    #[error("weight list is empty — nothing to search over")]
    EmptyWeights,

    /// Amplification must run at least one round.
    #[error("iteration count must be at least 1, got 0")]
    ZeroIterations,

    /// Data register cannot hold any sum.
    #[error("data register width must be at least 1 bit")]
    ZeroDataWidth,

    /// Combined registers exceed the dense-simulation bound.
    #[error("layout needs {qubits} qubits ({weights} address + {data_width} data + 1 ancilla), bound is {max}")]
    RegisterTooLarge {
        /// Total qubits the layout requires.
        qubits: usize,
        /// Number of weights (address qubits).
        weights: usize,
        /// Data register width.
        data_width: u32,
        /// Maximum supported qubit count.
        max: usize,
    },

    /// Statevector error.
    #[error("statevector error: {0}")]
    State(#[from] StateError),
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
