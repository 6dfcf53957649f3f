//! `alsvid-state` — dense statevector amplitude register.
//!
//! Owns a normalized vector of 2^n complex amplitudes and applies unitary
//! operators to it in place:
//!
//! - index-mask kernels for single-qubit gates, controlled phases, swaps
//!   and pattern-conditioned multi-controlled flips
//! - the quantum Fourier transform pair over an arbitrary qubit slice
//! - marginal probability extraction over any qubit subset
//!
//! Basis-state indices read qubit 0 as the least-significant bit. Register
//! helpers that take a qubit *slice* treat the first listed qubit as the
//! most-significant bit of the resulting pattern.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_state::{QubitId, Statevector};
//!
//! // Bell pair: H then CNOT built from the pattern-conditioned flip.
//! let mut sv = Statevector::new(2).unwrap();
//! sv.h(QubitId(0));
//! sv.mcx(&[QubitId(0)], 0b1, QubitId(1));
//!
//! let probs = sv.probabilities(&[QubitId(0), QubitId(1)]);
//! assert!((probs[0b00] - 0.5).abs() < 1e-12);
//! assert!((probs[0b11] - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod gates;
pub mod qubit;
pub mod statevector;

pub use error::{StateError, StateResult};
pub use gates::{iqft, qft};
pub use qubit::QubitId;
pub use statevector::{MAX_QUBITS, Statevector};
