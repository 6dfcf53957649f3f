//! `alsvid-grover` — subset-sum search by amplitude amplification.
//!
//! Finds subsets of a fixed weight list summing to a target value
//! (modulo 2^width of the data register) with a Fourier-adder marking
//! oracle and Grover-style diffusion over a dense statevector:
//!
//! - [`SearchConfig`] — weights, data width, target, iteration count
//! - [`SumOracle`] — QFT adder → pattern-conditioned kickback flip → exact
//!   uncompute
//! - [`GroverSearch`] — superposition prep, oracle/diffusion rounds,
//!   address-marginal readout
//! - [`decode`] — maximal-probability patterns back to weight subsets
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_grover::{GroverSearch, SearchConfig, decode};
//!
//! // Which subsets of these weights sum to 6?
//! let config = SearchConfig::new(vec![1, 3, 6, 4, 2], 4, 6, 7);
//! let search = GroverSearch::new(config).unwrap();
//! let outcome = search.run().unwrap();
//!
//! let solutions = decode(&outcome.distribution, &search.config().weights);
//! assert!(solutions.iter().any(|c| c.weights == [6]));
//! assert!(solutions.iter().any(|c| c.weights == [4, 2]));
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod layout;
pub mod oracle;
pub mod search;

pub use config::SearchConfig;
pub use decode::{Candidate, PROB_TOLERANCE, decode};
pub use error::{SearchError, SearchResult};
pub use layout::Layout;
pub use oracle::SumOracle;
pub use search::{DRIFT_TOLERANCE, GroverSearch, SearchOutcome};
