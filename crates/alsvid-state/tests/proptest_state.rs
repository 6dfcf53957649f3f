//! Property-based tests for statevector unitarity and the Fourier pair.
//!
//! Verifies for arbitrary states that gate kernels preserve the norm and
//! that QFT followed by its inverse reproduces the input.

use alsvid_state::{QubitId, Statevector, iqft, qft};
use num_complex::Complex64;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

/// Generate an arbitrary normalized state on `num_qubits` qubits.
fn arb_state(num_qubits: usize) -> impl Strategy<Value = Statevector> {
    prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 1 << num_qubits).prop_filter_map(
        "state must have nonzero norm",
        |parts| {
            let norm_sqr: f64 = parts.iter().map(|(re, im)| re * re + im * im).sum();
            if norm_sqr < 1e-6 {
                return None;
            }
            let norm = norm_sqr.sqrt();
            let amplitudes = parts
                .into_iter()
                .map(|(re, im)| Complex64::new(re / norm, im / norm))
                .collect();
            Some(Statevector::from_amplitudes(amplitudes).expect("normalized by construction"))
        },
    )
}

/// A state together with the qubit count that shaped it.
fn arb_sized_state() -> impl Strategy<Value = (usize, Statevector)> {
    (1usize..=4).prop_flat_map(|n| (Just(n), arb_state(n)))
}

fn qubits(n: usize) -> Vec<QubitId> {
    (0..n as u32).map(QubitId).collect()
}

proptest! {
    /// Every gate kernel preserves the squared-magnitude sum.
    #[test]
    fn gates_preserve_norm((n, sv) in arb_sized_state(), theta in -10.0f64..10.0) {
        let mut sv = sv;
        sv.h(QubitId(0));
        prop_assert!((sv.norm_sqr() - 1.0).abs() < EPS);

        sv.x(QubitId(0));
        prop_assert!((sv.norm_sqr() - 1.0).abs() < EPS);

        if n >= 2 {
            sv.cp(QubitId(0), QubitId(1), theta);
            prop_assert!((sv.norm_sqr() - 1.0).abs() < EPS);

            sv.swap(QubitId(0), QubitId(1));
            prop_assert!((sv.norm_sqr() - 1.0).abs() < EPS);

            sv.mcx(&[QubitId(1)], 0b1, QubitId(0));
            prop_assert!((sv.norm_sqr() - 1.0).abs() < EPS);
        }
    }

    /// QFT then inverse QFT is the identity for arbitrary states.
    #[test]
    fn qft_iqft_roundtrip((n, sv) in arb_sized_state()) {
        let reference: Vec<Complex64> = (0..1 << n).map(|i| sv.amplitude(i)).collect();

        let mut sv = sv;
        qft(&mut sv, &qubits(n));
        iqft(&mut sv, &qubits(n));

        for (i, expected) in reference.iter().enumerate() {
            prop_assert!((sv.amplitude(i) - expected).norm() < EPS);
        }
    }

    /// The reverse composition (inverse first) is also the identity.
    #[test]
    fn iqft_qft_roundtrip((n, sv) in arb_sized_state()) {
        let reference: Vec<Complex64> = (0..1 << n).map(|i| sv.amplitude(i)).collect();

        let mut sv = sv;
        iqft(&mut sv, &qubits(n));
        qft(&mut sv, &qubits(n));

        for (i, expected) in reference.iter().enumerate() {
            prop_assert!((sv.amplitude(i) - expected).norm() < EPS);
        }
    }

    /// Marginal probabilities sum to 1 for any qubit subset.
    #[test]
    fn probabilities_sum_to_one((n, sv) in arb_sized_state(), subset_len in 1usize..=4) {
        let subset: Vec<QubitId> = qubits(n).into_iter().take(subset_len.min(n)).collect();
        let probs = sv.probabilities(&subset);
        prop_assert!((probs.iter().sum::<f64>() - 1.0).abs() < EPS);
    }
}
