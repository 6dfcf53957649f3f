//! Stateless gate constructors: single-qubit matrices and the Fourier pair.
//!
//! The quantum Fourier transform here follows the textbook circuit — a
//! Hadamard per qubit, a ladder of controlled phases with angle π/2^(j−i),
//! and a final qubit-order reversal — so `iqft` is the exact gate-by-gate
//! inverse of `qft` (reverse order, negated angles).
//!
//! For a qubit slice `[q₀ … q_{n−1}]` with `q₀` the most-significant bit,
//! `qft` maps |v⟩ ↦ 2^(−n/2) Σ_u e^(2πi·v·u/2^n) |u⟩.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::qubit::QubitId;
use crate::statevector::Statevector;

/// The Hadamard matrix.
pub fn h_matrix() -> [[Complex64; 2]; 2] {
    let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
    [
        [Complex64::new(sqrt2_inv, 0.0), Complex64::new(sqrt2_inv, 0.0)],
        [
            Complex64::new(sqrt2_inv, 0.0),
            Complex64::new(-sqrt2_inv, 0.0),
        ],
    ]
}

/// The Pauli-X matrix.
pub fn x_matrix() -> [[Complex64; 2]; 2] {
    [
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
    ]
}

/// The phase matrix diag(1, e^(iθ)).
pub fn phase_matrix(theta: f64) -> [[Complex64; 2]; 2] {
    [
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::from_polar(1.0, theta)],
    ]
}

/// Apply the quantum Fourier transform over `qubits` (first qubit = MSB).
pub fn qft(sv: &mut Statevector, qubits: &[QubitId]) {
    let n = qubits.len();
    for i in 0..n {
        sv.h(qubits[i]);
        for j in (i + 1)..n {
            let angle = PI / (1u64 << (j - i)) as f64;
            sv.cp(qubits[j], qubits[i], angle);
        }
    }
    // Bit reversal.
    for i in 0..n / 2 {
        sv.swap(qubits[i], qubits[n - 1 - i]);
    }
}

/// Apply the inverse quantum Fourier transform over `qubits`.
///
/// Gate-by-gate reverse of [`qft`]; composing the two in either order is
/// the identity to machine precision.
pub fn iqft(sv: &mut Statevector, qubits: &[QubitId]) {
    let n = qubits.len();
    for i in 0..n / 2 {
        sv.swap(qubits[i], qubits[n - 1 - i]);
    }
    for i in (0..n).rev() {
        for j in ((i + 1)..n).rev() {
            let angle = -PI / (1u64 << (j - i)) as f64;
            sv.cp(qubits[j], qubits[i], angle);
        }
        sv.h(qubits[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qubits(n: u32) -> Vec<QubitId> {
        (0..n).map(QubitId).collect()
    }

    #[test]
    fn test_qft_single_qubit_is_hadamard() {
        let mut a = Statevector::new(1).unwrap();
        let mut b = Statevector::new(1).unwrap();
        qft(&mut a, &qubits(1));
        b.h(QubitId(0));
        for i in 0..2 {
            assert!((a.amplitude(i) - b.amplitude(i)).norm() < 1e-12);
        }
    }

    #[test]
    fn test_qft_of_basis_state_has_flat_magnitudes() {
        // DFT of a basis state is a pure phase ramp: every magnitude 2^(-n/2).
        let mut sv = Statevector::new(3).unwrap();
        sv.x(QubitId(1));
        qft(&mut sv, &qubits(3));

        let expected = 1.0 / 8.0_f64.sqrt();
        for i in 0..8 {
            assert!((sv.amplitude(i).norm() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_qft_phase_convention() {
        // |v=1⟩ on 2 qubits (MSB first: q0 q1 = 01, index 0b10) transforms to
        // (1/2)(|0⟩ + i|1⟩ − |2⟩ − i|3⟩) in value order.
        let mut sv = Statevector::new(2).unwrap();
        sv.x(QubitId(1));
        qft(&mut sv, &qubits(2));

        let half = Complex64::new(0.5, 0.0);
        let value = |u: usize| sv.amplitude(((u & 1) << 1) | (u >> 1)); // value u → index
        assert!((value(0) - half).norm() < 1e-12);
        assert!((value(1) - Complex64::new(0.0, 0.5)).norm() < 1e-12);
        assert!((value(2) + half).norm() < 1e-12);
        assert!((value(3) - Complex64::new(0.0, -0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_qft_then_iqft_restores_basis_state() {
        let mut sv = Statevector::new(4).unwrap();
        sv.x(QubitId(0));
        sv.x(QubitId(2));
        qft(&mut sv, &qubits(4));
        iqft(&mut sv, &qubits(4));

        assert!((sv.amplitude(0b0101).norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_phase_matrix_on_generic_kernel() {
        let mut sv = Statevector::new(1).unwrap();
        sv.apply_single_qubit(QubitId(0), h_matrix());
        sv.apply_single_qubit(QubitId(0), phase_matrix(PI));
        sv.apply_single_qubit(QubitId(0), h_matrix());

        // HZH = X.
        assert!((sv.amplitude(1).norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_x_matrix_flips() {
        let mut sv = Statevector::new(1).unwrap();
        sv.apply_single_qubit(QubitId(0), x_matrix());
        assert!((sv.amplitude(1).norm() - 1.0).abs() < 1e-12);
    }
}
