// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

//! Dense matrices for Pauli strings.
//!
//! The dense operator of a `k`-qubit string has `4^k` entries. This is meant
//! for checking small registers only and callers are expected to bound `k`
//! themselves.

#[cfg(test)]
mod tests;

use log::warn;
use ndarray::{Array2, array, linalg::kron};
use num_complex::Complex64;

use crate::{
    Error,
    pauli::{Pauli, Phased},
    pauli_string::PauliString,
};

/// Reducing more factors than this logs a warning.
pub const DENSE_WARNING_QUBITS: usize = 12;

#[must_use]
pub fn symbol_matrix(pauli: Pauli) -> Array2<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    let i = Complex64::new(0.0, 1.0);
    match pauli {
        Pauli::I => array![[one, zero], [zero, one]],
        Pauli::X => array![[zero, one], [one, zero]],
        Pauli::Y => array![[zero, -i], [i, zero]],
        Pauli::Z => array![[one, zero], [zero, -one]],
    }
}

impl PauliString {
    /// One 2×2 matrix per qubit, in qubit order.
    #[must_use]
    pub fn matrix_factors(&self) -> Vec<Array2<Complex64>> {
        self.iter().map(symbol_matrix).collect()
    }
}

/// The matrix factors of every string of an encoding.
#[must_use]
pub fn to_matrices(encoding: &[PauliString]) -> Vec<Vec<Array2<Complex64>>> {
    encoding.iter().map(PauliString::matrix_factors).collect()
}

/// Folds `factors` left to right with the Kronecker product, so the first
/// factor acts on the most significant qubit.
pub fn reduce(factors: &[Array2<Complex64>]) -> crate::Result<Array2<Complex64>> {
    let (first, rest) = factors.split_first().ok_or(Error::EmptyInput)?;
    if factors.len() > DENSE_WARNING_QUBITS {
        warn!(
            "building a dense {0}-qubit operator with 4^{0} entries",
            factors.len()
        );
    }
    Ok(rest.iter().fold(first.clone(), |acc, factor| kron(&acc, factor)))
}

/// The `2^k × 2^k` matrix of a `k`-qubit string.
pub fn dense_operator(pauli: &PauliString) -> crate::Result<Array2<Complex64>> {
    reduce(&pauli.matrix_factors())
}

impl Phased<PauliString> {
    /// The dense matrix of the string scaled by its phase.
    pub fn to_dense(&self) -> crate::Result<Array2<Complex64>> {
        let phase = self.phase().to_complex();
        Ok(dense_operator(self.value())?.mapv(|entry| entry * phase))
    }
}
