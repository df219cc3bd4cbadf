// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

use crate::{
    pauli::Pauli,
    pauli_string::PauliString,
    tree::{FenwickTree, Leg, TernaryTree},
};

/// `γ₂ⱼ = X_U(j) X_j Z_P(j)` and `γ₂ⱼ₊₁ = X_U(j) Y_j Z_R(j)`, with the update,
/// parity and remainder sets read off the Fenwick tree.
pub(super) fn bravyi_kitaev(num_modes: usize) -> Vec<PauliString> {
    let tree = FenwickTree::new(num_modes);
    (0..num_modes)
        .flat_map(|mode| {
            let update_set = tree.update_set(mode);
            [
                (Pauli::X, tree.parity_set(mode)),
                (Pauli::Y, tree.remainder_set(mode)),
            ]
            .map(|(symbol, z_set)| {
                let mut symbols = vec![Pauli::I; num_modes];
                for &qubit in &update_set {
                    symbols[qubit] = Pauli::X;
                }
                for qubit in z_set {
                    symbols[qubit] = Pauli::Z;
                }
                symbols[mode] = symbol;
                PauliString::from(symbols)
            })
        })
        .collect()
}

pub(super) fn ternary_tree(num_modes: usize) -> Vec<PauliString> {
    from_ternary_tree(&TernaryTree::complete(num_modes))
}

pub(super) fn sierpinski_tree(num_modes: usize) -> Vec<PauliString> {
    from_ternary_tree(&TernaryTree::sierpinski(num_modes))
}

/// Mode `j` gets the two paths that leave node `j` through its X and Y legs.
fn from_ternary_tree(tree: &TernaryTree) -> Vec<PauliString> {
    let num_qubits = tree.len();
    (0..num_qubits)
        .flat_map(|node| {
            [Leg::X, Leg::Y].map(|leg| {
                let mut symbols = vec![Pauli::I; num_qubits];
                for (qubit, symbol) in tree.majorana_path(node, leg) {
                    symbols[qubit] = symbol;
                }
                PauliString::from(symbols)
            })
        })
        .collect()
}
