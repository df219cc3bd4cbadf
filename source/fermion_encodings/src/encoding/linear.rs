// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

use crate::{pauli::Pauli, pauli_string::PauliString};

/// `symbol` on `qubit`, `background(k)` on every other qubit `k`.
fn place(
    num_qubits: usize,
    qubit: usize,
    symbol: Pauli,
    background: impl Fn(usize) -> Pauli,
) -> PauliString {
    (0..num_qubits)
        .map(|k| if k == qubit { symbol } else { background(k) })
        .collect()
}

fn z_if(condition: bool) -> Pauli {
    if condition { Pauli::Z } else { Pauli::I }
}

/// `Z…Z P I…I` with `P ∈ {X, Y}` on each qubit in turn.
pub(super) fn jordan_wigner(num_modes: usize) -> Vec<PauliString> {
    (0..num_modes)
        .flat_map(|qubit| {
            [Pauli::X, Pauli::Y].map(|symbol| place(num_modes, qubit, symbol, |k| z_if(k < qubit)))
        })
        .collect()
}

/// Jordan-Wigner with the parity string replaced by alternating `Z`s.
///
/// The strings of qubit `i` have `Z` on the qubits to the left at odd
/// distance from `i` and on the qubits to the right at even distance:
///
/// ```text
/// X I Z I Z I …
/// Z X I Z I Z …
/// I Z X I Z I …
/// Z I Z X I Z …
/// ```
pub(super) fn balanced_jordan_wigner(num_modes: usize) -> Vec<PauliString> {
    (0..num_modes)
        .flat_map(|qubit| {
            [Pauli::X, Pauli::Y].map(|symbol| {
                place(num_modes, qubit, symbol, |k| {
                    if k < qubit {
                        z_if((qubit - k) % 2 == 1)
                    } else {
                        z_if((k - qubit) % 2 == 0)
                    }
                })
            })
        })
        .collect()
}

/// For every pair of qubits `(2k, 2k + 1)`, a local X, Y or Z on one qubit
/// of the pair times a Jordan-Wigner Majorana of mode `k` on `⌈n/2⌉` extra
/// qubits appended after the register. The first qubit of the pair goes
/// with the X Majorana of mode `k`, the second with the Y Majorana.
///
/// Three local choices per Majorana means this is not one-to-one. An unpaired
/// last qubit gets no strings.
pub(super) fn one_local(num_modes: usize) -> Vec<PauliString> {
    let tail_len = num_modes.div_ceil(2);
    let num_qubits = num_modes + tail_len;
    let mut encoding = Vec::with_capacity(6 * (num_modes / 2));
    for pair in 0..num_modes / 2 {
        for (qubit, tail_symbol) in [(2 * pair, Pauli::X), (2 * pair + 1, Pauli::Y)] {
            for local in [Pauli::X, Pauli::Y, Pauli::Z] {
                encoding.push(
                    (0..num_qubits)
                        .map(|k| match k {
                            k if k == qubit => local,
                            k if k < num_modes => Pauli::I,
                            k if k - num_modes == pair => tail_symbol,
                            k => z_if(k - num_modes < pair),
                        })
                        .collect(),
                );
            }
        }
    }
    encoding
}
