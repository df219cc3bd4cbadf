// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

use fermion_encodings::{Encoding, Scheme, generate_encoding, reduce};
use ndarray::Array2;
use num_complex::Complex64;

fn dense_majoranas(encoding: &Encoding) -> Vec<Array2<Complex64>> {
    encoding
        .to_matrices()
        .iter()
        .map(|factors| reduce(factors).expect("encoding strings are not empty"))
        .collect()
}

fn injective_encodings(num_modes: usize) -> impl Iterator<Item = Encoding> {
    Scheme::ALL
        .into_iter()
        .filter(|scheme| scheme.is_injective())
        .map(move |scheme| generate_encoding(scheme, num_modes).expect("register is not empty"))
}

#[test]
fn majoranas_satisfy_the_clifford_algebra() {
    for num_modes in 1..=4 {
        for encoding in injective_encodings(num_modes) {
            let majoranas = dense_majoranas(&encoding);
            let dim = 1 << encoding.num_qubits();
            let identity = Array2::<Complex64>::eye(dim);
            for (a, gamma_a) in majoranas.iter().enumerate() {
                for (b, gamma_b) in majoranas.iter().enumerate() {
                    let anticommutator = gamma_a.dot(gamma_b) + gamma_b.dot(gamma_a);
                    let expected = if a == b {
                        identity.mapv(|entry| entry * 2.0)
                    } else {
                        Array2::zeros((dim, dim))
                    };
                    assert_eq!(
                        expected,
                        anticommutator,
                        "{} with {num_modes} modes, majoranas {a} and {b}",
                        encoding.scheme()
                    );
                }
            }
        }
    }
}

#[test]
fn majoranas_are_hermitian() {
    for encoding in injective_encodings(3) {
        for gamma in dense_majoranas(&encoding) {
            let adjoint = gamma.t().mapv(|entry| entry.conj());
            assert_eq!(adjoint, gamma, "{}", encoding.scheme());
        }
    }
}

#[test]
fn annihilation_operators_are_nilpotent() {
    let i = Complex64::new(0.0, 1.0);
    for encoding in injective_encodings(3) {
        let majoranas = dense_majoranas(&encoding);
        for pair in majoranas.chunks(2) {
            let annihilation = (&pair[0] + &pair[1].mapv(|entry| entry * i)).mapv(|entry| entry * 0.5);
            let square = annihilation.dot(&annihilation);
            assert!(
                square.iter().all(|entry| entry.norm() == 0.0),
                "{}",
                encoding.scheme()
            );
        }
    }
}

#[test]
fn symbolic_and_dense_anticommutation_agree() {
    for encoding in injective_encodings(4) {
        assert!(encoding.is_anticommuting(), "{}", encoding.scheme());
        let majoranas = encoding.majoranas();
        let product = majoranas[0]
            .multiply(&majoranas[1])
            .expect("strings have equal length");
        let dense = dense_majoranas(&encoding);
        assert_eq!(
            dense[0].dot(&dense[1]),
            product.to_dense().expect("strings are not empty"),
            "{}",
            encoding.scheme()
        );
    }
}
