// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

use super::{dense_operator, reduce, symbol_matrix, to_matrices};
use crate::{
    Error, Scheme, generate_encoding,
    pauli::{Pauli, Phase, Phased},
    pauli_string::PauliString,
};
use ndarray::{Array2, array, linalg::kron};
use num_complex::Complex64;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn single_symbol_round_trips_through_reduce() {
    for pauli in Pauli::ALL {
        let string = PauliString::from(vec![pauli]);
        let factors = to_matrices(std::slice::from_ref(&string));
        assert_eq!(1, factors.len());
        assert_eq!(Ok(symbol_matrix(pauli)), reduce(&factors[0]));
    }
}

#[test]
fn canonical_matrices() {
    assert_eq!(array![[c(0., 0.), c(0., -1.)], [c(0., 1.), c(0., 0.)]], symbol_matrix(Pauli::Y));
    assert_eq!(array![[c(1., 0.), c(0., 0.)], [c(0., 0.), c(-1., 0.)]], symbol_matrix(Pauli::Z));
}

#[test]
fn empty_factor_list_is_rejected() {
    assert_eq!(Err(Error::EmptyInput), reduce(&[]));
}

#[test]
fn leftmost_factor_is_most_significant() {
    let zx = dense_operator(&"ZX".parse().expect("valid Pauli string")).expect("not empty");
    let zero = c(0., 0.);
    let one = c(1., 0.);
    let expected = array![
        [zero, one, zero, zero],
        [one, zero, zero, zero],
        [zero, zero, zero, -one],
        [zero, zero, -one, zero],
    ];
    assert_eq!(expected, zx);
}

#[test]
fn reduce_matches_the_kronecker_product() {
    let y = symbol_matrix(Pauli::Y);
    let x = symbol_matrix(Pauli::X);
    let expected = kron(&y, &x);
    assert_eq!(Ok(expected), reduce(&[y, x]));
    let a = Array2::<Complex64>::eye(2);
    let b = Array2::<Complex64>::eye(4);
    assert_eq!(Ok(Array2::<Complex64>::eye(8)), reduce(&[a, b]));
}

#[test]
fn phased_string_scales_its_matrix() {
    let product = Phased::new(Phase::I, PauliString::from(vec![Pauli::Z]));
    let expected = array![[c(0., 1.), c(0., 0.)], [c(0., 0.), c(0., -1.)]];
    assert_eq!(Ok(expected), product.to_dense());
}

#[test]
fn symbolic_product_matches_matrix_product() {
    let a: PauliString = "XYZ".parse().expect("valid Pauli string");
    let b: PauliString = "YYX".parse().expect("valid Pauli string");
    let symbolic = a.multiply(&b).expect("lengths match").to_dense().expect("not empty");
    let dense = dense_operator(&a)
        .expect("not empty")
        .dot(&dense_operator(&b).expect("not empty"));
    assert_eq!(dense, symbolic);
}

#[test]
fn jordan_wigner_elevates_to_dense_operators() {
    let encoding = generate_encoding(Scheme::JordanWigner, 2).expect("register is not empty");
    let dense: Vec<_> = encoding
        .to_matrices()
        .iter()
        .map(|factors| reduce(factors).expect("not empty"))
        .collect();
    assert_eq!(4, dense.len());
    assert!(dense.iter().all(|m| m.dim() == (4, 4)));
    let x_i = kron(&symbol_matrix(Pauli::X), &symbol_matrix(Pauli::I));
    assert_eq!(x_i, dense[0]);
}
