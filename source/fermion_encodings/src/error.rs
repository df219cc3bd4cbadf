// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Clone, Debug, Diagnostic, Eq, Error, PartialEq)]
pub enum Error {
    #[error("'{0}' is not a Pauli symbol")]
    #[diagnostic(code("Encodings.InvalidSymbol"))]
    #[diagnostic(help("Pauli symbols are I, X, Y and Z"))]
    InvalidSymbol(char),
    #[error("\"{0}\" is not a single Pauli symbol")]
    #[diagnostic(code("Encodings.NotASymbol"))]
    NotASymbol(String),
    #[error("cannot multiply Pauli strings of length {left} and {right}")]
    #[diagnostic(code("Encodings.LengthMismatch"))]
    LengthMismatch { left: usize, right: usize },
    #[error("cannot take the Kronecker product of an empty list of matrices")]
    #[diagnostic(code("Encodings.EmptyInput"))]
    EmptyInput,
    #[error("unsupported encoding scheme: {0}")]
    #[diagnostic(code("Encodings.UnsupportedScheme"))]
    #[diagnostic(help(
        "supported schemes are jordan-wigner, bravyi-kitaev, ternary-tree, sierpinski-tree, balanced-jordan-wigner and 1-local"
    ))]
    UnsupportedScheme(String),
    #[error("an encoding needs at least one qubit")]
    #[diagnostic(code("Encodings.EmptyRegister"))]
    EmptyRegister,
    #[error("invalid encoding configuration: {0}")]
    #[diagnostic(code("Encodings.InvalidConfig"))]
    InvalidConfig(String),
}
