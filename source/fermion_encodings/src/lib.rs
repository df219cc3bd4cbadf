// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

//! Symbolic fermion-to-qubit encodings.
//!
//! Each encoding maps the `2n` Majorana operators of an `n`-mode fermionic
//! register onto Pauli strings. The crate also carries the Pauli algebra
//! needed to combine those strings and a dense-matrix elevation path for
//! checking small registers.

pub mod config;
pub mod encoding;
mod error;
pub mod matrix;
pub mod pauli;
pub mod pauli_string;
pub mod tree;

pub use config::EncodingConfig;
pub use encoding::{Encoding, Scheme, generate_encoding};
pub use error::Error;
pub use matrix::{reduce, symbol_matrix, to_matrices};
pub use pauli::{Pauli, Phase, Phased, multiply_symbols};
pub use pauli_string::{PauliString, multiply_strings};

pub type Result<T> = std::result::Result<T, Error>;
