// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

//! Fermion-to-qubit encodings.
//!
//! An encoding of an `n`-mode register lists the images of its `2n` Majorana
//! operators. Entries `2j` and `2j + 1` are the two Majoranas of mode `j`.


mod linear;
mod trees;

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::debug;
use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::{Error, matrix, pauli_string::PauliString};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    JordanWigner,
    BravyiKitaev,
    TernaryTree,
    #[serde(alias = "serpinski-tree")]
    SierpinskiTree,
    BalancedJordanWigner,
    /// Not one-to-one: several strings describe each Majorana and the strings
    /// act on `n + ⌈n/2⌉` qubits.
    #[serde(rename = "1-local")]
    OneLocal,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::JordanWigner,
        Scheme::BravyiKitaev,
        Scheme::TernaryTree,
        Scheme::SierpinskiTree,
        Scheme::BalancedJordanWigner,
        Scheme::OneLocal,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Scheme::JordanWigner => "jordan-wigner",
            Scheme::BravyiKitaev => "bravyi-kitaev",
            Scheme::TernaryTree => "ternary-tree",
            Scheme::SierpinskiTree => "sierpinski-tree",
            Scheme::BalancedJordanWigner => "balanced-jordan-wigner",
            Scheme::OneLocal => "1-local",
        }
    }

    /// Length of the strings produced for a register of `num_modes` modes.
    #[must_use]
    pub const fn num_qubits(self, num_modes: usize) -> usize {
        match self {
            Scheme::OneLocal => num_modes + num_modes.div_ceil(2),
            _ => num_modes,
        }
    }

    /// Whether each Majorana has exactly one image.
    #[must_use]
    pub const fn is_injective(self) -> bool {
        !matches!(self, Scheme::OneLocal)
    }

    pub fn generate(self, num_modes: usize) -> crate::Result<Encoding> {
        generate_encoding(self, num_modes)
    }
}

impl FromStr for Scheme {
    type Err = Error;

    /// Accepts the canonical names in any case, with `_` or spaces in place
    /// of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        match normalized.as_str() {
            "jordan-wigner" => Ok(Scheme::JordanWigner),
            "bravyi-kitaev" => Ok(Scheme::BravyiKitaev),
            "ternary-tree" => Ok(Scheme::TernaryTree),
            "sierpinski-tree" | "serpinski-tree" => Ok(Scheme::SierpinskiTree),
            "balanced-jordan-wigner" => Ok(Scheme::BalancedJordanWigner),
            "1-local" | "one-local" => Ok(Scheme::OneLocal),
            _ => Err(Error::UnsupportedScheme(s.to_string())),
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The Majorana images of a fermionic register under one scheme.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoding {
    scheme: Scheme,
    num_modes: usize,
    num_qubits: usize,
    majoranas: Vec<PauliString>,
}

impl Encoding {
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[must_use]
    pub fn num_modes(&self) -> usize {
        self.num_modes
    }

    /// Length of every string in the encoding.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn majoranas(&self) -> &[PauliString] {
        &self.majoranas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.majoranas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.majoranas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PauliString> {
        self.majoranas.iter()
    }

    /// The two Majoranas of `mode`. Always `None` for schemes that are not
    /// injective, since their entries do not pair up by mode.
    #[must_use]
    pub fn majorana_pair(&self, mode: usize) -> Option<(&PauliString, &PauliString)> {
        if !self.scheme.is_injective() {
            return None;
        }
        Some((self.majoranas.get(2 * mode)?, self.majoranas.get(2 * mode + 1)?))
    }

    /// Largest number of qubits touched by a single Majorana.
    #[must_use]
    pub fn max_weight(&self) -> usize {
        self.majoranas
            .iter()
            .map(PauliString::weight)
            .max()
            .unwrap_or_default()
    }

    /// Whether every pair of distinct entries anticommutes, as Majorana
    /// operators must.
    #[must_use]
    pub fn is_anticommuting(&self) -> bool {
        self.majoranas.iter().enumerate().all(|(index, lhs)| {
            self.majoranas[index + 1..]
                .iter()
                .all(|rhs| matches!(lhs.commutes_with(rhs), Ok(false)))
        })
    }

    /// The 2×2 factors of every entry. See [`matrix::to_matrices`].
    #[must_use]
    pub fn to_matrices(&self) -> Vec<Vec<Array2<Complex64>>> {
        matrix::to_matrices(&self.majoranas)
    }
}

impl<'a> IntoIterator for &'a Encoding {
    type Item = &'a PauliString;
    type IntoIter = std::slice::Iter<'a, PauliString>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, majorana) in self.majoranas.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{majorana}")?;
        }
        Ok(())
    }
}

/// Builds the encoding of a `num_modes`-mode register under `scheme`.
pub fn generate_encoding(scheme: Scheme, num_modes: usize) -> crate::Result<Encoding> {
    if num_modes == 0 {
        return Err(Error::EmptyRegister);
    }
    let majoranas = match scheme {
        Scheme::JordanWigner => linear::jordan_wigner(num_modes),
        Scheme::BalancedJordanWigner => linear::balanced_jordan_wigner(num_modes),
        Scheme::OneLocal => linear::one_local(num_modes),
        Scheme::BravyiKitaev => trees::bravyi_kitaev(num_modes),
        Scheme::TernaryTree => trees::ternary_tree(num_modes),
        Scheme::SierpinskiTree => trees::sierpinski_tree(num_modes),
    };
    let num_qubits = scheme.num_qubits(num_modes);
    debug_assert!(majoranas.iter().all(|m| m.len() == num_qubits));
    debug!(
        "generated {scheme} encoding: {} strings over {num_qubits} qubits",
        majoranas.len()
    );
    Ok(Encoding {
        scheme,
        num_modes,
        num_qubits,
        majoranas,
    })
}
