// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.


use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{
    Error,
    pauli::{Pauli, Phase, Phased},
};

/// A tensor product of single qubit Paulis. Position `k` acts on qubit `k`.
#[must_use]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PauliString {
    symbols: Vec<Pauli>,
}

impl PauliString {
    pub fn identity(num_qubits: usize) -> Self {
        PauliString {
            symbols: vec![Pauli::I; num_qubits],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn symbols(&self) -> &[Pauli] {
        &self.symbols
    }

    #[must_use]
    pub fn get(&self, qubit: usize) -> Option<Pauli> {
        self.symbols.get(qubit).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Pauli> + '_ {
        self.symbols.iter().copied()
    }

    /// Number of qubits acted on by a non-identity Pauli.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.symbols.iter().filter(|p| !p.is_identity()).count()
    }

    /// Qubits acted on by a non-identity Pauli, in increasing order.
    #[must_use]
    pub fn support(&self) -> Vec<usize> {
        self.symbols
            .iter()
            .enumerate()
            .filter_map(|(qubit, p)| (!p.is_identity()).then_some(qubit))
            .collect()
    }

    fn check_length(&self, rhs: &PauliString) -> crate::Result<()> {
        if self.len() == rhs.len() {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                left: self.len(),
                right: rhs.len(),
            })
        }
    }

    /// Site-by-site product `self · rhs`. The returned phase is the product
    /// of the phases picked up on every site.
    pub fn multiply(&self, rhs: &PauliString) -> crate::Result<Phased<PauliString>> {
        self.check_length(rhs)?;
        let mut phase = Phase::ONE;
        let symbols = self
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| {
                let (site_phase, symbol) = a.multiply(b).into_parts();
                phase *= site_phase;
                symbol
            })
            .collect();
        Ok(Phased::new(phase, PauliString { symbols }))
    }

    /// Two strings commute when they anticommute on an even number of sites.
    pub fn commutes_with(&self, rhs: &PauliString) -> crate::Result<bool> {
        self.check_length(rhs)?;
        let anticommuting_sites = self
            .iter()
            .zip(rhs.iter())
            .filter(|(a, b)| !a.commutes_with(*b))
            .count();
        Ok(anticommuting_sites % 2 == 0)
    }
}

/// Parses and multiplies two symbolic Pauli strings such as `"XY"` and `"YX"`.
pub fn multiply_strings(lhs: &str, rhs: &str) -> crate::Result<Phased<PauliString>> {
    let lhs: PauliString = lhs.parse()?;
    let rhs: PauliString = rhs.parse()?;
    lhs.multiply(&rhs)
}

impl Index<usize> for PauliString {
    type Output = Pauli;

    fn index(&self, qubit: usize) -> &Self::Output {
        &self.symbols[qubit]
    }
}

impl FromIterator<Pauli> for PauliString {
    fn from_iter<T: IntoIterator<Item = Pauli>>(iter: T) -> Self {
        PauliString {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Pauli>> for PauliString {
    fn from(symbols: Vec<Pauli>) -> Self {
        PauliString { symbols }
    }
}

impl FromStr for PauliString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Pauli::try_from).collect()
    }
}

impl Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl Phased<PauliString> {
    /// Site-by-site product of two phased strings, folding in both phases.
    pub fn multiply(&self, rhs: &Phased<PauliString>) -> crate::Result<Phased<PauliString>> {
        let product = self.value().multiply(rhs.value())?;
        let phase = self.phase() * rhs.phase() * product.phase();
        Ok(Phased::new(phase, product.into_value()))
    }
}
