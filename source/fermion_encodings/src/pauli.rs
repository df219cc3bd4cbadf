// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.


use std::{
    fmt::{self, Display},
    ops::{Mul, MulAssign, Neg},
    str::FromStr,
};

use num_complex::Complex64;

use crate::Error;

/// Single qubit Pauli operator.
///
/// The discriminant is the symplectic `(z, x)` bit pair, so the symbol of a
/// product is the XOR of the discriminants of its factors.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Pauli {
    /// ```text
    /// |1 0|
    /// |0 1|
    /// ```
    #[default]
    I = 0b00,

    /// ```text
    /// |0 1|
    /// |1 0|
    /// ```
    X = 0b01,

    /// ```text
    /// |1  0|
    /// |0 -1|
    /// ```
    Z = 0b10,

    /// ```text
    /// |0 -i|
    /// |i  0|
    /// ```
    Y = 0b11,
}

impl Pauli {
    pub const ALL: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];

    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Pauli::I,
            0b01 => Pauli::X,
            0b10 => Pauli::Z,
            _ => Pauli::Y,
        }
    }

    /// Position in the cyclic order X → Y → Z → X.
    const fn cyclic_index(self) -> u8 {
        match self {
            Pauli::I | Pauli::X => 0,
            Pauli::Y => 1,
            Pauli::Z => 2,
        }
    }

    #[must_use]
    pub const fn is_identity(self) -> bool {
        matches!(self, Pauli::I)
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Multiplies `self · rhs`, keeping track of the phase.
    ///
    /// `X·Y = iZ`, `Y·Z = iX` and `Z·X = iY`; the reversed products pick up `-i`.
    pub fn multiply(self, rhs: Pauli) -> Phased<Pauli> {
        let symbol = Pauli::from_bits(self as u8 ^ rhs as u8);
        if self.is_identity() || rhs.is_identity() || self == rhs {
            return Phased::new(Phase::ONE, symbol);
        }
        let phase = if (rhs.cyclic_index() + 3 - self.cyclic_index()) % 3 == 1 {
            Phase::I
        } else {
            Phase::MINUS_I
        };
        Phased::new(phase, symbol)
    }

    #[must_use]
    pub fn commutes_with(self, rhs: Pauli) -> bool {
        self.is_identity() || rhs.is_identity() || self == rhs
    }
}

impl Mul for Pauli {
    type Output = Phased<Pauli>;

    fn mul(self, rhs: Pauli) -> Self::Output {
        self.multiply(rhs)
    }
}

impl TryFrom<char> for Pauli {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'I' | 'i' => Ok(Pauli::I),
            'X' | 'x' => Ok(Pauli::X),
            'Y' | 'y' => Ok(Pauli::Y),
            'Z' | 'z' => Ok(Pauli::Z),
            _ => Err(Error::InvalidSymbol(symbol)),
        }
    }
}

impl FromStr for Pauli {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Pauli::try_from(symbol),
            _ => Err(Error::NotASymbol(s.to_string())),
        }
    }
}

impl Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Multiplies two raw Pauli symbols.
pub fn multiply_symbols(lhs: char, rhs: char) -> crate::Result<Phased<Pauli>> {
    Ok(Pauli::try_from(lhs)?.multiply(Pauli::try_from(rhs)?))
}

/// A fourth root of unity, stored as the exponent of `i`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Phase {
    exponent: u8,
}

impl Phase {
    pub const ONE: Phase = Phase { exponent: 0 };
    pub const I: Phase = Phase { exponent: 1 };
    pub const MINUS_ONE: Phase = Phase { exponent: 2 };
    pub const MINUS_I: Phase = Phase { exponent: 3 };

    pub const ALL: [Phase; 4] = [Phase::ONE, Phase::I, Phase::MINUS_ONE, Phase::MINUS_I];

    #[must_use]
    pub const fn from_exponent(exponent: u8) -> Self {
        Phase {
            exponent: exponent % 4,
        }
    }

    /// The `k` in `i^k`, in `0..4`.
    #[must_use]
    pub const fn exponent(self) -> u8 {
        self.exponent
    }

    #[must_use]
    pub const fn is_real(self) -> bool {
        self.exponent & 1 == 0
    }

    #[must_use]
    pub const fn conj(self) -> Self {
        Phase::from_exponent(4 - self.exponent)
    }

    #[must_use]
    pub fn to_complex(self) -> Complex64 {
        match self.exponent {
            0 => Complex64::new(1.0, 0.0),
            1 => Complex64::new(0.0, 1.0),
            2 => Complex64::new(-1.0, 0.0),
            _ => Complex64::new(0.0, -1.0),
        }
    }

    /// Prefix used when printing a phased value, empty for `1`.
    fn prefix(self) -> &'static str {
        match self.exponent {
            0 => "",
            1 => "i",
            2 => "-",
            _ => "-i",
        }
    }
}

impl Mul for Phase {
    type Output = Phase;

    fn mul(self, rhs: Phase) -> Self::Output {
        Phase::from_exponent(self.exponent + rhs.exponent)
    }
}

impl MulAssign for Phase {
    fn mul_assign(&mut self, rhs: Phase) {
        *self = *self * rhs;
    }
}

impl Neg for Phase {
    type Output = Phase;

    fn neg(self) -> Self::Output {
        self * Phase::MINUS_ONE
    }
}

impl From<Phase> for Complex64 {
    fn from(phase: Phase) -> Self {
        phase.to_complex()
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self.exponent {
            0 => "1",
            1 => "i",
            2 => "-1",
            _ => "-i",
        };
        write!(f, "{s}")
    }
}

/// A product together with the phase accumulated while computing it.
#[must_use]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Phased<T> {
    phase: Phase,
    value: T,
}

impl<T> Phased<T> {
    pub const fn new(phase: Phase, value: T) -> Self {
        Phased { phase, value }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    #[must_use]
    pub fn into_parts(self) -> (Phase, T) {
        (self.phase, self.value)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Phased<U> {
        Phased::new(self.phase, f(self.value))
    }
}

impl<T: Display> Display for Phased<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.phase.prefix(), self.value)
    }
}
