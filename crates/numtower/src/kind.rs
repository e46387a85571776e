//! Numeric kinds and the promotion lattice.
//!
//! The five kinds form a total order
//! `Integer < BigInteger < Rational < Float < BigFloat`. A mixed-kind
//! operation is governed by the higher-ranked kind of its two operands:
//! Integer defers to everything, BigFloat absorbs everything.

use std::fmt;

use crate::number::Number;

/// One of the five numeric representations.
///
/// Variant order is the promotion rank; the derived `Ord` is the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumKind {
    Integer,
    BigInteger,
    Rational,
    Float,
    BigFloat,
}

impl NumKind {
    /// All kinds, lowest rank first.
    pub const ALL: [NumKind; 5] = [
        NumKind::Integer,
        NumKind::BigInteger,
        NumKind::Rational,
        NumKind::Float,
        NumKind::BigFloat,
    ];

    /// Position in the promotion order (0 = Integer, 4 = BigFloat).
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Governing kind for a mixed-kind pair. Commutative.
    #[inline]
    pub fn combine(self, other: NumKind) -> NumKind {
        self.max(other)
    }

    pub fn name(self) -> &'static str {
        match self {
            NumKind::Integer => "Integer",
            NumKind::BigInteger => "BigInteger",
            NumKind::Rational => "Rational",
            NumKind::Float => "Float",
            NumKind::BigFloat => "BigFloat",
        }
    }
}

impl fmt::Display for NumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a value. The enum is closed, so there is no fallback kind.
#[inline]
pub fn classify(n: &Number) -> NumKind {
    n.kind()
}
