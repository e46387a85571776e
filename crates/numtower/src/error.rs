//! Error types for the numtower crate.

use thiserror::Error;

use crate::kind::NumKind;

/// Errors raised by tower arithmetic and conversions.
///
/// Float and BigFloat edge cases (division by zero, NaN) are not errors;
/// they follow IEEE-754 / MPFR semantics and produce values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Exact (Integer, BigInteger or Rational) division with a zero divisor.
    #[error("Divide by zero")]
    DivideByZero,

    /// NaN or an infinity has no rational value.
    #[error("Cannot convert non-finite {from} to an exact rational")]
    NotFinite { from: NumKind },
}

/// Errors from loading or saving a [`crate::config::TowerConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
