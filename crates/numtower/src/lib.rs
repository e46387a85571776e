//! Numeric tower for a dynamically-typed runtime.
//!
//! Five closed numeric kinds (Integer, Float, BigInteger, BigFloat, Rational)
//! with arithmetic and comparison that promote mixed operands to the
//! governing kind `max(rank(a), rank(b))` over
//! `Integer < BigInteger < Rational < Float < BigFloat`.
//!
//! ```ignore
//! use numtower::{add, divide, Number, NumKind};
//!
//! let half = Number::rational(1, 2)?;
//! assert_eq!(add(&Number::Integer(2), &half)?.kind(), NumKind::Rational);
//! assert_eq!(divide(&Number::Integer(1), &Number::Integer(3))?.kind(), NumKind::Rational);
//! ```
//!
//! The free functions run under the default [`TowerConfig`]; build a
//! [`Tower`] for other conversion or overflow policies.

pub mod big_float;
pub mod config;
pub mod convert;
pub mod error;
pub mod kind;
pub mod number;
pub mod ops;
pub mod tower;

use std::cmp::Ordering;

pub use big_float::BigFloat;
pub use config::{OverflowPolicy, TowerConfig};
pub use convert::ConversionPolicy;
pub use error::{ConfigError, NumericError};
pub use kind::{classify, NumKind};
pub use number::Number;
pub use ops::NumOps;
pub use tower::Tower;

pub fn add(x: &Number, y: &Number) -> Result<Number, NumericError> {
    Tower::default().add(x, y)
}

pub fn subtract(x: &Number, y: &Number) -> Result<Number, NumericError> {
    Tower::default().subtract(x, y)
}

pub fn multiply(x: &Number, y: &Number) -> Result<Number, NumericError> {
    Tower::default().multiply(x, y)
}

pub fn divide(x: &Number, y: &Number) -> Result<Number, NumericError> {
    Tower::default().divide(x, y)
}

pub fn is_zero(x: &Number) -> bool {
    x.is_zero()
}

pub fn lt(x: &Number, y: &Number) -> bool {
    Tower::default().lt(x, y)
}

pub fn lte(x: &Number, y: &Number) -> bool {
    Tower::default().lte(x, y)
}

pub fn gt(x: &Number, y: &Number) -> bool {
    Tower::default().gt(x, y)
}

pub fn gte(x: &Number, y: &Number) -> bool {
    Tower::default().gte(x, y)
}

/// Order by value across kinds: `compare(3, 3.0)` is `Equal`. NaN is
/// `Equal` to everything, so sort with [`sort_numbers`] rather than this.
pub fn compare(x: &Number, y: &Number) -> Ordering {
    Tower::default().compare(x, y)
}

/// Stable sort by value; NaNs go last.
pub fn sort_numbers(values: &mut [Number]) {
    Tower::default().sort(values)
}
