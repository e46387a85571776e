//! The closed set of numeric values.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::big_float::BigFloat;
use crate::error::NumericError;
use crate::kind::NumKind;
use crate::ops::{NumOps, BIG_FLOAT_OPS, BIG_INTEGER_OPS, FLOAT_OPS, INTEGER_OPS, RATIONAL_OPS};

/// An immutable numeric value of one of the five kinds.
///
/// `PartialEq`/`PartialOrd` compare by value across kinds (`3 == 3.0`).
/// A NaN operand makes them unordered; [`crate::compare`] instead reports
/// such pairs as `Equal`.
#[derive(Debug, Clone)]
pub enum Number {
    Integer(i64),
    Float(f64),
    BigInteger(BigInt),
    BigFloat(BigFloat),
    /// Always reduced with a positive denominator (`BigRational` normalizes).
    Rational(BigRational),
}

impl Number {
    #[inline]
    pub fn kind(&self) -> NumKind {
        match self {
            Number::Integer(_) => NumKind::Integer,
            Number::Float(_) => NumKind::Float,
            Number::BigInteger(_) => NumKind::BigInteger,
            Number::BigFloat(_) => NumKind::BigFloat,
            Number::Rational(_) => NumKind::Rational,
        }
    }

    /// Reduced rational `num/den`.
    pub fn rational(
        num: impl Into<BigInt>,
        den: impl Into<BigInt>,
    ) -> Result<Number, NumericError> {
        let den = den.into();
        if den.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        Ok(Number::Rational(BigRational::new(num.into(), den)))
    }

    pub fn big_integer(value: impl Into<BigInt>) -> Number {
        Number::BigInteger(value.into())
    }

    pub fn big_float(prec: u32, value: f64) -> Number {
        Number::BigFloat(BigFloat::with_precision(prec, value))
    }

    /// Zero test in the value's own table; no promotion involved.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => INTEGER_OPS.is_zero(i),
            Number::Float(f) => FLOAT_OPS.is_zero(f),
            Number::BigInteger(b) => BIG_INTEGER_OPS.is_zero(b),
            Number::BigFloat(b) => BIG_FLOAT_OPS.is_zero(b),
            Number::Rational(r) => RATIONAL_OPS.is_zero(r),
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Number::Float(f) => f.is_nan(),
            Number::BigFloat(b) => b.is_nan(),
            _ => false,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::BigInteger(value)
    }
}

impl From<BigFloat> for Number {
    fn from(value: BigFloat) -> Self {
        Number::BigFloat(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Number::Rational(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(crate::compare(self, other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_constructor_reduces() {
        let n = Number::rational(4, -6).unwrap();
        match n {
            Number::Rational(r) => {
                assert_eq!(*r.numer(), BigInt::from(-2));
                assert_eq!(*r.denom(), BigInt::from(3));
            }
            other => panic!("expected rational, got {:?}", other),
        }
    }

    #[test]
    fn rational_constructor_rejects_zero_denominator() {
        assert_eq!(Number::rational(1, 0), Err(NumericError::DivideByZero));
    }

    #[test]
    fn value_equality_crosses_kinds() {
        assert_eq!(Number::Integer(3), Number::Float(3.0));
        assert_eq!(Number::rational(1, 2).unwrap(), Number::Float(0.5));
        assert!(Number::big_integer(2) > Number::Integer(1));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Number::Float(f64::NAN);
        assert_ne!(nan, nan.clone());
        assert_eq!(nan.partial_cmp(&Number::Integer(0)), None);
    }

    #[test]
    fn zero_test_per_kind() {
        assert!(Number::Float(-0.0).is_zero());
        assert!(!Number::Float(f64::NAN).is_zero());
        assert!(Number::big_integer(0).is_zero());
        assert!(Number::big_float(128, 0.0).is_zero());
        assert!(!Number::rational(1, 7).unwrap().is_zero());
    }
}
