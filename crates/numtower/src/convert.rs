//! Conversion protocol: every value can materialize as any of the five
//! canonical representations.
//!
//! The `Compatible` policy reproduces the historical rules, including the
//! lossy detours (BigInteger → Float through `i64`, BigFloat → Rational and
//! Rational → Integer/BigInteger/BigFloat through `f64`). The `Exact` policy
//! converts directly. Switching policy changes observable results.

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::big_float::BigFloat;
use crate::error::NumericError;
use crate::kind::NumKind;
use crate::number::Number;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionPolicy {
    /// Historical rules, lossy detours included.
    #[default]
    Compatible,
    /// Direct conversions without an `i64`/`f64` intermediate.
    Exact,
}

impl Number {
    pub fn to_integer(&self) -> i64 {
        self.to_integer_with(ConversionPolicy::default())
    }

    pub fn to_float(&self) -> f64 {
        self.to_float_with(ConversionPolicy::default())
    }

    pub fn to_big_integer(&self) -> BigInt {
        self.to_big_integer_with(ConversionPolicy::default())
    }

    pub fn to_big_float(&self) -> BigFloat {
        self.to_big_float_with(ConversionPolicy::default())
    }

    /// Fails only for a NaN or infinite Float/BigFloat.
    pub fn to_rational(&self) -> Result<BigRational, NumericError> {
        self.to_rational_with(ConversionPolicy::default())
    }

    pub fn to_integer_with(&self, policy: ConversionPolicy) -> i64 {
        match self {
            Number::Integer(i) => *i,
            // `as` truncates toward zero and saturates; NaN is 0.
            Number::Float(f) => *f as i64,
            Number::BigInteger(b) => wrap_to_i64(b),
            Number::BigFloat(b) => b.to_i64_trunc(),
            Number::Rational(r) => match policy {
                ConversionPolicy::Compatible => rational_to_f64(r) as i64,
                ConversionPolicy::Exact => wrap_to_i64(&r.to_integer()),
            },
        }
    }

    pub fn to_float_with(&self, policy: ConversionPolicy) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::BigInteger(b) => match policy {
                ConversionPolicy::Compatible => wrap_to_i64(b) as f64,
                ConversionPolicy::Exact => bigint_to_f64(b),
            },
            Number::BigFloat(b) => b.to_f64(),
            Number::Rational(r) => rational_to_f64(r),
        }
    }

    pub fn to_big_integer_with(&self, policy: ConversionPolicy) -> BigInt {
        match self {
            Number::Integer(i) => BigInt::from(*i),
            Number::Float(f) => match policy {
                ConversionPolicy::Compatible => BigInt::from(*f as i64),
                ConversionPolicy::Exact => BigInt::from_f64(f.trunc()).unwrap_or_default(),
            },
            Number::BigInteger(b) => b.clone(),
            Number::BigFloat(b) => b.to_bigint_trunc(),
            Number::Rational(r) => match policy {
                ConversionPolicy::Compatible => BigInt::from(rational_to_f64(r) as i64),
                ConversionPolicy::Exact => r.to_integer(),
            },
        }
    }

    pub fn to_big_float_with(&self, policy: ConversionPolicy) -> BigFloat {
        match self {
            Number::Integer(i) => BigFloat::from_i64(*i),
            Number::Float(f) => BigFloat::from_f64(*f),
            Number::BigInteger(b) => BigFloat::from_bigint(b),
            Number::BigFloat(b) => b.clone(),
            Number::Rational(r) => match policy {
                ConversionPolicy::Compatible => BigFloat::from_f64(rational_to_f64(r)),
                ConversionPolicy::Exact => BigFloat::from_rational(r),
            },
        }
    }

    pub fn to_rational_with(&self, policy: ConversionPolicy) -> Result<BigRational, NumericError> {
        match self {
            Number::Integer(i) => Ok(BigRational::from_integer(BigInt::from(*i))),
            Number::Float(f) => float_to_rational(*f, NumKind::Float),
            Number::BigInteger(b) => Ok(BigRational::from_integer(b.clone())),
            Number::BigFloat(b) => match policy {
                ConversionPolicy::Compatible => float_to_rational(b.to_f64(), NumKind::BigFloat),
                ConversionPolicy::Exact => b.to_rational_exact().ok_or(NumericError::NotFinite {
                    from: NumKind::BigFloat,
                }),
            },
            Number::Rational(r) => Ok(r.clone()),
        }
    }
}

/// Two's complement truncation to the low 64 bits.
pub(crate) fn wrap_to_i64(b: &BigInt) -> i64 {
    let (sign, digits) = b.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0) as i64;
    if sign == Sign::Minus {
        low.wrapping_neg()
    } else {
        low
    }
}

fn bigint_to_f64(b: &BigInt) -> f64 {
    b.to_f64().unwrap_or(if b.sign() == Sign::Minus {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}

/// Nearest double to the exact quotient.
fn rational_to_f64(r: &BigRational) -> f64 {
    r.to_f64()
        .unwrap_or_else(|| bigint_to_f64(r.numer()) / bigint_to_f64(r.denom()))
}

/// Exact binary value of a finite double.
fn float_to_rational(f: f64, from: NumKind) -> Result<BigRational, NumericError> {
    BigRational::from_float(f).ok_or(NumericError::NotFinite { from })
}
