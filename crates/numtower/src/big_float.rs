//! Arbitrary-precision binary float backed by MPFR (`rug::Float`).
//!
//! Each value carries its own precision in bits. Arithmetic results take the
//! larger precision of the two operands, so mixing a 53-bit value lifted from
//! a double with a wide value never narrows the wide one.

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{One, Zero};
use rug::float::{self, Round};
use rug::integer::Order;
use rug::Float;

/// Precision of a value lifted from an `f64`.
pub const DOUBLE_PRECISION: u32 = 53;
/// Minimum precision of a value lifted from an integer.
pub const INTEGER_PRECISION: u32 = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct BigFloat(Float);

impl BigFloat {
    /// `value` rounded to `prec` bits. `prec` is clamped to MPFR's valid range.
    pub fn with_precision(prec: u32, value: f64) -> Self {
        BigFloat(Float::with_val(clamp_prec(prec), value))
    }

    pub fn from_f64(value: f64) -> Self {
        Self::with_precision(DOUBLE_PRECISION, value)
    }

    pub fn from_i64(value: i64) -> Self {
        BigFloat(Float::with_val(INTEGER_PRECISION, value))
    }

    /// Exact: precision grows to the bit length of `value`.
    pub fn from_bigint(value: &BigInt) -> Self {
        let prec = INTEGER_PRECISION.max(bit_len(value));
        BigFloat(Float::with_val(clamp_prec(prec), &to_mp_integer(value)))
    }

    /// `num / den` rounded at `max(64, bit length)` precision.
    pub fn from_rational(value: &BigRational) -> Self {
        let prec = clamp_prec(
            INTEGER_PRECISION
                .max(bit_len(value.numer()))
                .max(bit_len(value.denom())),
        );
        let num = Float::with_val(prec, &to_mp_integer(value.numer()));
        let den = Float::with_val(prec, &to_mp_integer(value.denom()));
        BigFloat(num / &den)
    }

    pub fn precision(&self) -> u32 {
        self.0.prec()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Nearest double.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// Truncated toward zero, saturating at the `i64` range. NaN is 0.
    pub fn to_i64_trunc(&self) -> i64 {
        if self.0.is_nan() {
            return 0;
        }
        if self.0.is_infinite() {
            return if self.0.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            };
        }
        match self.0.to_integer_round(Round::Zero) {
            Some((i, _)) => i.to_i64().unwrap_or(if i.is_negative() {
                i64::MIN
            } else {
                i64::MAX
            }),
            None => 0,
        }
    }

    /// Truncated toward zero. NaN and the infinities have no integer value
    /// and map to zero.
    pub fn to_bigint_trunc(&self) -> BigInt {
        match self.0.to_integer_round(Round::Zero) {
            Some((i, _)) => from_mp_integer(&i),
            None => BigInt::zero(),
        }
    }

    /// Exact binary value, `None` for NaN and the infinities.
    pub fn to_rational_exact(&self) -> Option<BigRational> {
        let (mantissa, exp) = self.0.to_integer_exp()?;
        let mantissa = from_mp_integer(&mantissa);
        let shift = exp.unsigned_abs() as usize;
        Some(if exp >= 0 {
            BigRational::from_integer(mantissa << shift)
        } else {
            BigRational::new(mantissa, BigInt::one() << shift)
        })
    }

    pub fn add(&self, other: &BigFloat) -> BigFloat {
        BigFloat(Float::with_val(self.joint_prec(other), &self.0 + &other.0))
    }

    pub fn sub(&self, other: &BigFloat) -> BigFloat {
        BigFloat(Float::with_val(self.joint_prec(other), &self.0 - &other.0))
    }

    pub fn mul(&self, other: &BigFloat) -> BigFloat {
        BigFloat(Float::with_val(self.joint_prec(other), &self.0 * &other.0))
    }

    /// MPFR division: x/0 is a signed infinity, 0/0 is NaN.
    pub fn div(&self, other: &BigFloat) -> BigFloat {
        BigFloat(Float::with_val(self.joint_prec(other), &self.0 / &other.0))
    }

    fn joint_prec(&self, other: &BigFloat) -> u32 {
        self.0.prec().max(other.0.prec())
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl From<Float> for BigFloat {
    fn from(value: Float) -> Self {
        BigFloat(value)
    }
}

fn clamp_prec(prec: u32) -> u32 {
    prec.clamp(float::prec_min(), float::prec_max())
}

fn bit_len(value: &BigInt) -> u32 {
    u32::try_from(value.bits()).unwrap_or(u32::MAX)
}

pub(crate) fn to_mp_integer(value: &BigInt) -> rug::Integer {
    let (sign, bytes) = value.to_bytes_le();
    let magnitude = rug::Integer::from_digits(&bytes, Order::Lsf);
    if sign == Sign::Minus {
        -magnitude
    } else {
        magnitude
    }
}

pub(crate) fn from_mp_integer(value: &rug::Integer) -> BigInt {
    let magnitude = BigUint::from_bytes_le(&value.to_digits::<u8>(Order::Lsf));
    let sign = if value.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    BigInt::from_biguint(sign, magnitude)
}
