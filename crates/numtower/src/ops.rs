//! Per-kind operator tables.
//!
//! Each table is a stateless zero-sized singleton that operates only on
//! operands already lifted into its own representation. Mixed-kind dispatch
//! lives in [`crate::tower`]; tables never see a foreign kind.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::debug;

use crate::big_float::BigFloat;
use crate::convert::{wrap_to_i64, ConversionPolicy};
use crate::error::NumericError;
use crate::kind::NumKind;
use crate::number::Number;

/// Arithmetic and comparison for one kind.
///
/// There is no greater-or-equal; callers derive it as `!lt`.
pub trait NumOps: Sync {
    /// Native representation the table computes on.
    type Repr;

    const KIND: NumKind;

    /// Convert any value into this table's representation.
    fn lift(&self, n: &Number, policy: ConversionPolicy) -> Result<Self::Repr, NumericError>;

    fn add(&self, x: &Self::Repr, y: &Self::Repr) -> Number;
    fn subtract(&self, x: &Self::Repr, y: &Self::Repr) -> Number;
    fn multiply(&self, x: &Self::Repr, y: &Self::Repr) -> Number;
    /// May escape to a higher kind (Integer/BigInteger → Rational).
    fn divide(&self, x: &Self::Repr, y: &Self::Repr) -> Result<Number, NumericError>;
    fn is_zero(&self, x: &Self::Repr) -> bool;
    fn lt(&self, x: &Self::Repr, y: &Self::Repr) -> bool;
    fn lte(&self, x: &Self::Repr, y: &Self::Repr) -> bool;
    fn gt(&self, x: &Self::Repr, y: &Self::Repr) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerOps;
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatOps;
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntegerOps;
#[derive(Debug, Clone, Copy, Default)]
pub struct BigFloatOps;
#[derive(Debug, Clone, Copy, Default)]
pub struct RationalOps;

pub static INTEGER_OPS: IntegerOps = IntegerOps;
pub static FLOAT_OPS: FloatOps = FloatOps;
pub static BIG_INTEGER_OPS: BigIntegerOps = BigIntegerOps;
pub static BIG_FLOAT_OPS: BigFloatOps = BigFloatOps;
pub static RATIONAL_OPS: RationalOps = RationalOps;

/// Integral quotients keep `integral`'s kind, the rest become Rational.
fn escape_quotient(q: BigRational, integral: impl FnOnce(BigInt) -> Number) -> Number {
    if q.is_integer() {
        integral(q.to_integer())
    } else {
        debug!(target: "numeric", quotient = %q, "division escaped to Rational");
        Number::Rational(q)
    }
}

// =============================================================================
// Integer
// =============================================================================

impl IntegerOps {
    /// Overflow-checked add/subtract/multiply; `None` on overflow.
    pub fn checked(&self, op: ArithOp, x: i64, y: i64) -> Option<i64> {
        match op {
            ArithOp::Add => x.checked_add(y),
            ArithOp::Subtract => x.checked_sub(y),
            ArithOp::Multiply => x.checked_mul(y),
        }
    }
}

impl NumOps for IntegerOps {
    type Repr = i64;
    const KIND: NumKind = NumKind::Integer;

    fn lift(&self, n: &Number, policy: ConversionPolicy) -> Result<i64, NumericError> {
        Ok(n.to_integer_with(policy))
    }

    // Machine-word semantics: overflow wraps.
    fn add(&self, x: &i64, y: &i64) -> Number {
        Number::Integer(x.wrapping_add(*y))
    }

    fn subtract(&self, x: &i64, y: &i64) -> Number {
        Number::Integer(x.wrapping_sub(*y))
    }

    fn multiply(&self, x: &i64, y: &i64) -> Number {
        Number::Integer(x.wrapping_mul(*y))
    }

    fn divide(&self, x: &i64, y: &i64) -> Result<Number, NumericError> {
        if *y == 0 {
            return Err(NumericError::DivideByZero);
        }
        // i64::MIN / -1 has no checked remainder and takes the rational path,
        // where 2^63 wraps back to i64::MIN.
        if x.checked_rem(*y) == Some(0) {
            return Ok(Number::Integer(x.wrapping_div(*y)));
        }
        let q = BigRational::new(BigInt::from(*x), BigInt::from(*y));
        Ok(escape_quotient(q, |i| Number::Integer(wrap_to_i64(&i))))
    }

    fn is_zero(&self, x: &i64) -> bool {
        *x == 0
    }

    fn lt(&self, x: &i64, y: &i64) -> bool {
        x < y
    }

    fn lte(&self, x: &i64, y: &i64) -> bool {
        x <= y
    }

    fn gt(&self, x: &i64, y: &i64) -> bool {
        x > y
    }
}

// =============================================================================
// Float
// =============================================================================

impl NumOps for FloatOps {
    type Repr = f64;
    const KIND: NumKind = NumKind::Float;

    fn lift(&self, n: &Number, policy: ConversionPolicy) -> Result<f64, NumericError> {
        Ok(n.to_float_with(policy))
    }

    fn add(&self, x: &f64, y: &f64) -> Number {
        Number::Float(x + y)
    }

    fn subtract(&self, x: &f64, y: &f64) -> Number {
        Number::Float(x - y)
    }

    fn multiply(&self, x: &f64, y: &f64) -> Number {
        Number::Float(x * y)
    }

    /// IEEE-754: never fails.
    fn divide(&self, x: &f64, y: &f64) -> Result<Number, NumericError> {
        Ok(Number::Float(x / y))
    }

    /// `-0.0 == 0.0` holds and NaN equals nothing.
    fn is_zero(&self, x: &f64) -> bool {
        *x == 0.0
    }

    fn lt(&self, x: &f64, y: &f64) -> bool {
        x < y
    }

    fn lte(&self, x: &f64, y: &f64) -> bool {
        x <= y
    }

    fn gt(&self, x: &f64, y: &f64) -> bool {
        x > y
    }
}

// =============================================================================
// BigInteger
// =============================================================================

impl NumOps for BigIntegerOps {
    type Repr = BigInt;
    const KIND: NumKind = NumKind::BigInteger;

    fn lift(&self, n: &Number, policy: ConversionPolicy) -> Result<BigInt, NumericError> {
        Ok(n.to_big_integer_with(policy))
    }

    fn add(&self, x: &BigInt, y: &BigInt) -> Number {
        Number::BigInteger(x + y)
    }

    fn subtract(&self, x: &BigInt, y: &BigInt) -> Number {
        Number::BigInteger(x - y)
    }

    fn multiply(&self, x: &BigInt, y: &BigInt) -> Number {
        Number::BigInteger(x * y)
    }

    fn divide(&self, x: &BigInt, y: &BigInt) -> Result<Number, NumericError> {
        if y.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        let (q, r) = x.div_rem(y);
        if r.is_zero() {
            return Ok(Number::BigInteger(q));
        }
        let q = BigRational::new(x.clone(), y.clone());
        debug!(target: "numeric", quotient = %q, "division escaped to Rational");
        Ok(Number::Rational(q))
    }

    fn is_zero(&self, x: &BigInt) -> bool {
        x.is_zero()
    }

    fn lt(&self, x: &BigInt, y: &BigInt) -> bool {
        x < y
    }

    fn lte(&self, x: &BigInt, y: &BigInt) -> bool {
        x <= y
    }

    fn gt(&self, x: &BigInt, y: &BigInt) -> bool {
        x > y
    }
}

// =============================================================================
// BigFloat
// =============================================================================

impl NumOps for BigFloatOps {
    type Repr = BigFloat;
    const KIND: NumKind = NumKind::BigFloat;

    fn lift(&self, n: &Number, policy: ConversionPolicy) -> Result<BigFloat, NumericError> {
        Ok(n.to_big_float_with(policy))
    }

    fn add(&self, x: &BigFloat, y: &BigFloat) -> Number {
        Number::BigFloat(x.add(y))
    }

    fn subtract(&self, x: &BigFloat, y: &BigFloat) -> Number {
        Number::BigFloat(x.sub(y))
    }

    fn multiply(&self, x: &BigFloat, y: &BigFloat) -> Number {
        Number::BigFloat(x.mul(y))
    }

    fn divide(&self, x: &BigFloat, y: &BigFloat) -> Result<Number, NumericError> {
        Ok(Number::BigFloat(x.div(y)))
    }

    fn is_zero(&self, x: &BigFloat) -> bool {
        x.is_zero()
    }

    fn lt(&self, x: &BigFloat, y: &BigFloat) -> bool {
        x < y
    }

    fn lte(&self, x: &BigFloat, y: &BigFloat) -> bool {
        x <= y
    }

    fn gt(&self, x: &BigFloat, y: &BigFloat) -> bool {
        x > y
    }
}

// =============================================================================
// Rational
// =============================================================================

impl NumOps for RationalOps {
    type Repr = BigRational;
    const KIND: NumKind = NumKind::Rational;

    fn lift(&self, n: &Number, policy: ConversionPolicy) -> Result<BigRational, NumericError> {
        n.to_rational_with(policy)
    }

    fn add(&self, x: &BigRational, y: &BigRational) -> Number {
        Number::Rational(x + y)
    }

    fn subtract(&self, x: &BigRational, y: &BigRational) -> Number {
        Number::Rational(x - y)
    }

    fn multiply(&self, x: &BigRational, y: &BigRational) -> Number {
        Number::Rational(x * y)
    }

    /// Stays Rational even when the quotient is integral.
    fn divide(&self, x: &BigRational, y: &BigRational) -> Result<Number, NumericError> {
        if y.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        Ok(Number::Rational(x / y))
    }

    fn is_zero(&self, x: &BigRational) -> bool {
        x.is_zero()
    }

    fn lt(&self, x: &BigRational, y: &BigRational) -> bool {
        x < y
    }

    fn lte(&self, x: &BigRational, y: &BigRational) -> bool {
        x <= y
    }

    fn gt(&self, x: &BigRational, y: &BigRational) -> bool {
        x > y
    }
}

/// Closed-form binary arithmetic, shared by the dispatcher and overflow
/// promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
}

impl ArithOp {
    pub fn apply<O: NumOps>(self, ops: &O, x: &O::Repr, y: &O::Repr) -> Number {
        match self {
            ArithOp::Add => ops.add(x, y),
            ArithOp::Subtract => ops.subtract(x, y),
            ArithOp::Multiply => ops.multiply(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_division_stays_integer_when_exact() {
        let q = INTEGER_OPS.divide(&6, &3).unwrap();
        assert_eq!(q.kind(), NumKind::Integer);
        assert_eq!(q.to_integer(), 2);
    }

    #[test]
    fn integer_division_escapes_to_rational() {
        let q = INTEGER_OPS.divide(&1, &3).unwrap();
        assert_eq!(q.kind(), NumKind::Rational);
        assert_eq!(q.to_rational().unwrap(), BigRational::new(1.into(), 3.into()));
    }

    #[test]
    fn integer_min_over_minus_one_wraps() {
        let q = INTEGER_OPS.divide(&i64::MIN, &-1).unwrap();
        assert_eq!(q.kind(), NumKind::Integer);
        assert_eq!(q.to_integer(), i64::MIN);
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(INTEGER_OPS.add(&i64::MAX, &1).to_integer(), i64::MIN);
        assert_eq!(INTEGER_OPS.checked(ArithOp::Add, i64::MAX, 1), None);
        assert_eq!(INTEGER_OPS.checked(ArithOp::Multiply, 6, 7), Some(42));
    }

    #[test]
    fn exact_division_by_zero_fails() {
        assert_eq!(INTEGER_OPS.divide(&1, &0), Err(NumericError::DivideByZero));
        assert_eq!(
            BIG_INTEGER_OPS.divide(&BigInt::from(1), &BigInt::zero()),
            Err(NumericError::DivideByZero)
        );
        let one = BigRational::from_integer(1.into());
        assert_eq!(
            RATIONAL_OPS.divide(&one, &BigRational::zero()),
            Err(NumericError::DivideByZero)
        );
    }

    #[test]
    fn float_division_by_zero_is_ieee() {
        let q = FLOAT_OPS.divide(&1.0, &0.0).unwrap();
        assert_eq!(q.to_float(), f64::INFINITY);
        let q = FLOAT_OPS.divide(&-1.0, &0.0).unwrap();
        assert_eq!(q.to_float(), f64::NEG_INFINITY);
        assert!(FLOAT_OPS.divide(&0.0, &0.0).unwrap().is_nan());
    }

    #[test]
    fn big_integer_division_escape() {
        let q = BIG_INTEGER_OPS
            .divide(&BigInt::from(10), &BigInt::from(4))
            .unwrap();
        assert_eq!(q.kind(), NumKind::Rational);
        assert_eq!(q.to_rational().unwrap(), BigRational::new(5.into(), 2.into()));

        let q = BIG_INTEGER_OPS
            .divide(&BigInt::from(10), &BigInt::from(-5))
            .unwrap();
        assert_eq!(q.kind(), NumKind::BigInteger);
        assert_eq!(q.to_big_integer(), BigInt::from(-2));
    }

    #[test]
    fn rational_division_stays_rational() {
        let x = BigRational::new(1.into(), 2.into());
        let y = BigRational::new(1.into(), 4.into());
        let q = RATIONAL_OPS.divide(&x, &y).unwrap();
        assert_eq!(q.kind(), NumKind::Rational);
        assert!(matches!(q, Number::Rational(ref r) if r.is_integer()));
    }

    #[test]
    fn nan_fails_every_float_relation() {
        let nan = f64::NAN;
        assert!(!FLOAT_OPS.lt(&nan, &1.0));
        assert!(!FLOAT_OPS.lte(&nan, &1.0));
        assert!(!FLOAT_OPS.gt(&nan, &1.0));
        assert!(!FLOAT_OPS.is_zero(&nan));
        assert!(FLOAT_OPS.is_zero(&-0.0));
    }

    #[test]
    fn big_float_division_by_zero_is_not_an_error() {
        let one = BigFloat::from_f64(1.0);
        let zero = BigFloat::from_f64(0.0);
        let q = BIG_FLOAT_OPS.divide(&one, &zero).unwrap();
        assert_eq!(q.kind(), NumKind::BigFloat);
    }
}
