//! Mixed-kind dispatch: classify, promote, lift, execute.

use std::cmp::Ordering;

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::config::{OverflowPolicy, TowerConfig};
use crate::error::NumericError;
use crate::kind::NumKind;
use crate::number::Number;
use crate::ops::{
    ArithOp, NumOps, BIG_FLOAT_OPS, BIG_INTEGER_OPS, FLOAT_OPS, INTEGER_OPS, RATIONAL_OPS,
};

/// Bind `$ops` to the table governing `$kind` and evaluate `$body`.
macro_rules! with_table {
    ($kind:expr, |$ops:ident| $body:expr) => {
        match $kind {
            NumKind::Integer => {
                let $ops = &INTEGER_OPS;
                $body
            }
            NumKind::BigInteger => {
                let $ops = &BIG_INTEGER_OPS;
                $body
            }
            NumKind::Rational => {
                let $ops = &RATIONAL_OPS;
                $body
            }
            NumKind::Float => {
                let $ops = &FLOAT_OPS;
                $body
            }
            NumKind::BigFloat => {
                let $ops = &BIG_FLOAT_OPS;
                $body
            }
        }
    };
}

/// The numeric tower under a given [`TowerConfig`].
///
/// Stateless beyond its config; copy it freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tower {
    config: TowerConfig,
}

impl Tower {
    pub fn new(config: TowerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TowerConfig {
        &self.config
    }

    /// Kind whose table runs an operation on `x` and `y`.
    pub fn governing_kind(&self, x: &Number, y: &Number) -> NumKind {
        let (kx, ky) = (x.kind(), y.kind());
        let kind = kx.combine(ky);
        trace!(target: "numeric", lhs = %kx, rhs = %ky, governing = %kind, "promote");
        kind
    }

    fn lift_pair<O: NumOps>(
        &self,
        ops: &O,
        x: &Number,
        y: &Number,
    ) -> Result<(O::Repr, O::Repr), NumericError> {
        let policy = self.config.conversion;
        Ok((ops.lift(x, policy)?, ops.lift(y, policy)?))
    }

    fn arith(&self, op: ArithOp, x: &Number, y: &Number) -> Result<Number, NumericError> {
        let kind = self.governing_kind(x, y);
        if kind == NumKind::Integer && self.config.overflow == OverflowPolicy::Promote {
            let (a, b) = self.lift_pair(&INTEGER_OPS, x, y)?;
            if let Some(v) = INTEGER_OPS.checked(op, a, b) {
                return Ok(Number::Integer(v));
            }
            debug!(target: "numeric", ?op, lhs = a, rhs = b, "Integer overflow promoted to BigInteger");
            return Ok(op.apply(&BIG_INTEGER_OPS, &BigInt::from(a), &BigInt::from(b)));
        }
        with_table!(kind, |ops| {
            let (a, b) = self.lift_pair(ops, x, y)?;
            Ok(op.apply(ops, &a, &b))
        })
    }

    pub fn add(&self, x: &Number, y: &Number) -> Result<Number, NumericError> {
        self.arith(ArithOp::Add, x, y)
    }

    pub fn subtract(&self, x: &Number, y: &Number) -> Result<Number, NumericError> {
        self.arith(ArithOp::Subtract, x, y)
    }

    pub fn multiply(&self, x: &Number, y: &Number) -> Result<Number, NumericError> {
        self.arith(ArithOp::Multiply, x, y)
    }

    /// Integer and BigInteger quotients that are not integral escape to
    /// Rational. Exact division by zero is [`NumericError::DivideByZero`];
    /// float kinds never fail.
    pub fn divide(&self, x: &Number, y: &Number) -> Result<Number, NumericError> {
        let kind = self.governing_kind(x, y);
        if kind == NumKind::Integer && self.config.overflow == OverflowPolicy::Promote {
            let (a, b) = self.lift_pair(&INTEGER_OPS, x, y)?;
            // Only i64::MIN / -1 overflows.
            if b != 0 && a.checked_div(b).is_none() {
                debug!(target: "numeric", lhs = a, rhs = b, "Integer overflow promoted to BigInteger");
                return BIG_INTEGER_OPS.divide(&BigInt::from(a), &BigInt::from(b));
            }
            return INTEGER_OPS.divide(&a, &b);
        }
        with_table!(kind, |ops| {
            let (a, b) = self.lift_pair(ops, x, y)?;
            ops.divide(&a, &b)
        })
    }

    pub fn is_zero(&self, x: &Number) -> bool {
        x.is_zero()
    }

    fn try_relation(&self, rel: Relation, x: &Number, y: &Number) -> Result<bool, NumericError> {
        with_table!(self.governing_kind(x, y), |ops| {
            let (a, b) = self.lift_pair(ops, x, y)?;
            Ok(match rel {
                Relation::Lt => ops.lt(&a, &b),
                Relation::Lte => ops.lte(&a, &b),
                Relation::Gt => ops.gt(&a, &b),
            })
        })
    }

    fn try_compare(&self, x: &Number, y: &Number) -> Result<Ordering, NumericError> {
        with_table!(self.governing_kind(x, y), |ops| {
            let (a, b) = self.lift_pair(ops, x, y)?;
            Ok(if ops.lt(&a, &b) {
                Ordering::Less
            } else if ops.lt(&b, &a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            })
        })
    }

    pub fn lt(&self, x: &Number, y: &Number) -> bool {
        infallible_lift(self.try_relation(Relation::Lt, x, y), false)
    }

    pub fn lte(&self, x: &Number, y: &Number) -> bool {
        infallible_lift(self.try_relation(Relation::Lte, x, y), false)
    }

    pub fn gt(&self, x: &Number, y: &Number) -> bool {
        infallible_lift(self.try_relation(Relation::Gt, x, y), false)
    }

    /// Derived as `!lt`, so a NaN operand makes it true.
    pub fn gte(&self, x: &Number, y: &Number) -> bool {
        !self.lt(x, y)
    }

    /// `Less` if `x < y`, `Greater` if `y < x`, otherwise `Equal`.
    ///
    /// Operands are lifted once and both orderings are checked with the
    /// governing table's less-than, so NaN compares `Equal` to everything.
    pub fn compare(&self, x: &Number, y: &Number) -> Ordering {
        infallible_lift(self.try_compare(x, y), Ordering::Equal)
    }

    /// Stable sort by [`Tower::compare`], with every NaN placed after all
    /// other values in its original relative order.
    pub fn sort(&self, values: &mut [Number]) {
        values.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
            (false, false) => self.compare(a, b),
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
        });
    }
}

#[derive(Debug, Clone, Copy)]
enum Relation {
    Lt,
    Lte,
    Gt,
}

/// Comparisons lift into the governing table, and only the Rational lift
/// can fail (on a NaN or infinite float). A Rational table never governs a
/// float operand, so the error arm is unreachable under rank promotion.
fn infallible_lift<T>(lifted: Result<T, NumericError>, fallback: T) -> T {
    match lifted {
        Ok(v) => v,
        Err(e) => {
            debug_assert!(false, "comparison lift failed: {e}");
            fallback
        }
    }
}
