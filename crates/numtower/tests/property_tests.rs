use std::cmp::Ordering;

use num_bigint::BigInt;
use numtower::{add, compare, divide, multiply, subtract, NumKind, Number, NumericError};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = NumKind> {
    prop::sample::select(NumKind::ALL.to_vec())
}

/// Small exact-valued numbers of every kind; floats stay integral so that
/// cross-kind results are comparable without rounding noise.
fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-1000i64..1000).prop_map(Number::Integer),
        (-1000i64..1000).prop_map(|i| Number::Float(i as f64)),
        (-1000i64..1000).prop_map(|i| Number::BigInteger(BigInt::from(i))),
        (-1000i64..1000).prop_map(|i| Number::big_float(96, i as f64)),
        (-1000i64..1000, 1i64..50)
            .prop_map(|(n, d)| Number::rational(n, d).expect("positive denominator")),
    ]
}

fn arb_exact() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i32>().prop_map(|i| Number::Integer(i as i64)),
        any::<i64>().prop_map(|i| Number::BigInteger(BigInt::from(i) * 1_000_003)),
        (any::<i32>(), 1i32..1000).prop_map(|(n, d)| Number::rational(n, d).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn combine_is_commutative(a in arb_kind(), b in arb_kind()) {
        prop_assert_eq!(a.combine(b), b.combine(a));
    }

    #[test]
    fn combine_returns_greater_rank(a in arb_kind(), b in arb_kind()) {
        let k = a.combine(b);
        prop_assert_eq!(k.rank(), a.rank().max(b.rank()));
    }

    #[test]
    fn result_kind_is_governing_kind(x in arb_number(), y in arb_number()) {
        let sum = add(&x, &y).unwrap();
        prop_assert_eq!(sum.kind(), x.kind().combine(y.kind()));
        let product = multiply(&x, &y).unwrap();
        prop_assert_eq!(product.kind(), x.kind().combine(y.kind()));
    }

    #[test]
    fn compare_is_antisymmetric(x in arb_number(), y in arb_number()) {
        let xy = compare(&x, &y);
        let yx = compare(&y, &x);
        prop_assert_eq!(xy, yx.reverse());
    }

    #[test]
    fn exact_addition_commutes(x in arb_exact(), y in arb_exact()) {
        let xy = add(&x, &y).unwrap();
        let yx = add(&y, &x).unwrap();
        prop_assert_eq!(compare(&xy, &yx), Ordering::Equal);
    }

    #[test]
    fn exact_subtraction_inverts_addition(x in arb_exact(), y in arb_exact()) {
        let sum = add(&x, &y).unwrap();
        let back = subtract(&sum, &y).unwrap();
        prop_assert_eq!(compare(&back, &x), Ordering::Equal);
    }

    #[test]
    fn exact_division_inverts_multiplication(x in arb_exact(), y in arb_exact()) {
        prop_assume!(!y.is_zero());
        let product = multiply(&x, &y).unwrap();
        let back = divide(&product, &y).unwrap();
        prop_assert_eq!(compare(&back, &x), Ordering::Equal);
    }

    #[test]
    fn integer_division_kind_tracks_exactness(a in -10_000i64..10_000, b in -100i64..100) {
        let q = divide(&Number::Integer(a), &Number::Integer(b));
        if b == 0 {
            prop_assert_eq!(q, Err(NumericError::DivideByZero));
        } else if a % b == 0 {
            let q = q.unwrap();
            prop_assert_eq!(q.kind(), NumKind::Integer);
            prop_assert_eq!(q.to_integer(), a / b);
        } else {
            prop_assert_eq!(q.unwrap().kind(), NumKind::Rational);
        }
    }

    #[test]
    fn floats_round_trip_through_rational(f in -1.0e12f64..1.0e12) {
        let r = Number::Float(f).to_rational().unwrap();
        prop_assert_eq!(Number::Rational(r).to_float(), f);
    }
}
