use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use numtower::{add, compare, divide, Number};

fn bench_same_kind(c: &mut Criterion) {
    let a = Number::Integer(123_456);
    let b = Number::Integer(789);
    c.bench_function("add/integer_integer", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&b)))
    });
    c.bench_function("divide/integer_escape", |bench| {
        bench.iter(|| divide(black_box(&a), black_box(&b)))
    });
}

fn bench_promotion(c: &mut Criterion) {
    let int = Number::Integer(7);
    let ratio = Number::rational(22, 7).expect("non-zero denominator");
    let float = Number::Float(3.25);
    let big_float = Number::big_float(256, 1.5);

    c.bench_function("add/integer_rational", |bench| {
        bench.iter(|| add(black_box(&int), black_box(&ratio)))
    });
    c.bench_function("compare/rational_float", |bench| {
        bench.iter(|| compare(black_box(&ratio), black_box(&float)))
    });
    c.bench_function("add/float_big_float", |bench| {
        bench.iter(|| add(black_box(&float), black_box(&big_float)))
    });
}

criterion_group!(benches, bench_same_kind, bench_promotion);
criterion_main!(benches);
