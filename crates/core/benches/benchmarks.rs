//! Benchmarks for pricecheck-core.
//!
//! Run with: `cargo bench -p pricecheck-core`
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricecheck_core::{
    compare, convert_price_per_unit, convert_quantity, format_price, FormatOptions, PriceCheck,
    PricePerUnit, Unit,
};

/// Unit pairs covering alias lookup, both categories and the identity path.
const UNIT_PAIRS: &[(&str, &str, &str)] = &[
    ("identity", "kg", "kg"),
    ("metric", "g", "kg"),
    ("imperial", "kg", "lb"),
    ("volume", "gallon", "fl oz"),
    ("long_alias", "Millilitres", "Litres"),
];

/// Benchmark token lookup plus conversion.
fn bench_convert_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_quantity");

    for &(name, from, to) in UNIT_PAIRS {
        group.bench_with_input(BenchmarkId::new("pair", name), &(from, to), |b, &(from, to)| {
            b.iter(|| convert_quantity(black_box(12.5), black_box(from), black_box(to)));
        });
    }

    group.finish();
}

fn bench_convert_price(c: &mut Criterion) {
    c.bench_function("convert_price_per_unit", |b| {
        b.iter(|| convert_price_per_unit(black_box(28.95), black_box("kg"), black_box("lb")));
    });
}

/// Benchmark the typed path that skips token lookup.
fn bench_compare_prices(c: &mut Criterion) {
    let pc = PriceCheck::new();
    let user = PricePerUnit::new(12.99, Unit::Pound);
    let reference = PricePerUnit::new(28.95, Unit::Kilogram);

    c.bench_function("compare_prices", |b| {
        b.iter(|| pc.compare_prices(black_box(&user), black_box(&reference)));
    });
    c.bench_function("compare", |b| {
        b.iter(|| compare(black_box(0.00799), black_box(0.0054)));
    });
}

fn bench_format_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_price");

    for price in [0.0, 0.0024, 0.123, 13.13] {
        group.bench_with_input(BenchmarkId::new("price", price), &price, |b, &price| {
            b.iter(|| format_price(black_box(price), FormatOptions::default()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_convert_quantity,
    bench_convert_price,
    bench_compare_prices,
    bench_format_price,
);

criterion_main!(benches);
