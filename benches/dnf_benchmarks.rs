//! Benchmarks for the parse → expand → minimize pipeline
//!
//! Inputs are products of sums (`(x0 v y0) & (x1 v y1) & ...`), whose
//! expansion doubles with every factor, plus a shared prefix so absorption
//! has work to do.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dnf_simplifier::{simplify, simplify_expression, to_dnf, Expr};

/// `(x0 v y0) & ... & (x{n-1} v y{n-1}) v x0`
fn product_of_sums(factors: usize) -> String {
    let product = (0..factors)
        .map(|i| format!("(x{} v y{})", i, i))
        .collect::<Vec<_>>()
        .join(" & ");
    format!("{} v x0", product)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for factors in [4, 8, 12] {
        let input = product_of_sums(factors);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(factors), &input, |b, data| {
            b.iter(|| Expr::parse(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    for factors in [4, 8, 10] {
        let expr = Expr::parse(&product_of_sums(factors)).unwrap();
        group.throughput(Throughput::Elements(1 << factors));
        group.bench_with_input(BenchmarkId::from_parameter(factors), &expr, |b, data| {
            b.iter(|| to_dnf(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for factors in [4, 6, 8] {
        let dnf = to_dnf(&Expr::parse(&product_of_sums(factors)).unwrap()).unwrap();
        group.throughput(Throughput::Elements(dnf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(factors), &dnf, |b, data| {
            b.iter(|| simplify(black_box(data.terms())))
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    for factors in [4, 6, 8] {
        let input = product_of_sums(factors);
        group.bench_with_input(BenchmarkId::from_parameter(factors), &input, |b, data| {
            b.iter(|| simplify_expression(black_box(data)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_expand,
    bench_minimize,
    bench_full_pipeline
);
criterion_main!(benches);
