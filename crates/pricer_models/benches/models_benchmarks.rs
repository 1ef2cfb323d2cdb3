//! Criterion benchmarks for pricer_models.
//!
//! Measures price, Greeks and the combined evaluation, plus payoff curve
//! generation at several grid sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::prelude::*;

fn atm_call() -> OptionParameters {
    OptionParameters {
        spot: 100.0,
        strike: 100.0,
        time_to_maturity: 1.0,
        risk_free_rate: 0.05,
        volatility: 0.2,
        option_type: OptionType::Call,
    }
}

/// Benchmark the closed-form evaluations.
fn bench_analytical(c: &mut Criterion) {
    let params = atm_call();
    let mut group = c.benchmark_group("black_scholes");

    group.bench_function("price", |b| b.iter(|| price(black_box(&params))));
    group.bench_function("greeks", |b| b.iter(|| greeks(black_box(&params))));
    group.bench_function("evaluate", |b| b.iter(|| evaluate(black_box(&params))));

    group.finish();
}

/// Benchmark payoff curve generation.
fn bench_payoff_curve(c: &mut Criterion) {
    let params = atm_call();
    let mut group = c.benchmark_group("payoff_curve");

    for num_points in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            &num_points,
            |b, &n| b.iter(|| payoff_curve(black_box(&params), 10.45, n)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_analytical, bench_payoff_curve);
criterion_main!(benches);
