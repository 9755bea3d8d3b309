//! Benchmark for pairwise screening and matrix computation
//!
//! Run with: cargo bench --bench correlation_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polars::prelude::*;
use rand::prelude::*;
use rand::SeedableRng;

use colsift::pipeline::{correlation_matrix, screen_redundant_pairs};

/// Generate synthetic data with a mix of independent and correlated columns
fn generate_test_dataframe(n_rows: usize, n_features: usize, seed: u64) -> DataFrame {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut columns: Vec<Column> = Vec::with_capacity(n_features);

    for i in 0..n_features {
        let values: Vec<f64> = if i % 4 == 3 && i >= 3 {
            // Correlated with an earlier column, plus noise
            columns[i - 3]
                .f64()
                .unwrap()
                .into_iter()
                .map(|v| v.unwrap_or(50.0) + rng.gen::<f64>() * 10.0 - 5.0)
                .collect()
        } else {
            (0..n_rows).map(|_| rng.gen::<f64>() * 100.0).collect()
        };

        columns.push(Column::new(format!("feature_{}", i).into(), values));
    }

    DataFrame::new(columns).expect("Failed to create DataFrame")
}

/// Benchmark pairwise screening for varying column counts
fn benchmark_screen_by_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen_by_columns");
    group.sample_size(30);

    let n_rows = 10_000;
    let column_counts = [10, 25, 50];

    for n_cols in column_counts {
        let df = generate_test_dataframe(n_rows, n_cols, 42);
        let threshold = 0.99;

        group.throughput(Throughput::Elements((n_cols * n_cols) as u64));

        group.bench_with_input(BenchmarkId::new("pairwise", n_cols), &df, |b, df| {
            b.iter(|| {
                let _ = screen_redundant_pairs(black_box(df), black_box(threshold));
            });
        });

        group.bench_with_input(BenchmarkId::new("matrix", n_cols), &df, |b, df| {
            b.iter(|| {
                let _ = correlation_matrix(black_box(df));
            });
        });
    }

    group.finish();
}

/// Benchmark pairwise screening for varying row counts
fn benchmark_screen_by_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen_by_rows");
    group.sample_size(20);

    let n_cols = 25;
    let row_counts = [1_000, 10_000, 100_000];

    for n_rows in row_counts {
        let df = generate_test_dataframe(n_rows, n_cols, 42);
        let threshold = 0.99;

        group.throughput(Throughput::Elements(n_rows as u64));

        group.bench_with_input(BenchmarkId::new("pairwise", n_rows), &df, |b, df| {
            b.iter(|| {
                let _ = screen_redundant_pairs(black_box(df), black_box(threshold));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_screen_by_columns, benchmark_screen_by_rows);
criterion_main!(benches);
