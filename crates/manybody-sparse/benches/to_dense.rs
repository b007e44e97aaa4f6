//! Benchmarks for sparse-to-dense expansion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use manybody_sparse::{SparseArrayC64, SparseArrayF64};
use num_complex::Complex64;

/// n x n array with entries on the diagonal.
fn diagonal_f64(n: usize) -> SparseArrayF64 {
    let indices: Vec<usize> = (0..n).flat_map(|i| [i, i]).collect();
    let values: Vec<f64> = (0..n).map(|i| i as f64 + 1.0).collect();
    SparseArrayF64::from_parts(vec![n, n], indices, values).unwrap()
}

fn diagonal_c64(n: usize) -> SparseArrayC64 {
    let indices: Vec<usize> = (0..n).flat_map(|i| [i, i]).collect();
    let values: Vec<Complex64> = (0..n)
        .map(|i| Complex64::new(i as f64 + 1.0, -(i as f64)))
        .collect();
    SparseArrayC64::from_parts(vec![n, n], indices, values).unwrap()
}

/// Rank-4 array of extent n per axis, one entry per hyper-diagonal site.
fn hyperdiag_f64(n: usize) -> SparseArrayF64 {
    let indices: Vec<usize> = (0..n).flat_map(|i| [i, i, i, i]).collect();
    let values: Vec<f64> = (0..n).map(|i| 1.0 / (i as f64 + 1.0)).collect();
    SparseArrayF64::from_parts(vec![n, n, n, n], indices, values).unwrap()
}

fn bench_to_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_dense");

    for n in [16, 64, 256] {
        let a = diagonal_f64(n);
        let mut out = vec![0.0; n * n];
        group.bench_with_input(BenchmarkId::new("diag_f64", n), &n, |b, _| {
            b.iter(|| a.to_dense_into(black_box(&mut out)))
        });
    }

    for n in [16, 64, 256] {
        let a = diagonal_c64(n);
        let mut out = vec![Complex64::new(0.0, 0.0); n * n];
        group.bench_with_input(BenchmarkId::new("diag_c64", n), &n, |b, _| {
            b.iter(|| a.to_dense_into(black_box(&mut out)))
        });
    }

    for n in [4, 8, 16] {
        let a = hyperdiag_f64(n);
        let mut out = vec![0.0; n * n * n * n];
        group.bench_with_input(BenchmarkId::new("rank4_f64", n), &n, |b, _| {
            b.iter(|| a.to_dense_into(black_box(&mut out)))
        });
    }

    group.finish();
}

fn bench_to_dense_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_dense_alloc");

    for n in [16, 64, 256] {
        let a = diagonal_f64(n);
        group.bench_with_input(BenchmarkId::new("diag_f64", n), &n, |b, _| {
            b.iter(|| a.to_dense().unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_dense, bench_to_dense_alloc);
criterion_main!(benches);
