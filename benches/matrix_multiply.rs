//! Benchmarks for sparse matrix arithmetic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsemat::SparseMatrix;

/// Create a banded test matrix with `width` entries on each side of the diagonal
fn create_banded_matrix(n: usize, width: usize) -> SparseMatrix<i64> {
    let mut matrix = SparseMatrix::new(n, n);
    for i in 0..n {
        let start = i.saturating_sub(width);
        let end = (i + width + 1).min(n);
        for j in start..end {
            matrix.set(i, j, (i + j) as i64 % 7 + 1);
        }
    }
    matrix
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for &n in &[1_000usize, 10_000] {
        let a = create_banded_matrix(n, 2);
        let b = create_banded_matrix(n, 3);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(a.add(&b).unwrap()))
        });
    }

    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &n in &[1_000usize, 10_000] {
        let a = create_banded_matrix(n, 2);
        let b = create_banded_matrix(n, 2);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(a.multiply(&b).unwrap()))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text = create_banded_matrix(10_000, 2).to_text();

    c.bench_function("parse_10000", |bench| {
        bench.iter(|| black_box(text.parse::<SparseMatrix>().unwrap()))
    });
}

criterion_group!(benches, bench_add, bench_multiply, bench_parse);
criterion_main!(benches);
