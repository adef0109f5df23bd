use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use densemat::{Matrix, determinant, inverse, multiply};

fn test_matrix(n: usize) -> Matrix {
    let data: Vec<f64> = (0..n * n)
        .map(|i| if i % (n + 1) == 0 { n as f64 } else { (i % 10) as f64 / 10.0 })
        .collect();
    Matrix::from_vec(n, n, data).unwrap()
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");
    for n in [3, 5, 7, 8] {
        let a = test_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &a, |bench, a| {
            bench.iter(|| determinant(black_box(a)).unwrap())
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for n in [3, 5, 6] {
        let a = test_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &a, |bench, a| {
            bench.iter(|| inverse(black_box(a)).unwrap())
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for n in [16, 64, 128] {
        let a = test_matrix(n);
        let b = test_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_determinant, bench_inverse, bench_multiply);
criterion_main!(benches);
