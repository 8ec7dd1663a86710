use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linmath::transform::mat4;
use linmath::{Matrix, Vector};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant matrices so every inverse is well defined
// ---------------------------------------------------------------------------

fn dominant(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        ((i + 1) * (j + 2) % 7) as f64 + if i == j { 4.0 * n as f64 } else { 0.0 }
    })
}

const SIZES: [usize; 5] = [2, 3, 4, 5, 6];

// ---------------------------------------------------------------------------
// Cofactor expansion
// ---------------------------------------------------------------------------

fn determinant(c: &mut Criterion) {
    let mut g = c.benchmark_group("determinant");
    for n in SIZES {
        let m = dominant(n);
        g.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| std::hint::black_box(m).determinant())
        });
    }
    g.finish();
}

fn inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse");
    for n in SIZES {
        let m = dominant(n);
        g.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| std::hint::black_box(m).inverse())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul");
    for n in SIZES {
        let a = dominant(n);
        let m = Matrix::from_fn(n, n, |i, j| (i + j + 1) as f64);
        g.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });
    }
    g.finish();
}

fn transform_point(c: &mut Criterion) {
    let model = &(&mat4::translation(1.0, 2.0, 3.0) * &mat4::rot_y(0.7)) * &mat4::scaling(2.0, 2.0, 2.0);
    let proj = mat4::perspective(std::f64::consts::FRAC_PI_4, 1.5, 0.1, 100.0);
    let mvp = &proj * &model;
    let p = Vector::from([0.5, -0.25, -4.0, 1.0]);
    c.bench_function("mvp_times_point", |b| {
        b.iter(|| std::hint::black_box(&mvp) * std::hint::black_box(&p))
    });
}

criterion_group!(benches, determinant, inverse, matmul, transform_point);
criterion_main!(benches);
