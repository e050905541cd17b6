use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linsolve::{DynMatrix, DynVector, GaussJordan, LinearSolver, LuSolver};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant systems so both strategies reach full rank
// ---------------------------------------------------------------------------

fn system(n: usize) -> (DynMatrix<f64>, Vec<f64>) {
    let a = DynMatrix::from_fn(n, n, |i, j| {
        let off = ((i * 7 + j * 3) % 11) as f64 - 5.0;
        if i == j {
            off + 4.0 * n as f64
        } else {
            off
        }
    });
    let b = (0..n).map(|i| (i + 1) as f64).collect();
    (a, b)
}

// ---------------------------------------------------------------------------
// Repeated solve of a loaded system
// ---------------------------------------------------------------------------

fn solve_sizes(c: &mut Criterion) {
    let mut g = c.benchmark_group("solve");

    for &n in &[4usize, 16, 64] {
        let (a, b) = system(n);

        g.bench_with_input(BenchmarkId::new("gauss_jordan", n), &n, |bench, &n| {
            let mut s = GaussJordan::<f64>::with_dim(n);
            s.set_system(&a, &b).unwrap();
            let mut x = DynVector::zeros(n, 0.0);
            bench.iter(|| std::hint::black_box(s.solve(std::hint::black_box(&mut x))))
        });

        g.bench_with_input(BenchmarkId::new("lu", n), &n, |bench, &n| {
            let mut s = LuSolver::<f64>::with_dim(n);
            s.set_system(&a, &b).unwrap();
            let mut x = DynVector::zeros(n, 0.0);
            bench.iter(|| std::hint::black_box(s.solve(std::hint::black_box(&mut x))))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Load + solve through the trait object, as a caller holding dyn would
// ---------------------------------------------------------------------------

fn load_and_solve(c: &mut Criterion) {
    let mut g = c.benchmark_group("load_and_solve_16");
    let (a, b) = system(16);

    g.bench_function("gauss_jordan", |bench| {
        let mut gj = GaussJordan::<f64>::with_dim(16);
        let s: &mut dyn LinearSolver<f64> = &mut gj;
        bench.iter(|| {
            s.set_system(std::hint::black_box(&a), &b).unwrap();
            s.solve_new()
        })
    });

    g.bench_function("lu", |bench| {
        let mut lu = LuSolver::<f64>::with_dim(16);
        let s: &mut dyn LinearSolver<f64> = &mut lu;
        bench.iter(|| {
            s.set_system(std::hint::black_box(&a), &b).unwrap();
            s.solve_new()
        })
    });

    g.finish();
}

criterion_group!(benches, solve_sizes, load_and_solve);
criterion_main!(benches);
