use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::prelude::*;

fn random_dense(rng: &mut StdRng, n: usize, density: f64) -> DenseMatrix<f64> {
    let mut m = DenseMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if rng.gen_bool(density) {
                *m.at_mut(i, j).unwrap() = rng.gen_range(-1.0..1.0);
            }
        }
    }
    m
}

fn bench_sparse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let da = random_dense(&mut rng, 256, 0.02);
    let db = random_dense(&mut rng, 256, 0.02);
    let a = CsrMatrix::from_dense(&da);
    let b = CsrMatrix::from_dense(&db);

    c.bench_function("from_dense_256", |bench| {
        bench.iter(|| black_box(CsrMatrix::from_dense(&da)))
    });
    c.bench_function("csr_add_256", |bench| {
        bench.iter(|| black_box(a.add(&b).unwrap()))
    });
    c.bench_function("csr_matmul_256", |bench| {
        bench.iter(|| black_box(a.matmul(&b).unwrap()))
    });
    c.bench_function("dense_matmul_256", |bench| {
        bench.iter(|| black_box(da.matmul(&db).unwrap()))
    });
}

fn bench_determinant(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("cofactor_determinant");
    for n in [4usize, 6, 8] {
        let m = CsrMatrix::from_dense(&random_dense(&mut rng, n, 0.8));
        group.bench_function(format!("order_{}", n), |bench| {
            bench.iter(|| black_box(m.determinant().unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sparse, bench_determinant);
criterion_main!(benches);
