//! Randomized property tests for the CSR engine
//!
//! Every case is checked against the dense reference on seeded random inputs.
//! Values are small integers stored as f64, so most comparisons are exact.

mod common;

use common::{assert_allclose_f64, assert_csr_invariants, random_sparse_dense, seeded_rng};
use rand::Rng;
use spmat::prelude::*;

const CASES: u64 = 40;

fn check_invariants(m: &CsrMatrix<f64>) {
    assert_csr_invariants(m.row_ptrs(), m.col_indices(), m.nnz(), m.shape());
}

#[test]
fn test_roundtrip_dense_csr_dense() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let (r, c) = (rng.gen_range(1..8), rng.gen_range(1..8));
        let d = random_sparse_dense(&mut rng, r, c, 0.3);

        let csr = CsrMatrix::from_dense(&d);
        check_invariants(&csr);
        assert!(csr.values().iter().all(|v| *v != 0.0), "stored zero from dense");
        assert_eq!(csr.to_dense(), d, "seed {}", seed);
    }
}

#[test]
fn test_trace_agrees_with_dense() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let n = rng.gen_range(1..8);
        let d = random_sparse_dense(&mut rng, n, n, 0.4);

        let expected: f64 = (0..n).map(|i| d.at(i, i).unwrap()).sum();
        assert_eq!(CsrMatrix::from_dense(&d).trace().unwrap(), expected);
    }
}

#[test]
fn test_addition_matches_dense() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let (r, c) = (rng.gen_range(1..8), rng.gen_range(1..8));
        let da = random_sparse_dense(&mut rng, r, c, 0.35);
        let db = random_sparse_dense(&mut rng, r, c, 0.35);

        let sum = CsrMatrix::from_dense(&da)
            .add(&CsrMatrix::from_dense(&db))
            .unwrap();
        check_invariants(&sum);
        assert_eq!(sum.to_dense(), da.add(&db).unwrap(), "seed {}", seed);
    }
}

#[test]
fn test_addition_commutative_and_associative() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let (r, c) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = CsrMatrix::from_dense(&random_sparse_dense(&mut rng, r, c, 0.4));
        let b = CsrMatrix::from_dense(&random_sparse_dense(&mut rng, r, c, 0.4));
        let cm = CsrMatrix::from_dense(&random_sparse_dense(&mut rng, r, c, 0.4));

        let ab = a.add(&b).unwrap().to_dense();
        let ba = b.add(&a).unwrap().to_dense();
        assert_eq!(ab, ba);

        let left = a.add(&b).unwrap().add(&cm).unwrap().to_dense();
        let right = a.add(&b.add(&cm).unwrap()).unwrap().to_dense();
        assert_allclose_f64(left.as_slice(), right.as_slice(), 1e-12, 1e-12, "assoc");
    }
}

#[test]
fn test_multiplication_matches_dense() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let (m, k, n) = (
            rng.gen_range(1..7),
            rng.gen_range(1..7),
            rng.gen_range(1..7),
        );
        let da = random_sparse_dense(&mut rng, m, k, 0.4);
        let db = random_sparse_dense(&mut rng, k, n, 0.4);

        let product = CsrMatrix::from_dense(&da)
            .matmul(&CsrMatrix::from_dense(&db))
            .unwrap();
        check_invariants(&product);
        assert!(product.values().iter().all(|v| *v != 0.0), "stored zero from matmul");
        assert_eq!(product.shape(), [m, n]);
        assert_eq!(product.to_dense(), da.matmul(&db).unwrap(), "seed {}", seed);
    }
}

#[test]
fn test_sub_then_eliminate_zeros_is_empty() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let (r, c) = (rng.gen_range(1..8), rng.gen_range(1..8));
        let a = CsrMatrix::from_dense(&random_sparse_dense(&mut rng, r, c, 0.5));

        let mut diff = a.sub(&a).unwrap();
        assert_eq!(diff.nnz(), a.nnz());
        diff.eliminate_zeros();
        assert!(diff.is_empty());
    }
}

#[test]
fn test_transpose_matches_dense() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let (r, c) = (rng.gen_range(1..8), rng.gen_range(1..8));
        let d = random_sparse_dense(&mut rng, r, c, 0.3);

        let t = CsrMatrix::from_dense(&d).transpose();
        check_invariants(&t);
        assert_eq!(t.to_dense(), d.transpose());
    }
}

#[test]
fn test_scale_and_unscale() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let d = random_sparse_dense(&mut rng, 5, 5, 0.5);
        let original = CsrMatrix::from_dense(&d);

        let k: f64 = rng.gen_range(0.5..4.0);
        let mut m = original.clone();
        m.scale_in_place(k);
        m *= 1.0 / k;

        assert_eq!(m.row_ptrs(), original.row_ptrs());
        assert_eq!(m.col_indices(), original.col_indices());
        assert_allclose_f64(m.values(), original.values(), 1e-12, 0.0, "scale");
    }
}

#[test]
fn test_spmv_matches_dense() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let (r, c) = (rng.gen_range(1..8), rng.gen_range(1..8));
        let d = random_sparse_dense(&mut rng, r, c, 0.4);
        let x: Vec<f64> = (0..c).map(|_| rng.gen_range(-3i32..=3) as f64).collect();

        let y = CsrMatrix::from_dense(&d).spmv(&x).unwrap();
        let xd = DenseMatrix::from_rows(&x.iter().map(|&v| [v]).collect::<Vec<_>>()).unwrap();
        let expected = d.matmul(&xd).unwrap();
        assert_eq!(y.as_slice(), expected.as_slice());
    }
}

#[test]
fn test_determinant_of_product() {
    // det(AB) = det(A) det(B)
    for seed in 0..10 {
        let mut rng = seeded_rng(seed);
        let n = rng.gen_range(1..5);
        let da = random_sparse_dense(&mut rng, n, n, 0.7);
        let db = random_sparse_dense(&mut rng, n, n, 0.7);

        let a = CsrMatrix::from_dense(&da);
        let b = CsrMatrix::from_dense(&db);
        let det_ab = a.matmul(&b).unwrap().determinant().unwrap();
        let expected = a.determinant().unwrap() * b.determinant().unwrap();
        assert_allclose_f64(&[det_ab], &[expected], 1e-9, 1e-9, "det(AB)");
    }
}
