//! Common test utilities
#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use spmat::dense::DenseMatrix;

/// Seeded RNG so failures reproduce
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random dense matrix where each element is non-zero with probability `density`
///
/// Non-zero values are small integers stored as f64, so sums and products of
/// modest size stay exact.
pub fn random_sparse_dense(rng: &mut StdRng, rows: usize, cols: usize, density: f64) -> DenseMatrix<f64> {
    let mut m = DenseMatrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            if rng.gen_bool(density) {
                let v: i32 = rng.gen_range(-9..=9);
                *m.at_mut(i, j).unwrap() = v as f64;
            }
        }
    }
    m
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert the CSR structural invariants hold
pub fn assert_csr_invariants(row_ptrs: &[usize], col_indices: &[usize], nnz: usize, shape: [usize; 2]) {
    let [nrows, ncols] = shape;
    assert_eq!(row_ptrs.len(), nrows + 1, "row_ptrs length");
    assert_eq!(row_ptrs[0], 0, "First row pointer should be 0");
    assert_eq!(row_ptrs[nrows], nnz, "Last row pointer should be nnz");
    assert_eq!(col_indices.len(), nnz, "col_indices length");
    for row in 0..nrows {
        assert!(row_ptrs[row] <= row_ptrs[row + 1], "row_ptrs decreases at {}", row);
        let seg = &col_indices[row_ptrs[row]..row_ptrs[row + 1]];
        for w in seg.windows(2) {
            assert!(w[0] < w[1], "row {} columns not strictly increasing", row);
        }
        for &c in seg {
            assert!(c < ncols, "column {} out of range", c);
        }
    }
}
