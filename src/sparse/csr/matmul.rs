//! CSR matrix multiplication: SpGEMM and SpMV

use super::CsrMatrix;
use crate::algorithm::validate::validate_matmul_shapes;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::sparse::SparseStorage;

impl<T: Element> CsrMatrix<T> {
    /// Sparse matrix multiplication: C = A × B
    ///
    /// # Algorithm
    ///
    /// Row-wise gather-accumulate:
    /// ```text
    /// For each row i of A:
    ///   acc[0..n] = 0
    ///   For each stored A[i,k]:
    ///     For each stored B[k,j]:
    ///       acc[j] += A[i,k] * B[k,j]
    ///   Append every j with acc[j] != 0, in column order
    /// ```
    /// The accumulator is the only dense storage, one row of `other.ncols()`
    /// at a time. Work is proportional to the structural fan-out
    /// Σ_i Σ_{k in row i} nnz(B[k,:]) plus `n` per row for the scan.
    ///
    /// Zero results are dropped, including entries that were touched and
    /// cancelled. [`add`](Self::add) keeps such entries.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` unless `self.ncols() == other.nrows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let ([m, n], _k) = validate_matmul_shapes(self.shape, other.shape)?;

        let mut row_ptrs: Vec<usize> = Vec::with_capacity(m + 1);
        let mut col_indices: Vec<usize> = Vec::new();
        let mut values: Vec<T> = Vec::new();
        let mut acc: Vec<T> = vec![T::zero(); n];

        row_ptrs.push(0);

        for row in 0..m {
            for a_idx in self.row_ptrs[row]..self.row_ptrs[row + 1] {
                let a_val = self.values[a_idx];
                let k = self.col_indices[a_idx];

                for b_idx in other.row_ptrs[k]..other.row_ptrs[k + 1] {
                    let j = other.col_indices[b_idx];
                    acc[j] = acc[j] + a_val * other.values[b_idx];
                }
            }

            // Scan in column order and reset for the next row
            for (col, slot) in acc.iter_mut().enumerate() {
                if !slot.is_zero() {
                    col_indices.push(col);
                    values.push(*slot);
                    *slot = T::zero();
                }
            }
            row_ptrs.push(values.len());
        }

        log::debug!(
            "csr matmul {:?} x {:?}: nnz {} x {} -> {}",
            self.shape,
            other.shape,
            self.nnz(),
            other.nnz(),
            values.len()
        );

        Ok(Self {
            row_ptrs,
            col_indices,
            values,
            shape: [m, n],
        })
    }

    /// Sparse matrix-vector multiplication: y = A · x
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` if `x.len() != self.ncols()`.
    pub fn spmv(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.ncols() {
            return Err(Error::ShapeMismatch {
                expected: vec![self.ncols()],
                got: vec![x.len()],
            });
        }

        let y = (0..self.nrows())
            .map(|row| {
                (self.row_ptrs[row]..self.row_ptrs[row + 1]).fold(T::zero(), |sum, pos| {
                    sum + self.values[pos] * x[self.col_indices[pos]]
                })
            })
            .collect();
        Ok(y)
    }
}
