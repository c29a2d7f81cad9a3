//! CSR format conversion: from_dense, to_dense, transpose

use super::CsrMatrix;
use crate::dense::DenseMatrix;
use crate::dtype::Element;
use crate::sparse::SparseStorage;

impl<T: Element> CsrMatrix<T> {
    /// Compress a dense matrix
    ///
    /// Single row-major pass; every element that is not `T::zero()` is appended
    /// with its column, and the running count is appended to `row_ptrs` after
    /// each row. O(nrows * ncols).
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let [nrows, ncols] = dense.shape();

        let mut row_ptrs: Vec<usize> = Vec::with_capacity(nrows + 1);
        let mut col_indices: Vec<usize> = Vec::new();
        let mut values: Vec<T> = Vec::new();

        row_ptrs.push(0);
        for row in dense.rows().take(nrows) {
            for (col, &v) in row.iter().enumerate() {
                if !v.is_zero() {
                    values.push(v);
                    col_indices.push(col);
                }
            }
            row_ptrs.push(values.len());
        }
        // Zero-column matrices yield no row slices
        row_ptrs.resize(nrows + 1, values.len());

        log::trace!(
            "from_dense: {}x{} -> nnz {}",
            nrows,
            ncols,
            values.len()
        );

        Self {
            row_ptrs,
            col_indices,
            values,
            shape: [nrows, ncols],
        }
    }

    /// Expand into a dense matrix
    ///
    /// Zero-filled, then every stored entry is written. O(nnz + nrows * ncols)
    /// for the allocation.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let [nrows, ncols] = self.shape;
        let mut dense = DenseMatrix::zeros(nrows, ncols);

        for row in 0..nrows {
            for pos in self.row_ptrs[row]..self.row_ptrs[row + 1] {
                dense.data[row * ncols + self.col_indices[pos]] = self.values[pos];
            }
        }
        dense
    }

    /// Transpose without densifying
    ///
    /// Counting sort on column indices: count entries per column, prefix-sum
    /// into the new row pointers, then scatter rows in order so each output row
    /// comes out sorted. O(nnz + ncols).
    pub fn transpose(&self) -> Self {
        let [nrows, ncols] = self.shape;
        let nnz = self.nnz();

        let mut t_row_ptrs = vec![0usize; ncols + 1];
        for &col in &self.col_indices {
            t_row_ptrs[col + 1] += 1;
        }
        for i in 1..=ncols {
            t_row_ptrs[i] += t_row_ptrs[i - 1];
        }

        let mut next = t_row_ptrs.clone();
        let mut t_col_indices = vec![0usize; nnz];
        let mut t_values = vec![T::zero(); nnz];

        for row in 0..nrows {
            for pos in self.row_ptrs[row]..self.row_ptrs[row + 1] {
                let col = self.col_indices[pos];
                let dst = next[col];
                t_col_indices[dst] = row;
                t_values[dst] = self.values[pos];
                next[col] += 1;
            }
        }

        Self {
            row_ptrs: t_row_ptrs,
            col_indices: t_col_indices,
            values: t_values,
            shape: [ncols, nrows],
        }
    }
}

impl<T: Element> From<&DenseMatrix<T>> for CsrMatrix<T> {
    fn from(dense: &DenseMatrix<T>) -> Self {
        Self::from_dense(dense)
    }
}
