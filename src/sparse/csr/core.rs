//! Core CSR implementation: struct, creation, getters, lookup

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

use super::super::format::SparseStorage;

/// CSR (Compressed Sparse Row) sparse matrix
///
/// # Invariants
///
/// - `row_ptrs.len() == nrows + 1`, `row_ptrs[0] == 0`, `row_ptrs[nrows] == nnz`,
///   non-decreasing
/// - `col_indices.len() == values.len() == nnz`
/// - Row `r` occupies `row_ptrs[r]..row_ptrs[r + 1]`, and its column indices are
///   strictly increasing and below `ncols`
///
/// Matrices built from dense data never store a zero. Arithmetic may leave stored
/// zeros behind (see [`add`](Self::add)); [`at`](Self::at) reports them the same
/// as structural zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T: Element> {
    pub(crate) row_ptrs: Vec<usize>,
    pub(crate) col_indices: Vec<usize>,
    pub(crate) values: Vec<T>,
    pub(crate) shape: [usize; 2],
}

impl<T: Element> CsrMatrix<T> {
    /// Create a CSR matrix from raw components, validating every invariant
    ///
    /// # Arguments
    ///
    /// * `row_ptrs` - Row pointers (length: nrows + 1)
    /// * `col_indices` - Column indices for each stored value
    /// * `values` - Stored values
    /// * `shape` - Matrix shape [nrows, ncols]
    ///
    /// # Errors
    ///
    /// - `Error::ShapeMismatch` if `row_ptrs.len() != nrows + 1` or
    ///   `col_indices.len() != values.len()`
    /// - `Error::InvalidStructure` if `row_ptrs` does not start at 0, end at nnz,
    ///   or decreases, if a row's columns are not strictly increasing, or if
    ///   `nrows + 1` overflows `usize`
    /// - `Error::IndexOutOfBounds` if a column index is `>= ncols`
    pub fn from_raw_parts(
        row_ptrs: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
        shape: [usize; 2],
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        let nnz = values.len();
        let ptr_len = nrows.checked_add(1).ok_or_else(|| Error::InvalidStructure {
            reason: format!("row count {} leaves no room for row_ptrs", nrows),
        })?;

        if row_ptrs.len() != ptr_len {
            return Err(Error::ShapeMismatch {
                expected: vec![ptr_len],
                got: vec![row_ptrs.len()],
            });
        }
        if col_indices.len() != nnz {
            return Err(Error::ShapeMismatch {
                expected: vec![nnz],
                got: vec![col_indices.len()],
            });
        }
        if row_ptrs[0] != 0 || row_ptrs[nrows] != nnz {
            return Err(Error::InvalidStructure {
                reason: format!(
                    "expected row_ptrs[0]=0 and row_ptrs[{}]={}, got {} and {}",
                    nrows, nnz, row_ptrs[0], row_ptrs[nrows]
                ),
            });
        }

        // Monotonicity first, so every segment below is in range
        for (row, bounds) in row_ptrs.windows(2).enumerate() {
            if bounds[0] > bounds[1] {
                return Err(Error::InvalidStructure {
                    reason: format!(
                        "row_ptrs decreases at row {}: {} > {}",
                        row, bounds[0], bounds[1]
                    ),
                });
            }
        }

        for (row, bounds) in row_ptrs.windows(2).enumerate() {
            let segment = &col_indices[bounds[0]..bounds[1]];
            for (k, &col) in segment.iter().enumerate() {
                if col >= ncols {
                    return Err(Error::col_out_of_bounds(col, ncols));
                }
                if k > 0 && segment[k - 1] >= col {
                    return Err(Error::InvalidStructure {
                        reason: format!(
                            "row {} columns not strictly increasing: {} then {}",
                            row,
                            segment[k - 1],
                            col
                        ),
                    });
                }
            }
        }

        Ok(Self::from_raw_parts_unchecked(
            row_ptrs,
            col_indices,
            values,
            shape,
        ))
    }

    /// Create a CSR matrix from raw components without validation
    ///
    /// The caller guarantees the invariants listed on [`CsrMatrix`]. Violating them
    /// is memory-safe but makes lookup and arithmetic return wrong results or
    /// panic on an out-of-range slice index.
    pub fn from_raw_parts_unchecked(
        row_ptrs: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
        shape: [usize; 2],
    ) -> Self {
        debug_assert_eq!(row_ptrs.len(), shape[0] + 1);
        debug_assert_eq!(col_indices.len(), values.len());
        Self {
            row_ptrs,
            col_indices,
            values,
            shape,
        }
    }

    /// Create an empty CSR matrix
    pub fn empty(shape: [usize; 2]) -> Self {
        let [nrows, _ncols] = shape;
        Self {
            row_ptrs: vec![0; nrows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
            shape,
        }
    }

    /// Returns the row pointers
    #[inline]
    pub fn row_ptrs(&self) -> &[usize] {
        &self.row_ptrs
    }

    /// Returns the column indices
    #[inline]
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Returns the stored values
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Decompose into (row_ptrs, col_indices, values, shape)
    pub fn into_raw_parts(self) -> (Vec<usize>, Vec<usize>, Vec<T>, [usize; 2]) {
        (self.row_ptrs, self.col_indices, self.values, self.shape)
    }

    #[inline]
    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.shape[0] {
            return Err(Error::row_out_of_bounds(row, self.shape[0]));
        }
        Ok(())
    }

    /// Returns the column indices and values of one row segment
    pub fn row(&self, row: usize) -> Result<(&[usize], &[T])> {
        self.check_row(row)?;
        let range = self.row_ptrs[row]..self.row_ptrs[row + 1];
        Ok((&self.col_indices[range.clone()], &self.values[range]))
    }

    /// Returns the number of stored entries in a row
    pub fn row_nnz(&self, row: usize) -> Result<usize> {
        self.check_row(row)?;
        Ok(self.row_ptrs[row + 1] - self.row_ptrs[row])
    }

    /// Returns the element at (row, col)
    ///
    /// Linear scan of the row segment; positions without a stored entry read as
    /// `T::zero()`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `row >= nrows` or `col >= ncols`.
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        self.check_row(row)?;
        if col >= self.shape[1] {
            return Err(Error::col_out_of_bounds(col, self.shape[1]));
        }

        for pos in self.row_ptrs[row]..self.row_ptrs[row + 1] {
            if self.col_indices[pos] == col {
                return Ok(self.values[pos]);
            }
        }
        Ok(T::zero())
    }

    /// Extract the diagonal elements
    ///
    /// Returns `min(nrows, ncols)` values. Missing diagonal entries are zeros.
    pub fn diagonal(&self) -> Vec<T> {
        let n = self.shape[0].min(self.shape[1]);
        let mut diag = vec![T::zero(); n];

        for (row, slot) in diag.iter_mut().enumerate() {
            for pos in self.row_ptrs[row]..self.row_ptrs[row + 1] {
                if self.col_indices[pos] == row {
                    *slot = self.values[pos];
                    break;
                }
            }
        }
        diag
    }

    /// Check if the matrix has a structural entry on every diagonal position.
    ///
    /// For rectangular matrices, checks positions `0..min(nrows, ncols)`.
    /// A stored zero counts as present.
    pub fn has_full_diagonal(&self) -> bool {
        let n = self.shape[0].min(self.shape[1]);
        (0..n).all(|row| {
            self.col_indices[self.row_ptrs[row]..self.row_ptrs[row + 1]].contains(&row)
        })
    }

    /// Remove stored zeros in place, preserving order
    ///
    /// Returns the number of entries removed. Values read through [`at`](Self::at)
    /// do not change.
    pub fn eliminate_zeros(&mut self) -> usize {
        let nrows = self.shape[0];
        let before = self.values.len();
        let mut write = 0;
        let mut start = 0;

        for row in 0..nrows {
            let end = self.row_ptrs[row + 1];
            for read in start..end {
                if !self.values[read].is_zero() {
                    self.values[write] = self.values[read];
                    self.col_indices[write] = self.col_indices[read];
                    write += 1;
                }
            }
            start = end;
            self.row_ptrs[row + 1] = write;
        }

        self.values.truncate(write);
        self.col_indices.truncate(write);

        let removed = before - write;
        log::debug!("eliminate_zeros: removed {} of {} stored entries", removed, before);
        removed
    }
}

impl<T: Element> SparseStorage for CsrMatrix<T> {
    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn dtype(&self) -> DType {
        T::DTYPE
    }

    fn memory_usage(&self) -> usize {
        let index_size = std::mem::size_of::<usize>();
        let ptr_size = (self.nrows() + 1) * index_size;
        let col_size = self.nnz() * index_size;
        let value_size = self.nnz() * self.dtype().size_in_bytes();
        ptr_size + col_size + value_size
    }
}
