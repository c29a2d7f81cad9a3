//! Core dense implementation: struct, creation, indexing

use std::fmt;

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

/// Row-major dense matrix
///
/// Every row holds exactly `ncols` elements. The shape is fixed at
/// construction; individual elements can be changed through [`at_mut`].
///
/// [`at_mut`]: DenseMatrix::at_mut
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: Element> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: [usize; 2],
}

impl<T: Element> DenseMatrix<T> {
    /// Create a `rows × cols` matrix with every element set to `fill`
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            shape: [rows, cols],
        }
    }

    /// Create a `rows × cols` matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, T::zero())
    }

    /// Create a matrix from literal row data
    ///
    /// The column count is taken from the first row.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `rows` is empty or any row's length
    /// differs from the first row's.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or_else(|| Error::InvalidArgument {
            arg: "rows",
            reason: "at least one row is required".to_string(),
        })?;
        let ncols = first.as_ref().len();

        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(Error::InvalidArgument {
                    arg: "rows",
                    reason: format!("row {} has {} elements, expected {}", i, row.len(), ncols),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            shape: [rows.len(), ncols],
        })
    }

    /// Create a square matrix with `diag` on the diagonal and zeros elsewhere
    pub fn from_diagonal(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for (i, &v) in diag.iter().enumerate() {
            m.data[i * n + i] = v;
        }
        m
    }

    /// Returns the shape as [nrows, ncols]
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Returns the number of rows
    #[inline]
    pub fn nrows(&self) -> usize {
        self.shape[0]
    }

    /// Returns the number of columns
    #[inline]
    pub fn ncols(&self) -> usize {
        self.shape[1]
    }

    /// Returns true if the matrix has as many rows as columns
    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape[0] == self.shape[1]
    }

    /// Returns the element type tag
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        let [nrows, ncols] = self.shape;
        if row >= nrows {
            return Err(Error::row_out_of_bounds(row, nrows));
        }
        if col >= ncols {
            return Err(Error::col_out_of_bounds(col, ncols));
        }
        Ok(row * ncols + col)
    }

    /// Returns the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `row >= nrows` or `col >= ncols`.
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Returns a mutable reference to the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `row >= nrows` or `col >= ncols`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Returns one row as a slice
    pub fn row(&self, row: usize) -> Result<&[T]> {
        let [nrows, ncols] = self.shape;
        if row >= nrows {
            return Err(Error::row_out_of_bounds(row, nrows));
        }
        Ok(&self.data[row * ncols..(row + 1) * ncols])
    }

    /// Iterate over the rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact panics on 0; a zero-column matrix has no data anyway
        self.data.chunks_exact(self.shape[1].max(1))
    }

    /// Row-major view of all elements
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: Element + fmt::Display> fmt::Display for DenseMatrix<T> {
    /// One line per row, elements separated by a single space
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
