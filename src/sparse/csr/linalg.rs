//! CSR trace and determinant

use super::CsrMatrix;
use crate::algorithm::validate::validate_square;
use crate::algorithm::{DeterminantConfig, cofactor_determinant};
use crate::dtype::Element;
use crate::error::Result;

impl<T: Element> CsrMatrix<T> {
    /// Sum of the diagonal entries
    ///
    /// Each row's segment is scanned until its diagonal column is found; rows
    /// without one contribute zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotSquare` for a non-square matrix.
    pub fn trace(&self) -> Result<T> {
        let n = validate_square(self.shape, "trace")?;

        let mut sum = T::zero();
        for row in 0..n {
            for pos in self.row_ptrs[row]..self.row_ptrs[row + 1] {
                if self.col_indices[pos] == row {
                    sum = sum + self.values[pos];
                    break;
                }
            }
        }
        Ok(sum)
    }

    /// Determinant by cofactor expansion of the densified matrix
    ///
    /// O(n!) in the order of the matrix with no built-in limit. Use
    /// [`determinant_with_config`](Self::determinant_with_config) to refuse large
    /// inputs.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotSquare` for a non-square matrix.
    pub fn determinant(&self) -> Result<T> {
        self.determinant_with_config(&DeterminantConfig::default())
    }

    /// Determinant by cofactor expansion with an explicit configuration
    ///
    /// # Errors
    ///
    /// - `Error::NotSquare` for a non-square matrix
    /// - `Error::OrderLimitExceeded` when `config.max_order` is exceeded
    pub fn determinant_with_config(&self, config: &DeterminantConfig) -> Result<T> {
        // Checked before densifying
        validate_square(self.shape, "determinant")?;
        cofactor_determinant(&self.to_dense(), config)
    }
}
