//! CSR element-wise operations: add, sub, mul, scalar scaling

use std::ops::MulAssign;

use super::CsrMatrix;
use crate::algorithm::validate::validate_same_shape;
use crate::dtype::Element;
use crate::error::Result;
use crate::sparse::SparseStorage;
use crate::sparse::merge::{MergeStrategy, merge_csr_impl};

impl<T: Element> CsrMatrix<T> {
    /// Element-wise addition: C = A + B
    ///
    /// # Algorithm
    ///
    /// Row-by-row two-pointer merge of the sorted column indices (union
    /// semantics). Columns present in one operand are copied; columns present in
    /// both are summed. O(nnz_a + nnz_b).
    ///
    /// Where two entries cancel exactly, the zero sum is still stored. This
    /// differs from [`matmul`](Self::matmul), which drops zero results; call
    /// [`eliminate_zeros`](Self::eliminate_zeros) when stored-zero freedom matters.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` unless both shapes are identical.
    ///
    /// # Example
    ///
    /// ```
    /// # use spmat::prelude::*;
    /// // A:          B:          C = A + B:
    /// // [1, 0]      [0, 2]      [1, 2]
    /// // [0, 3]  +   [4, 0]  =   [4, 3]
    /// let a = CsrMatrix::from_dense(&DenseMatrix::from_rows(&[[1.0, 0.0], [0.0, 3.0]])?);
    /// let b = CsrMatrix::from_dense(&DenseMatrix::from_rows(&[[0.0, 2.0], [4.0, 0.0]])?);
    /// let c = a.add(&b)?;
    /// assert_eq!(c.values(), &[1.0, 2.0, 4.0, 3.0]);
    /// # Ok::<(), spmat::error::Error>(())
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate_same_shape(self.shape, other.shape)?;

        let out = merge_csr_impl(
            self,
            other,
            MergeStrategy::Union,
            |a, b| a + b,
            |a| a,
            |b| b,
        );
        log::debug!(
            "csr add {:?}: nnz {} + {} -> {}",
            self.shape,
            self.nnz(),
            other.nnz(),
            out.nnz()
        );
        Ok(out)
    }

    /// Element-wise subtraction: C = A - B
    ///
    /// Same merge as [`add`](Self::add); B-only entries become `0 - b`, so
    /// unsigned element types underflow on them.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` unless both shapes are identical.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        validate_same_shape(self.shape, other.shape)?;

        Ok(merge_csr_impl(
            self,
            other,
            MergeStrategy::Union,
            |a, b| a - b,
            |a| a,
            |b| T::zero() - b,
        ))
    }

    /// Element-wise (Hadamard) product: C = A .* B
    ///
    /// Intersection merge: only columns stored in both operands survive.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` unless both shapes are identical.
    pub fn mul_elementwise(&self, other: &Self) -> Result<Self> {
        validate_same_shape(self.shape, other.shape)?;

        Ok(merge_csr_impl(
            self,
            other,
            MergeStrategy::Intersection,
            |a, b| a * b,
            |a| a,
            |b| b,
        ))
    }

    /// Multiply every stored value by `scalar`, in place
    ///
    /// The sparsity structure is unchanged: scaling by zero leaves every entry
    /// stored with value zero.
    pub fn scale_in_place(&mut self, scalar: T) {
        for v in &mut self.values {
            *v = *v * scalar;
        }
    }
}

impl<T: Element> MulAssign<T> for CsrMatrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_in_place(scalar);
    }
}
