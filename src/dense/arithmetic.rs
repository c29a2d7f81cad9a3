//! Dense arithmetic: add, matmul, transpose, determinant

use super::DenseMatrix;
use crate::algorithm::validate::{validate_matmul_shapes, validate_same_shape};
use crate::algorithm::{DeterminantConfig, cofactor_determinant};
use crate::dtype::Element;
use crate::error::Result;

impl<T: Element> DenseMatrix<T> {
    /// Element-wise addition: C = A + B
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` unless both shapes are identical.
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate_same_shape(self.shape, other.shape)?;

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a + b)
            .collect();

        Ok(Self {
            data,
            shape: self.shape,
        })
    }

    /// Matrix product: C = A × B
    ///
    /// Standard triple loop; each accumulator starts at `T::zero()`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` unless `self.ncols() == other.nrows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let ([m, n], k) = validate_matmul_shapes(self.shape, other.shape)?;

        let mut out = Self::zeros(m, n);
        for i in 0..m {
            for j in 0..n {
                let mut acc = T::zero();
                for p in 0..k {
                    acc = acc + self.data[i * k + p] * other.data[p * n + j];
                }
                out.data[i * n + j] = acc;
            }
        }
        Ok(out)
    }

    /// Transpose: result[j][i] = self[i][j]
    pub fn transpose(&self) -> Self {
        let [nrows, ncols] = self.shape;
        let mut out = Self::zeros(ncols, nrows);
        for i in 0..nrows {
            for j in 0..ncols {
                out.data[j * nrows + i] = self.data[i * ncols + j];
            }
        }
        out
    }

    /// Determinant by cofactor expansion
    ///
    /// Cost is O(n!) in the order of the matrix; see
    /// [`determinant_with_config`](Self::determinant_with_config) to cap it.
    pub fn determinant(&self) -> Result<T> {
        cofactor_determinant(self, &DeterminantConfig::default())
    }

    /// Determinant by cofactor expansion with an explicit configuration
    pub fn determinant_with_config(&self, config: &DeterminantConfig) -> Result<T> {
        cofactor_determinant(self, config)
    }

    /// Largest absolute element-wise difference, computed in f64
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` unless both shapes are identical.
    pub fn max_abs_diff(&self, other: &Self) -> Result<f64> {
        validate_same_shape(self.shape, other.shape)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| (a.to_f64() - b.to_f64()).abs())
            .fold(0.0, f64::max))
    }
}
