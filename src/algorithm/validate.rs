//! Shape validation shared by the dense and sparse containers

use crate::error::{Error, Result};

/// Validate that two operands of an element-wise operation share a shape
pub fn validate_same_shape(lhs: [usize; 2], rhs: [usize; 2]) -> Result<()> {
    if lhs != rhs {
        return Err(Error::ShapeMismatch {
            expected: lhs.to_vec(),
            got: rhs.to_vec(),
        });
    }
    Ok(())
}

/// Validate matrix product dimensions
///
/// Returns the output shape `[m, n]` and the shared inner dimension `k`.
pub fn validate_matmul_shapes(lhs: [usize; 2], rhs: [usize; 2]) -> Result<([usize; 2], usize)> {
    let [m, k_a] = lhs;
    let [k_b, n] = rhs;

    if k_a != k_b {
        return Err(Error::DimensionMismatch { lhs, rhs });
    }

    Ok(([m, n], k_a))
}

/// Validate that a matrix is square, returning its order
pub fn validate_square(shape: [usize; 2], op: &'static str) -> Result<usize> {
    let [nrows, ncols] = shape;
    if nrows != ncols {
        return Err(Error::NotSquare { op, shape });
    }
    Ok(nrows)
}
