//! Error types for spmat

use thiserror::Error;

/// Result type alias using spmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index out of bounds along one axis
    #[error("{axis} index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// Axis the index refers to ("row" or "column")
        axis: &'static str,
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Operand shapes differ where they must be equal
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Inner dimensions of a product disagree
    #[error("Dimension mismatch: cannot multiply {lhs:?} by {rhs:?}")]
    DimensionMismatch {
        /// Left-hand side shape [rows, cols]
        lhs: [usize; 2],
        /// Right-hand side shape [rows, cols]
        rhs: [usize; 2],
    },

    /// Operation requires a square matrix
    #[error("Operation '{op}' requires a square matrix, got {shape:?}")]
    NotSquare {
        /// The operation name
        op: &'static str,
        /// Shape of the offending matrix
        shape: [usize; 2],
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Raw CSR arrays violate the format invariants
    #[error("Invalid CSR structure: {reason}")]
    InvalidStructure {
        /// Description of the violated invariant
        reason: String,
    },

    /// Cofactor expansion refused because the matrix order exceeds the configured limit
    #[error("Determinant of order {order} exceeds configured limit {limit}")]
    OrderLimitExceeded {
        /// Order of the matrix
        order: usize,
        /// Configured maximum order
        limit: usize,
    },
}

impl Error {
    /// Shorthand for a row index error
    pub(crate) fn row_out_of_bounds(index: usize, size: usize) -> Self {
        Error::IndexOutOfBounds {
            axis: "row",
            index,
            size,
        }
    }

    /// Shorthand for a column index error
    pub(crate) fn col_out_of_bounds(index: usize, size: usize) -> Self {
        Error::IndexOutOfBounds {
            axis: "column",
            index,
            size,
        }
    }
}
