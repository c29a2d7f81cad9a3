//! Dense row-major matrices
//!
//! The dense container is the input and inspection representation for the
//! sparse formats: sparse matrices are built from it and densified back into
//! it for checks and for the determinant.

mod arithmetic;
mod core;

pub use self::core::DenseMatrix;
