//! # spmat
//!
//! **Dense and compressed sparse row (CSR) matrices over generic numeric element types.**
//!
//! spmat provides a row-major dense container and a CSR sparse container with
//! addition, multiplication, scalar scaling, transpose, trace and determinant.
//! Sparse addition and multiplication run directly on the compressed arrays.
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::prelude::*;
//!
//! let a = CsrMatrix::from_dense(&DenseMatrix::from_rows(&[[1.0, 2.0], [0.0, 3.0]])?);
//! let b = CsrMatrix::from_dense(&DenseMatrix::from_rows(&[[0.0, 1.0], [4.0, 0.0]])?);
//!
//! let sum = a.add(&b)?;
//! let product = a.matmul(&b)?;
//!
//! assert_eq!(sum.to_dense().as_slice(), &[1.0, 3.0, 4.0, 3.0]);
//! assert_eq!(product.at(0, 0)?, 8.0);
//! # Ok::<(), spmat::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16`: Half-precision element types (`half::f16`, `half::bf16`)
//!
//! ## Logging
//!
//! Operations emit records through the [`log`](https://docs.rs/log) facade:
//! `debug` for structural operations, `trace` for conversions, and `warn` when
//! a cofactor expansion is started on a large matrix.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod dense;
pub mod dtype;
pub mod error;
pub mod sparse;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::DeterminantConfig;
    pub use crate::dense::DenseMatrix;
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::sparse::{CsrMatrix, SparseStorage};
}
