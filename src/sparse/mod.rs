//! Sparse matrix support for spmat
//!
//! # CSR (Compressed Sparse Row)
//!
//! Three parallel arrays plus a shape:
//!
//! ```text
//! [5, 0, 0]        values      = [5, 8, 3, 6]
//! [0, 8, 0]   ->   col_indices = [0, 1, 0, 2]
//! [3, 0, 6]        row_ptrs    = [0, 1, 2, 4]
//! ```
//!
//! Row `r` occupies `row_ptrs[r]..row_ptrs[r + 1]` of `values`/`col_indices`, with
//! columns strictly increasing inside each row. Storage is O(nnz + nrows).
//! Addition and multiplication work directly on this representation; only the
//! determinant densifies.
//!
//! # Usage
//!
//! ```
//! # use spmat::prelude::*;
//! let dense = DenseMatrix::from_rows(&[[5.0, 0.0, 0.0], [0.0, 8.0, 0.0], [3.0, 0.0, 6.0]])?;
//! let csr = CsrMatrix::from_dense(&dense);
//!
//! assert_eq!(csr.row_ptrs(), &[0, 1, 2, 4]);
//! assert_eq!(csr.trace()?, 19.0);
//!
//! let squared = csr.matmul(&csr)?;
//! assert_eq!(squared.at(2, 0)?, 33.0);
//! # Ok::<(), spmat::error::Error>(())
//! ```

mod csr;
mod format;
pub(crate) mod merge;

pub use csr::CsrMatrix;
pub use format::SparseStorage;
