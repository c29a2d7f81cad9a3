//! CSR (Compressed Sparse Row) format

mod conversion;
mod core;
mod elementwise;
mod linalg;
mod matmul;

pub use self::core::CsrMatrix;
