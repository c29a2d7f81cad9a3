//! Algorithms shared by the dense and sparse containers
//!
//! - [`determinant`]: cofactor expansion and its configuration
//! - [`validate`]: shape checks producing the crate's error taxonomy

pub mod determinant;
pub mod validate;

pub use determinant::{DeterminantConfig, cofactor_determinant};
