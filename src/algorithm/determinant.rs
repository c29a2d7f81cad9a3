//! Determinant by cofactor (Laplace) expansion
//!
//! # Algorithm
//!
//! Expansion along the first row:
//! ```text
//! det(A) = Σ_c (-1)^c · A[0][c] · det(minor(A, 0, c))
//! ```
//! with closed forms for orders 1 and 2. Unsigned element types carry the
//! positive and negative cofactor sums separately and subtract once at the
//! end, so no intermediate value has to be negative. Every level allocates `n` minors of
//! order `n - 1`, so the cost grows as O(n!). This is the documented algorithm
//! for the small matrices the crate targets; it is not a substitute for an
//! LU-based determinant on large inputs.

use super::validate::validate_square;
use crate::dense::DenseMatrix;
use crate::dtype::Element;
use crate::error::{Error, Result};

/// Orders above this log a warning before expansion starts.
const LARGE_ORDER_WARNING: usize = 10;

/// Options for cofactor expansion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeterminantConfig {
    /// Refuse matrices of higher order with `Error::OrderLimitExceeded`.
    ///
    /// `None` (the default) expands matrices of any order.
    pub max_order: Option<usize>,
}

impl DeterminantConfig {
    /// Config that rejects matrices of order greater than `max_order`
    pub fn with_max_order(max_order: usize) -> Self {
        Self {
            max_order: Some(max_order),
        }
    }
}

/// Determinant of a square dense matrix by cofactor expansion
///
/// The determinant of a 0×0 matrix is one (the empty product).
///
/// # Errors
///
/// - `Error::NotSquare` if the matrix is not square
/// - `Error::OrderLimitExceeded` if `config.max_order` is set and exceeded
/// - `Error::InvalidArgument` if `T` is unsigned and the determinant is negative
pub fn cofactor_determinant<T: Element>(
    matrix: &DenseMatrix<T>,
    config: &DeterminantConfig,
) -> Result<T> {
    let n = validate_square(matrix.shape(), "determinant")?;

    if let Some(limit) = config.max_order {
        if n > limit {
            return Err(Error::OrderLimitExceeded { order: n, limit });
        }
    }
    if n > LARGE_ORDER_WARNING {
        log::warn!(
            "cofactor expansion on an order {} matrix; cost grows factorially",
            n
        );
    }
    log::debug!("determinant: cofactor expansion, order {}", n);

    if n == 0 {
        return Ok(T::one());
    }
    if T::DTYPE.is_unsigned_int() {
        let (pos, neg) = expand_split(matrix.as_slice(), n);
        if pos < neg {
            return Err(Error::InvalidArgument {
                arg: "matrix",
                reason: format!("determinant is negative, not representable as {}", T::DTYPE),
            });
        }
        return Ok(pos - neg);
    }
    Ok(expand(matrix.as_slice(), n))
}

/// Copy the minor that drops row 0 and column `col` into `minor`
fn fill_minor<T: Element>(a: &[T], n: usize, col: usize, minor: &mut Vec<T>) {
    minor.clear();
    for row in 1..n {
        let start = row * n;
        minor.extend(
            a[start..start + n]
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v),
        );
    }
}

/// Expand a row-major `n × n` block along its first row
fn expand<T: Element>(a: &[T], n: usize) -> T {
    if n == 1 {
        return a[0];
    }
    if n == 2 {
        return a[0] * a[3] - a[1] * a[2];
    }

    let m = n - 1;
    let mut minor = Vec::with_capacity(m * m);
    let mut det = T::zero();

    for col in 0..n {
        fill_minor(a, n, col, &mut minor);
        let term = a[col] * expand(&minor, m);
        det = if col % 2 == 0 { det + term } else { det - term };
    }

    det
}

/// Expansion as `(pos, neg)` with `det = pos - neg`, for non-negative entries
fn expand_split<T: Element>(a: &[T], n: usize) -> (T, T) {
    if n == 1 {
        return (a[0], T::zero());
    }
    if n == 2 {
        return (a[0] * a[3], a[1] * a[2]);
    }

    let m = n - 1;
    let mut minor = Vec::with_capacity(m * m);
    let (mut pos, mut neg) = (T::zero(), T::zero());

    for col in 0..n {
        fill_minor(a, n, col, &mut minor);
        let (p, q) = expand_split(&minor, m);
        // An odd column flips the sign of the minor's determinant
        if col % 2 == 0 {
            pos = pos + a[col] * p;
            neg = neg + a[col] * q;
        } else {
            pos = pos + a[col] * q;
            neg = neg + a[col] * p;
        }
    }

    (pos, neg)
}
