//! Sorted-merge kernel for CSR element-wise operations
//!
//! One parameterised routine serves addition, subtraction and the
//! element-wise product. Each row of the two operands is walked with two
//! cursors over the column-sorted segments:
//!
//! ```text
//! a_col < b_col  -> A-only entry:  emit only_a(a), advance A
//! a_col > b_col  -> B-only entry:  emit only_b(b), advance B
//! a_col == b_col -> both present:  emit op(a, b),  advance both
//! ```
//!
//! An exhausted cursor reports column `usize::MAX`, so the remaining entries of
//! the other operand drain through the "only" branches. Output columns stay
//! strictly increasing and `row_ptrs` is the running count of emitted entries.
//!
//! | Operation | Strategy     | op         | only_a | only_b   |
//! |-----------|--------------|------------|--------|----------|
//! | add       | Union        | a + b      | a      | b        |
//! | sub       | Union        | a - b      | a      | 0 - b    |
//! | mul       | Intersection | a * b      | -      | -        |
//!
//! Results of `op` are stored even when they are exactly zero; callers that
//! need stored-zero freedom run `eliminate_zeros` afterwards.

use crate::dtype::Element;
use crate::sparse::CsrMatrix;

/// Strategy for merging two sparse matrices
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MergeStrategy {
    /// Keep positions present in either operand
    Union,
    /// Keep only positions present in both operands
    Intersection,
}

/// Merge two same-shape CSR matrices row by row
///
/// The caller validates shapes.
pub(crate) fn merge_csr_impl<T, F, FA, FB>(
    a: &CsrMatrix<T>,
    b: &CsrMatrix<T>,
    strategy: MergeStrategy,
    op: F,
    only_a_op: FA,
    only_b_op: FB,
) -> CsrMatrix<T>
where
    T: Element,
    F: Fn(T, T) -> T,
    FA: Fn(T) -> T,
    FB: Fn(T) -> T,
{
    let [nrows, _ncols] = a.shape;

    let capacity = match strategy {
        MergeStrategy::Union => a.values.len() + b.values.len(),
        MergeStrategy::Intersection => a.values.len().min(b.values.len()),
    };
    let mut out_row_ptrs: Vec<usize> = Vec::with_capacity(nrows + 1);
    let mut out_col_indices: Vec<usize> = Vec::with_capacity(capacity);
    let mut out_values: Vec<T> = Vec::with_capacity(capacity);

    out_row_ptrs.push(0);

    for row in 0..nrows {
        let a_end = a.row_ptrs[row + 1];
        let b_end = b.row_ptrs[row + 1];
        let mut i = a.row_ptrs[row];
        let mut j = b.row_ptrs[row];

        match strategy {
            MergeStrategy::Union => {
                while i < a_end || j < b_end {
                    let a_col = if i < a_end {
                        a.col_indices[i]
                    } else {
                        usize::MAX
                    };
                    let b_col = if j < b_end {
                        b.col_indices[j]
                    } else {
                        usize::MAX
                    };

                    if a_col < b_col {
                        out_col_indices.push(a_col);
                        out_values.push(only_a_op(a.values[i]));
                        i += 1;
                    } else if a_col > b_col {
                        out_col_indices.push(b_col);
                        out_values.push(only_b_op(b.values[j]));
                        j += 1;
                    } else {
                        out_col_indices.push(a_col);
                        out_values.push(op(a.values[i], b.values[j]));
                        i += 1;
                        j += 1;
                    }
                }
            }
            MergeStrategy::Intersection => {
                while i < a_end && j < b_end {
                    let a_col = a.col_indices[i];
                    let b_col = b.col_indices[j];

                    if a_col < b_col {
                        i += 1;
                    } else if a_col > b_col {
                        j += 1;
                    } else {
                        out_col_indices.push(a_col);
                        out_values.push(op(a.values[i], b.values[j]));
                        i += 1;
                        j += 1;
                    }
                }
            }
        }

        out_row_ptrs.push(out_col_indices.len());
    }

    CsrMatrix {
        row_ptrs: out_row_ptrs,
        col_indices: out_col_indices,
        values: out_values,
        shape: a.shape,
    }
}
