//! Reference SpGEMM over CSR storage
//!
//! A second, independent multiplication used to cross-check
//! [`SparseMatrix::multiply`](crate::SparseMatrix::multiply). It works row
//! by row on the CSR arrays with a per-row hashmap accumulator.

use std::collections::HashMap;

use crate::error::{MatrixError, Result};
use crate::matrix::arithmetic::Operation;
use crate::matrix::csr::{row_ptr_with_capacity, SparseMatrixCSR};
use crate::matrix::element::Element;
use crate::matrix::sparse::Shape;

/// Performs sparse matrix multiplication using a simple row-wise algorithm
///
/// # Errors
///
/// `DimensionMismatch` if `a.n_cols != b.n_rows`, `Overflow` if an
/// intermediate value does not fit in `T`, and `TooLarge` if the result's
/// row offsets cannot be allocated.
pub fn reference_spgemm<T: Element>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
) -> Result<SparseMatrixCSR<T>> {
    if a.n_cols != b.n_rows {
        return Err(MatrixError::DimensionMismatch {
            operation: Operation::Multiply,
            left: Shape::new(a.n_rows, a.n_cols),
            right: Shape::new(b.n_rows, b.n_cols),
        });
    }

    let n_rows = a.n_rows;
    let n_cols = b.n_cols;

    let mut row_ptr = row_ptr_with_capacity(n_rows, Shape::new(n_rows, n_cols))?;
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    row_ptr.push(0);

    for i in 0..n_rows {
        let mut accum: HashMap<usize, T> = HashMap::new();

        for (k, &a_val) in a.row_iter(i) {
            for (j, &b_val) in b.row_iter(k) {
                let overflow = || MatrixError::Overflow {
                    operation: Operation::Multiply,
                    row: i,
                    col: j,
                };
                let product = a_val.checked_mul(&b_val).ok_or_else(overflow)?;
                let slot = accum.entry(j).or_insert_with(T::zero);
                *slot = slot.checked_add(&product).ok_or_else(overflow)?;
            }
        }

        let mut row_entries: Vec<_> = accum.into_iter().filter(|(_, val)| !val.is_zero()).collect();
        row_entries.sort_by_key(|&(col, _)| col);

        for (j, val) in row_entries {
            col_idx.push(j);
            values.push(val);
        }

        row_ptr.push(col_idx.len());
    }

    Ok(SparseMatrixCSR::new(n_rows, n_cols, row_ptr, col_idx, values))
}
