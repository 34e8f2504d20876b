//! Utilities for converting between our matrix format and external libraries
//!
//! None of the arithmetic goes through these conversions. They exist for
//! interop with `sprs` and for inspecting small matrices as dense arrays.

use std::mem;

use ndarray::{Array2, ArrayView2};
use sprs::CsMat;

use crate::error::{MatrixError, Result};
use crate::matrix::{Element, SparseMatrix, SparseMatrixCSR};

/// Converts a sparse matrix to sprs CsMat format (CSR storage)
///
/// # Errors
///
/// `OutOfBounds` if a stored entry lies outside the declared shape.
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> Result<CsMat<T>>
where
    T: Element + Default,
{
    let csr = matrix.to_csr()?;
    Ok(CsMat::new(
        (csr.n_rows, csr.n_cols),
        csr.row_ptr,
        csr.col_idx,
        csr.values,
    ))
}

/// Converts a sprs CsMat (CSR or CSC storage) to a sparse matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrix<T>
where
    T: Element + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(shape.0, shape.1, indptr, indices, data).to_sparse()
}

/// Expands a sparse matrix into a dense array
///
/// # Errors
///
/// `OutOfBounds` if a stored entry lies outside the declared shape, and
/// `TooLarge` if `rows * cols` values cannot be allocated.
pub fn to_dense<T: Element>(matrix: &SparseMatrix<T>) -> Result<Array2<T>> {
    let shape = matrix.shape();
    let too_large = || MatrixError::TooLarge { shape, layout: "a dense array" };

    // ndarray counts empty axes as length 1 when checking the element count
    shape
        .rows
        .max(1)
        .checked_mul(shape.cols.max(1))
        .and_then(|n| n.checked_mul(mem::size_of::<T>()))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(too_large)?;

    let len = shape.rows * shape.cols;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large())?;
    cells.resize(len, T::zero());

    let mut dense = Array2::from_shape_vec((shape.rows, shape.cols), cells).map_err(|_| too_large())?;

    for (row, col, value) in matrix.iter() {
        let cell = dense
            .get_mut((row, col))
            .ok_or(MatrixError::OutOfBounds { row, col, shape })?;
        *cell = value;
    }

    Ok(dense)
}

/// Collects the non-zero cells of a dense array into a sparse matrix
pub fn from_dense<T: Element>(dense: ArrayView2<'_, T>) -> SparseMatrix<T> {
    let (n_rows, n_cols) = dense.dim();
    SparseMatrix::from_triplets(
        n_rows,
        n_cols,
        dense
            .indexed_iter()
            .filter(|(_, value)| !value.is_zero())
            .map(|((row, col), &value)| (row, col, value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sprs_roundtrip() {
        let original = SparseMatrix::<i64>::from_triplets(
            3,
            3,
            vec![(0, 0, 1), (0, 1, 2), (1, 1, 3), (2, 0, 4), (2, 2, 5)],
        );

        let sprs_mat = to_sprs_csr(&original).unwrap();
        assert_eq!(sprs_mat.shape(), (3, 3));
        assert_eq!(sprs_mat.nnz(), 5);

        let roundtrip = from_sprs_csr(sprs_mat);
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_from_sprs_csc() {
        let original = SparseMatrix::<i64>::from_triplets(2, 3, vec![(0, 2, 7), (1, 0, -1)]);

        let csc = to_sprs_csr(&original).unwrap().to_csc();
        assert!(csc.is_csc());

        assert_eq!(from_sprs_csr(csc), original);
    }

    #[test]
    fn test_sprs_rejects_out_of_bounds() {
        let matrix = SparseMatrix::<i64>::from_triplets(2, 2, vec![(3, 0, 1)]);
        assert!(matches!(to_sprs_csr(&matrix), Err(MatrixError::OutOfBounds { .. })));
    }

    #[test]
    fn test_to_dense() {
        let matrix = SparseMatrix::<i64>::from_triplets(2, 3, vec![(0, 2, 7), (1, 0, -1)]);

        let dense = to_dense(&matrix).unwrap();
        assert_eq!(dense, array![[0, 0, 7], [-1, 0, 0]]);
    }

    #[test]
    fn test_to_dense_element_count_overflow() {
        let matrix: SparseMatrix = "rows=4294967296\ncols=4294967296\n(0, 0, 1)\n".parse().unwrap();

        match to_dense(&matrix) {
            Err(MatrixError::TooLarge { shape, .. }) => assert_eq!(shape, matrix.shape()),
            other => panic!("expected too large, got {:?}", other),
        }
    }

    #[test]
    fn test_to_dense_empty_axis_with_huge_other_axis() {
        let matrix = SparseMatrix::<i64>::new(0, usize::MAX);
        assert!(matches!(to_dense(&matrix), Err(MatrixError::TooLarge { .. })));
    }

    #[test]
    fn test_to_dense_empty_matrix() {
        let dense = to_dense(&SparseMatrix::<i64>::new(0, 3)).unwrap();
        assert_eq!(dense.dim(), (0, 3));
    }

    #[test]
    fn test_from_dense_skips_zeros() {
        let dense = array![[1i64, 0], [0, 0], [0, 3]];

        let matrix = from_dense(dense.view());

        assert_eq!(matrix.shape().to_string(), "3x2");
        assert_eq!(matrix.iter().collect::<Vec<_>>(), vec![(0, 0, 1), (2, 1, 3)]);
    }
}
