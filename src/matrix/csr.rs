//! Compressed Sparse Row (CSR) snapshot of a sparse matrix
//!
//! The map-of-maps [`SparseMatrix`] is convenient to mutate; CSR is the flat
//! layout other libraries expect. Conversion goes through here.

use crate::error::{MatrixError, Result};
use crate::matrix::element::Element;
use crate::matrix::sparse::{Shape, SparseMatrix};

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz), ascending within each row
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T: Element> SparseMatrixCSR<T> {
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    /// - every column index must be below n_cols
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the number of stored elements
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the stored elements in row i
    ///
    /// Each item is a tuple (col_idx, value)
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Converts back to map-of-maps storage, dropping explicit zeros
    pub fn to_sparse(&self) -> SparseMatrix<T> {
        let mut matrix: SparseMatrix<T> = SparseMatrix::new(self.n_rows, self.n_cols);
        for i in 0..self.n_rows {
            for (j, &val) in self.row_iter(i) {
                matrix.set(i, j, val);
            }
        }
        matrix
    }
}

/// Allocates an empty `row_ptr` able to hold `n_rows + 1` offsets
///
/// Reports `TooLarge` instead of aborting when the row count cannot be
/// allocated.
pub(crate) fn row_ptr_with_capacity(n_rows: usize, shape: Shape) -> Result<Vec<usize>> {
    let too_large = || MatrixError::TooLarge { shape, layout: "CSR" };

    let len = n_rows.checked_add(1).ok_or_else(too_large)?;
    let mut row_ptr = Vec::new();
    row_ptr.try_reserve_exact(len).map_err(|_| too_large())?;

    Ok(row_ptr)
}

impl<T: Element> SparseMatrix<T> {
    /// Builds the CSR form of this matrix
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if a stored entry lies outside the declared shape, since
    /// CSR cannot address it. `TooLarge` if the `n_rows + 1` row offsets
    /// cannot be allocated.
    pub fn to_csr(&self) -> Result<SparseMatrixCSR<T>> {
        if let Some((row, col)) = self.first_out_of_bounds() {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }

        let nnz = self.nnz();
        let mut row_ptr = row_ptr_with_capacity(self.n_rows(), self.shape())?;
        let mut col_idx = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);

        // Rows without entries share the offset of the next stored row
        row_ptr.push(0);
        for i in self.stored_rows() {
            row_ptr.resize(i + 1, col_idx.len());
            for (j, val) in self.row_iter(i) {
                col_idx.push(j);
                values.push(val);
            }
        }
        row_ptr.resize(self.n_rows() + 1, col_idx.len());

        Ok(SparseMatrixCSR::new(self.n_rows(), self.n_cols(), row_ptr, col_idx, values))
    }
}
