//! Addition, subtraction and multiplication of sparse matrices
//!
//! Every operation returns a new matrix and leaves its operands untouched.
//! Accumulation goes through [`SparseMatrix::set`], so entries that cancel
//! to zero disappear from the result.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::element::Element;
use crate::matrix::sparse::SparseMatrix;

/// The binary operations supported on sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Noun used in messages, e.g. "addition"
    pub fn noun(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Applies this operation to `a` and `b`
    pub fn apply<T: Element>(&self, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => a.add(b),
            Operation::Subtract => a.subtract(b),
            Operation::Multiply => a.multiply(b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| MatrixError::InvalidOperation(s.to_string()))
    }
}

impl<T: Element> SparseMatrix<T> {
    /// Computes `self + other`
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless both matrices have the same shape, and
    /// `Overflow` if a sum does not fit in `T`.
    pub fn add(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        self.combine(other, Operation::Add, T::checked_add)
    }

    /// Computes `self - other`
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless both matrices have the same shape, and
    /// `Overflow` if a difference does not fit in `T`.
    pub fn subtract(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        self.combine(other, Operation::Subtract, T::checked_sub)
    }

    /// Copies `self`, then folds every entry of `other` into the copy
    fn combine<F>(&self, other: &SparseMatrix<T>, operation: Operation, op: F) -> Result<SparseMatrix<T>>
    where
        F: Fn(&T, &T) -> Option<T>,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result = self.clone();

        for (row, col, value) in other.iter() {
            let current = result.get(row, col);
            let combined = op(&current, &value).ok_or(MatrixError::Overflow { operation, row, col })?;
            result.set(row, col, combined);
        }

        debug!(
            operation = %operation,
            shape = %result.shape(),
            left_nnz = self.nnz(),
            right_nnz = other.nnz(),
            result_nnz = result.nnz(),
            "combined matrices"
        );

        Ok(result)
    }

    /// Computes the product `self × other`
    ///
    /// Only stored entries are visited: each entry `(i, k, a)` of `self` is
    /// paired with the entries of row `k` of `other`. The work is bounded by
    /// `self.nnz() * other.max_row_nnz()` regardless of the dimensions.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless `self.n_cols() == other.n_rows()`, and
    /// `Overflow` if a product or partial sum does not fit in `T`.
    pub fn multiply(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result: SparseMatrix<T> = SparseMatrix::new(self.n_rows(), other.n_cols());
        let overflow = |row, col| MatrixError::Overflow {
            operation: Operation::Multiply,
            row,
            col,
        };
        let mut pairs = 0usize;

        for (row1, col1, val1) in self.iter() {
            for (col2, val2) in other.row_iter(col1) {
                let product = val1.checked_mul(&val2).ok_or_else(|| overflow(row1, col2))?;
                let sum = result
                    .get(row1, col2)
                    .checked_add(&product)
                    .ok_or_else(|| overflow(row1, col2))?;
                result.set(row1, col2, sum);
                pairs += 1;
            }
        }

        debug!(
            left = %self.shape(),
            right = %other.shape(),
            pairs,
            result_nnz = result.nnz(),
            "multiplied matrices"
        );

        Ok(result)
    }
}
