//! Map-of-maps sparse matrix storage
//!
//! Only non-zero values are stored. The store maps a row index to a map
//! from column index to value, both ordered, so iteration is row-major and
//! deterministic.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use super::element::Element;

/// Dimensions of a matrix, displayed as `RxC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` addresses a cell inside this shape
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A sparse integer matrix storing only its non-zero entries
///
/// Invariants:
/// - no stored value is zero
/// - no row maps to an empty column map
/// - the dimensions never change after construction
///
/// Coordinates are not checked against the dimensions; an entry outside
/// the declared shape is stored and read back like any other.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    n_rows: usize,
    n_cols: usize,
    data: BTreeMap<usize, BTreeMap<usize, T>>,
}

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: BTreeMap::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    /// Builds a matrix by applying `set` to each `(row, col, value)` in order
    ///
    /// Later triplets overwrite earlier ones at the same coordinate, and a
    /// zero value removes whatever was there.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.n_rows, self.n_cols)
    }

    /// Returns `RxC`, for diagnostics
    pub fn dimension_string(&self) -> String {
        self.shape().to_string()
    }

    /// Returns the number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.data.values().map(BTreeMap::len).sum()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the value at `(row, col)`, or zero when nothing is stored
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.data
            .get(&row)
            .is_some_and(|cols| cols.contains_key(&col))
    }

    /// Stores `value` at `(row, col)`
    ///
    /// Setting zero removes the entry, and drops the row once it holds no
    /// more entries.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            if let Entry::Occupied(mut cols) = self.data.entry(row) {
                cols.get_mut().remove(&col);
                if cols.get().is_empty() {
                    cols.remove();
                }
            }
        } else {
            self.data.entry(row).or_default().insert(col, value);
        }
    }

    /// Iterates over `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.data.iter().flat_map(|(&row, cols)| {
            cols.iter().map(move |(&col, &value)| (row, col, value))
        })
    }

    /// Iterates over `(col, value)` for the stored entries of one row
    ///
    /// Yields nothing for a row with no entries.
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.data
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&col, &value)| (col, value)))
    }

    /// Iterates over the indices of rows holding at least one entry
    pub fn stored_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.keys().copied()
    }

    /// Number of stored entries in the longest row
    pub fn max_row_nnz(&self) -> usize {
        self.data.values().map(BTreeMap::len).max().unwrap_or(0)
    }

    /// Returns the first stored coordinate that lies outside the shape
    pub(crate) fn first_out_of_bounds(&self) -> Option<(usize, usize)> {
        let shape = self.shape();
        self.iter()
            .find(|&(row, col, _)| !shape.contains(row, col))
            .map(|(row, col, _)| (row, col))
    }
}

impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_rows_to_print = 5;
        let mut printed = 0;

        for (&row, cols) in self.data.iter().take(max_rows_to_print) {
            write!(f, "    row {}: ", row)?;
            let max_elements = 5.min(cols.len());
            for (col, value) in cols.iter().take(max_elements) {
                write!(f, "({}, {:?}) ", col, value)?;
            }
            if cols.len() > max_elements {
                write!(f, "... ({} more)", cols.len() - max_elements)?;
            }
            writeln!(f)?;
            printed += 1;
        }

        if self.data.len() > printed {
            writeln!(f, "    ... ({} more rows)", self.data.len() - printed)?;
        }

        write!(f, "}}")
    }
}
