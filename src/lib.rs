//! # sparsemat: sparse integer matrices
//!
//! A matrix that stores only its non-zero entries, a small text format to
//! load and save it, and the three operations that combine two of them:
//! addition, subtraction and multiplication.
//!
//! ## Overview
//!
//! - [`SparseMatrix`] keeps a row → (column → value) map. Setting a value to
//!   zero removes it, so the store never holds zeros or empty rows.
//! - Arithmetic visits stored entries only. Multiplication pairs each entry
//!   `(i, k)` of the left operand with row `k` of the right one and never
//!   touches the dense `rows × cols` space.
//! - The text format is a `rows=` and a `cols=` header followed by one
//!   `(row, col, value)` line per entry.
//!
//! ## Usage
//!
//! ```
//! use sparsemat::{SparseMatrix, Operation};
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 5)\n(1, 1, 3)\n".parse()?;
//! let b: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n".parse()?;
//!
//! let sum = Operation::Add.apply(&a, &b)?;
//! assert_eq!(sum.to_text(), "rows=2\ncols=2\n(0, 0, 6)\n(0, 1, 2)\n(1, 1, 3)\n");
//! # Ok::<(), sparsemat::MatrixError>(())
//! ```
//!
//! Files are read and written with [`read_matrix_file`] and
//! [`write_matrix_file`], which attach the path to any error.

pub mod error;
pub mod format;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{MatrixError, Result};
pub use format::{parse_matrix, read_matrix_file, write_matrix_file};
pub use matrix::{reference_spgemm, Element, Operation, Shape, SparseMatrix, SparseMatrixCSR};
pub use matrix::config::{BoundsPolicy, ParseOptions};
pub use utils::{from_dense, from_sprs_csr, to_dense, to_sprs_csr};

/// Version information for the sparsemat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
