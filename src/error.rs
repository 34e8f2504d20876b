//! Error types for sparse matrix parsing, I/O and arithmetic

use std::path::PathBuf;

use thiserror::Error;

use crate::matrix::{Operation, Shape};

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur while reading, combining or writing matrices
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The matrix file could not be read
    #[error("Failed to read matrix file: {}\nError details: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The result file could not be written
    #[error("Failed to write matrix file: {}\nError details: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A header or entry line does not follow the text format
    #[error("malformed line {line} `{content}`: {reason}")]
    Format {
        /// 1-based line number in the input text
        line: usize,
        content: String,
        reason: String,
    },

    /// A parse error raised while loading a particular file
    #[error("Failed to read matrix file: {}\nError details: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<MatrixError>,
    },

    #[error("{}", dimension_message(*operation, *left, *right))]
    DimensionMismatch {
        operation: Operation,
        left: Shape,
        right: Shape,
    },

    #[error("Invalid operation \"{0}\". Valid operations are: add, subtract, or multiply")]
    InvalidOperation(String),

    /// A stored coordinate lies outside the declared shape
    #[error("entry ({row}, {col}) lies outside the {shape} matrix")]
    OutOfBounds { row: usize, col: usize, shape: Shape },

    /// The shape cannot be laid out in the requested representation
    #[error("{shape} matrix is too large to convert to {layout}")]
    TooLarge { shape: Shape, layout: &'static str },

    #[error("integer overflow during {} at ({row}, {col})", operation.noun())]
    Overflow {
        operation: Operation,
        row: usize,
        col: usize,
    },
}

impl MatrixError {
    pub(crate) fn format(line: usize, content: &str, reason: impl Into<String>) -> Self {
        MatrixError::Format {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

fn dimension_message(operation: Operation, left: Shape, right: Shape) -> String {
    match operation {
        Operation::Multiply => format!(
            "Invalid dimensions for multiplication. Matrix 1 is {left}, Matrix 2 is {right}. \
             The number of columns in first matrix ({}) must equal the number of rows in second matrix ({})",
            left.cols, right.rows
        ),
        _ => format!(
            "Matrix dimensions must match for {}. Matrix 1 is {left}, Matrix 2 is {right}",
            operation.noun()
        ),
    }
}
