//! Reading and writing matrix files
//!
//! Errors raised here always carry the path of the file involved.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{MatrixError, Result};
use crate::format::text::parse_matrix;
use crate::matrix::{Element, ParseOptions, SparseMatrix};

/// Reads and parses the matrix stored at `path`
///
/// # Errors
///
/// `Read` if the file cannot be read as UTF-8 text, `InFile` wrapping the
/// parse error if its content is malformed.
pub fn read_matrix_file<T, P>(path: P, options: &ParseOptions) -> Result<SparseMatrix<T>>
where
    T: Element,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| MatrixError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = parse_matrix(&content, options).map_err(|err| MatrixError::InFile {
        path: path.to_path_buf(),
        source: Box::new(err),
    })?;

    info!(
        path = %path.display(),
        shape = %matrix.shape(),
        nnz = matrix.nnz(),
        "loaded matrix"
    );

    Ok(matrix)
}

/// Serializes `matrix` into the file at `path`, replacing any previous content
///
/// # Errors
///
/// `Write` if the file cannot be created or written.
pub fn write_matrix_file<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
where
    T: Element,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::write(path, matrix.to_text()).map_err(|source| MatrixError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        shape = %matrix.shape(),
        nnz = matrix.nnz(),
        "wrote matrix"
    );

    Ok(())
}
