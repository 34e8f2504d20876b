//! Plain-text matrix format
//!
//! ```text
//! rows=<rows>
//! cols=<cols>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines are ignored anywhere. Entries may appear in any order; a
//! later entry for the same coordinate replaces the earlier one.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{MatrixError, Result};
use crate::matrix::{BoundsPolicy, Element, ParseOptions, SparseMatrix};

/// Parses a matrix from its text form
///
/// # Errors
///
/// `Format` for a missing or malformed header, or for an entry line that is
/// not a `(row, col, value)` tuple of integers. With
/// [`BoundsPolicy::Reject`], also for entries outside the declared shape.
pub fn parse_matrix<T: Element>(content: &str, options: &ParseOptions) -> Result<SparseMatrix<T>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let n_rows = parse_header(lines.next(), "rows")?;
    let n_cols = parse_header(lines.next(), "cols")?;

    let mut matrix: SparseMatrix<T> = SparseMatrix::new(n_rows, n_cols);
    let shape = matrix.shape();
    let mut skipped = 0usize;

    for (line_no, line) in lines {
        let (row, col, value) = parse_entry::<T>(line_no, line)?;

        if !shape.contains(row, col) {
            match options.bounds {
                BoundsPolicy::Ignore => {}
                BoundsPolicy::Skip => {
                    warn!(line = line_no, row, col, %shape, "skipping entry outside matrix");
                    skipped += 1;
                    continue;
                }
                BoundsPolicy::Reject => {
                    return Err(MatrixError::format(
                        line_no,
                        line,
                        format!("coordinate ({row}, {col}) lies outside the {shape} matrix"),
                    ));
                }
            }
        }

        matrix.set(row, col, value);
    }

    debug!(%shape, nnz = matrix.nnz(), skipped, "parsed matrix");

    Ok(matrix)
}

/// Parses `<key>=<count>`; `line` is `None` when the input ran out
fn parse_header(line: Option<(usize, &str)>, key: &str) -> Result<usize> {
    let (line_no, line) = line.ok_or_else(|| MatrixError::Format {
        line: 0,
        content: String::new(),
        reason: format!("missing `{key}=` header"),
    })?;

    let value = line
        .split_once('=')
        .filter(|(name, _)| name.trim() == key)
        .map(|(_, value)| value.trim())
        .ok_or_else(|| MatrixError::format(line_no, line, format!("expected `{key}=<count>`")))?;

    value
        .parse()
        .map_err(|_| MatrixError::format(line_no, line, format!("invalid {key} count `{value}`")))
}

/// Parses `(<row>, <col>, <value>)`
fn parse_entry<T: Element>(line_no: usize, line: &str) -> Result<(usize, usize, T)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| MatrixError::format(line_no, line, "expected `(row, col, value)`"))?;

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    let [row, col, value] = fields.as_slice() else {
        return Err(MatrixError::format(
            line_no,
            line,
            format!("expected 3 comma-separated fields, found {}", fields.len()),
        ));
    };

    let row = row
        .parse()
        .map_err(|_| MatrixError::format(line_no, line, format!("invalid row index `{row}`")))?;
    let col = col
        .parse()
        .map_err(|_| MatrixError::format(line_no, line, format!("invalid column index `{col}`")))?;
    let value = value
        .parse()
        .map_err(|_| MatrixError::format(line_no, line, format!("invalid value `{value}`")))?;

    Ok((row, col, value))
}

/// Writes the text form, one entry per line in row-major order
impl<T: Element> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.n_rows())?;
        writeln!(f, "cols={}", self.n_cols())?;
        for (row, col, value) in self.iter() {
            writeln!(f, "({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }
}

impl<T: Element> FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s, &ParseOptions::default())
    }
}

impl<T: Element> SparseMatrix<T> {
    /// Serializes to the text form
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}
