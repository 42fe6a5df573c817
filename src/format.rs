//! Text format reader/writer
//!
//! The format is line oriented:
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Header lines may appear anywhere and in any order; the last occurrence of
//! each wins and a missing header leaves that dimension at 0. Blank lines are
//! ignored. Every other line must be an entry triple.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::matrix::{Element, SparseMatrix};

const ROWS_PREFIX: &str = "rows=";
const COLS_PREFIX: &str = "cols=";

/// Read a matrix from a file
pub fn read_matrix<T: Element, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    log::debug!("loading matrix from {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    parse_str(&text)
}

/// Write a matrix to a file in the text format
pub fn write_matrix<T: Element, P: AsRef<Path>>(path: P, matrix: &SparseMatrix<T>) -> Result<()> {
    let path = path.as_ref();
    log::debug!("writing {} entries to {}", matrix.nnz(), path.display());

    fs::write(path, matrix.to_string()).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> MatrixError {
    MatrixError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Parse a matrix from the full text of a file
pub fn parse_str<T: Element>(text: &str) -> Result<SparseMatrix<T>> {
    parse_lines(text.lines())
}

/// Parse a matrix from a sequence of lines
///
/// Stops at the first malformed line with [`MatrixError::Format`].
pub fn parse_lines<'a, T, I>(lines: I) -> Result<SparseMatrix<T>>
where
    T: Element,
    I: IntoIterator<Item = &'a str>,
{
    let mut num_rows = 0;
    let mut num_cols = 0;
    let mut triplets = Vec::new();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(value) = line.strip_prefix(ROWS_PREFIX) {
            num_rows = parse_dimension(value, line_no, line)?;
        } else if let Some(value) = line.strip_prefix(COLS_PREFIX) {
            num_cols = parse_dimension(value, line_no, line)?;
        } else {
            triplets.push(parse_entry(line, line_no)?);
        }
    }

    log::debug!(
        "parsed {}x{} matrix from {} entry lines",
        num_rows,
        num_cols,
        triplets.len()
    );

    Ok(SparseMatrix::from_triplets(num_rows, num_cols, triplets))
}

fn wrong_format(line_no: usize, line: &str) -> MatrixError {
    log::debug!("line {}: cannot parse {:?}", line_no, line);
    MatrixError::Format { line: line_no }
}

fn parse_dimension(value: &str, line_no: usize, line: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| wrong_format(line_no, line))
}

/// Parse `(<row>, <col>, <value>)`; `line` is already trimmed
fn parse_entry<T: Element>(line: &str, line_no: usize) -> Result<(i64, i64, T)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| wrong_format(line_no, line))?;

    let mut fields = inner.split(',').map(str::trim);
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(wrong_format(line_no, line));
    };

    let row = row.parse::<i64>().map_err(|_| wrong_format(line_no, line))?;
    let col = col.parse::<i64>().map_err(|_| wrong_format(line_no, line))?;
    let value = value.parse::<T>().map_err(|_| wrong_format(line_no, line))?;

    Ok((row, col, value))
}

impl<T: Element> fmt::Display for SparseMatrix<T> {
    /// Writes the text format: headers, then one entry per line in row-major order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}", ROWS_PREFIX, self.num_rows())?;
        writeln!(f, "{}{}", COLS_PREFIX, self.num_cols())?;
        for (row, col, value) in self.iter() {
            writeln!(f, "({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }
}

impl<T: Element> FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s)
    }
}
