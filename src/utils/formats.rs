//! Utilities for converting between our matrix format and external libraries
//!
//! `sprs` and `ndarray` index with `usize` inside a fixed shape, so exporting
//! requires every stored coordinate to lie within the declared dimensions.

use ndarray::Array2;
use sprs::{CsMat, CsMatI, SpIndex, TriMat};

use crate::error::{MatrixError, Result};
use crate::matrix::{Element, SparseMatrix};

/// Entries as `usize` coordinates, failing on the first one outside the shape
fn bounded_entries<T: Element>(matrix: &SparseMatrix<T>) -> Result<Vec<(usize, usize, T)>> {
    matrix
        .iter()
        .map(|(row, col, value)| match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < matrix.num_rows() && c < matrix.num_cols() => {
                Ok((r, c, value))
            }
            _ => Err(MatrixError::OutOfBounds { row, col }),
        })
        .collect()
}

/// Converts our matrix to sprs CsMat in CSR format
pub fn to_sprs_csr<T: Element>(matrix: &SparseMatrix<T>) -> Result<CsMat<T>> {
    let entries = bounded_entries(matrix)?;

    // Entries arrive row-major, so CSR arrays can be filled in one pass
    let mut row_ptr = vec![0; matrix.num_rows() + 1];
    let mut col_idx = Vec::with_capacity(entries.len());
    let mut values = Vec::with_capacity(entries.len());

    for (row, col, value) in entries {
        row_ptr[row + 1] += 1;
        col_idx.push(col);
        values.push(value);
    }
    for i in 0..matrix.num_rows() {
        row_ptr[i + 1] += row_ptr[i];
    }

    Ok(CsMat::new(
        (matrix.num_rows(), matrix.num_cols()),
        row_ptr,
        col_idx,
        values,
    ))
}

/// Converts our matrix to a sprs triplet matrix
pub fn to_triplets<T: Element>(matrix: &SparseMatrix<T>) -> Result<TriMat<T>> {
    let entries = bounded_entries(matrix)?;
    let shape = (matrix.num_rows(), matrix.num_cols());
    let mut triplets = TriMat::with_capacity(shape, entries.len());

    for (row, col, value) in entries {
        triplets.add_triplet(row, col, value);
    }

    Ok(triplets)
}

/// Converts a sprs CsMat (CSR or CSC) to our format
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T, I>(matrix: &CsMatI<T, I>) -> SparseMatrix<T>
where
    T: Element,
    I: SpIndex,
{
    let (n_rows, n_cols) = matrix.shape();
    SparseMatrix::from_triplets(
        n_rows,
        n_cols,
        matrix
            .iter()
            .map(|(&value, (row, col))| (row.index() as i64, col.index() as i64, value)),
    )
}

/// Converts our matrix to a dense ndarray
pub fn to_dense<T: Element>(matrix: &SparseMatrix<T>) -> Result<Array2<T>> {
    let entries = bounded_entries(matrix)?;
    let mut dense = Array2::zeros((matrix.num_rows(), matrix.num_cols()));

    for (row, col, value) in entries {
        dense[[row, col]] = value;
    }

    Ok(dense)
}

/// Converts a dense ndarray to our format, keeping only non-zero values
pub fn from_dense<T: Element>(dense: &Array2<T>) -> SparseMatrix<T> {
    let (n_rows, n_cols) = dense.dim();
    SparseMatrix::from_triplets(
        n_rows,
        n_cols,
        dense
            .indexed_iter()
            .map(|((row, col), &value)| (row as i64, col as i64, value)),
    )
}
