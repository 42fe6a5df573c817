//! Dictionary-of-keys (DOK) sparse matrix implementation

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use num_traits::{PrimInt, Signed};

/// Element types a [`SparseMatrix`] can hold
///
/// Values are signed machine integers. Floating-point types are deliberately
/// not covered.
pub trait Element: PrimInt + Signed + FromStr + fmt::Display + fmt::Debug {}

impl<T> Element for T where T: PrimInt + Signed + FromStr + fmt::Display + fmt::Debug {}

/// A sparse matrix in dictionary-of-keys format
///
/// Only non-zero values are stored, keyed by `(row, col)`. A coordinate that
/// is absent from the map reads as zero. Coordinates are not checked against
/// the declared dimensions: the matrix is coordinate-addressed, and
/// `num_rows`/`num_cols` only matter for arithmetic shape checks and
/// serialization.
///
/// Keys are kept in an ordered map, so iteration is row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    /// Number of rows, fixed at construction
    num_rows: usize,

    /// Number of columns, fixed at construction
    num_cols: usize,

    /// Non-zero values keyed by (row, col)
    entries: BTreeMap<(i64, i64), T>,
}

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: BTreeMap::new(),
        }
    }

    /// Creates an empty matrix with the given dimensions
    ///
    /// Alias of [`SparseMatrix::new`].
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self::new(num_rows, num_cols)
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n as i64 {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    /// Builds a matrix from `(row, col, value)` triples
    ///
    /// Triples are applied in order through [`SparseMatrix::set`]: zero values
    /// leave no entry and a repeated coordinate keeps the last value.
    pub fn from_triplets<I>(num_rows: usize, num_cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64, T)>,
    {
        let mut matrix = Self::new(num_rows, num_cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// `(num_rows, num_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns the number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value at `(row, col)`, or zero if nothing is stored there
    pub fn get(&self, row: i64, col: i64) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    /// Returns true if a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: i64, col: i64) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Sets the value at `(row, col)`
    ///
    /// Setting zero removes the entry. This is the only way entries change.
    pub fn set(&mut self, row: i64, col: i64, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Iterates over stored entries as `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64, T)> + '_ {
        self.entries.iter().map(|(&(row, col), &value)| (row, col, value))
    }

    /// Iterates over the stored entries of one row as `(col, value)`,
    /// in ascending column order
    pub fn row_iter(&self, row: i64) -> impl Iterator<Item = (i64, T)> + '_ {
        self.entries
            .range((row, i64::MIN)..=(row, i64::MAX))
            .map(|(&(_, col), &value)| (col, value))
    }

    /// Rows that hold at least one entry, ascending
    fn stored_rows(&self) -> Vec<i64> {
        let mut rows: Vec<i64> = self.entries.keys().map(|&(row, _)| row).collect();
        rows.dedup();
        rows
    }
}

impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.num_rows, self.num_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let rows = self.stored_rows();
        let max_rows_to_print = 5.min(rows.len());

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for &row in &rows[..max_rows_to_print] {
                write!(f, "    row {}: ", row)?;
                let row_len = self.row_iter(row).count();
                let max_elements = 5.min(row_len);

                for (col, value) in self.row_iter(row).take(max_elements) {
                    write!(f, "({}, {:?}) ", col, value)?;
                }

                if row_len > max_elements {
                    write!(f, "... ({} more)", row_len - max_elements)?;
                }

                writeln!(f)?;
            }

            if rows.len() > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", rows.len() - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
