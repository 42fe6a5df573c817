//! Addition, subtraction and multiplication of DOK matrices
//!
//! Every operation borrows its operands and returns a freshly allocated
//! result. Values go through [`SparseMatrix::set`], so entries that cancel to
//! zero disappear from the result. Integer overflow is reported instead of
//! wrapping.

use std::collections::BTreeMap;

use num_traits::NumCast;

use crate::error::{MatrixError, Result};
use crate::matrix::config::{MatrixConfig, MultiplyStrategy};
use crate::matrix::dok::{Element, SparseMatrix};
use crate::matrix::operation::Operation;

/// Computes `a + b`
///
/// Both operands must have the same shape.
///
/// # Examples
///
/// ```
/// use dokmat::{add, SparseMatrix};
///
/// let a = SparseMatrix::<i64>::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 2)]);
/// let b = SparseMatrix::<i64>::from_triplets(2, 2, vec![(0, 0, 3), (0, 1, 4)]);
/// let c = add(&a, &b).unwrap();
///
/// assert_eq!(c.get(0, 0), 4);
/// assert_eq!(c.nnz(), 3);
/// ```
pub fn add<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    combine(a, b, Operation::Add, |x, y| x.checked_add(&y))
}

/// Computes `a - b`
///
/// Both operands must have the same shape.
pub fn subtract<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    combine(a, b, Operation::Subtract, |x, y| x.checked_sub(&y))
}

/// Element-wise combination shared by addition and subtraction
///
/// Copies `a` into a new matrix and then folds every entry of `b` into it,
/// so the work is proportional to the stored entries, not to the shape.
fn combine<T, F>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    op: Operation,
    apply: F,
) -> Result<SparseMatrix<T>>
where
    T: Element,
    F: Fn(T, T) -> Option<T>,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch(op));
    }

    log::debug!(
        "{}: {}x{} ({} nnz) with {} nnz",
        op.noun(),
        a.num_rows(),
        a.num_cols(),
        a.nnz(),
        b.nnz()
    );

    let mut result = SparseMatrix::from_triplets(a.num_rows(), a.num_cols(), a.iter());

    for (row, col, value) in b.iter() {
        let combined = apply(result.get(row, col), value).ok_or(MatrixError::Overflow(op))?;
        result.set(row, col, combined);
    }

    log::trace!("{} produced {} nnz", op.noun(), result.nnz());
    Ok(result)
}

/// Computes `a × b` using the default configuration
///
/// The number of columns of `a` must equal the number of rows of `b`. The
/// result has `a.num_rows()` rows and `b.num_cols()` columns.
///
/// # Examples
///
/// ```
/// use dokmat::{multiply, SparseMatrix};
///
/// let a = SparseMatrix::<i64>::from_triplets(2, 3, vec![(0, 1, 2), (1, 2, 3)]);
/// let b = SparseMatrix::<i64>::from_triplets(3, 2, vec![(1, 0, 5), (2, 1, 7)]);
/// let c = multiply(&a, &b).unwrap();
///
/// assert_eq!(c.shape(), (2, 2));
/// assert_eq!(c.get(0, 0), 10);
/// assert_eq!(c.get(1, 1), 21);
/// ```
pub fn multiply<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    multiply_with_config(a, b, &MatrixConfig::default())
}

/// Computes `a × b` with an explicit configuration
///
/// Only columns of `b` inside `[0, b.num_cols())` take part, whichever
/// strategy is selected, so both strategies produce identical results.
///
/// Each output cell is summed in `i128` and checked against `T` once, so
/// intermediate partial sums may leave the range of `T` as long as the final
/// value fits. [`MatrixError::Overflow`] is returned only when a final value
/// does not fit `T` or the `i128` accumulator itself overflows.
pub fn multiply_with_config<T: Element>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &MatrixConfig,
) -> Result<SparseMatrix<T>> {
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::DimensionMismatch(Operation::Multiply));
    }

    log::debug!(
        "multiplication: {}x{} ({} nnz) by {}x{} ({} nnz), strategy {}",
        a.num_rows(),
        a.num_cols(),
        a.nnz(),
        b.num_rows(),
        b.num_cols(),
        b.nnz(),
        config.multiply_strategy
    );

    let mut sums = BTreeMap::new();
    let b_cols = i64::try_from(b.num_cols()).unwrap_or(i64::MAX);

    match config.multiply_strategy {
        MultiplyStrategy::ColumnSweep => {
            for (r1, c1, v1) in a.iter() {
                for c2 in 0..b_cols {
                    let v2 = b.get(c1, c2);
                    if !v2.is_zero() {
                        accumulate(&mut sums, r1, c2, v1, v2)?;
                    }
                }
            }
        }
        MultiplyStrategy::RowIndexed => {
            for (r1, c1, v1) in a.iter() {
                for (c2, v2) in b.row_iter(c1).filter(|&(c2, _)| (0..b_cols).contains(&c2)) {
                    accumulate(&mut sums, r1, c2, v1, v2)?;
                }
            }
        }
    }

    let mut result = SparseMatrix::new(a.num_rows(), b.num_cols());
    for ((row, col), sum) in sums {
        let value =
            <T as NumCast>::from(sum).ok_or(MatrixError::Overflow(Operation::Multiply))?;
        result.set(row, col, value);
    }

    log::trace!("multiplication produced {} nnz", result.nnz());
    Ok(result)
}

/// Adds `v1 * v2` into the running `i128` sum for `(row, col)`
fn accumulate<T: Element>(
    sums: &mut BTreeMap<(i64, i64), i128>,
    row: i64,
    col: i64,
    v1: T,
    v2: T,
) -> Result<()> {
    let overflow = || MatrixError::Overflow(Operation::Multiply);
    let product = v1
        .to_i128()
        .zip(v2.to_i128())
        .and_then(|(x, y)| x.checked_mul(y))
        .ok_or_else(overflow)?;
    let sum = sums.entry((row, col)).or_insert(0);
    *sum = sum.checked_add(product).ok_or_else(overflow)?;
    Ok(())
}
