//! Property tests for parsing and arithmetic

use dokmat::{
    add, multiply, multiply_with_config, parse_str, subtract, MatrixConfig, MatrixError,
    MultiplyStrategy, SparseMatrix,
};
use proptest::prelude::*;

/// Values small enough that products and sums of a handful of them never overflow i64
fn value() -> impl Strategy<Value = i64> {
    -1_000i64..=1_000
}

/// A matrix of the given shape with entries inside the shape
fn matrix_with_shape(rows: usize, cols: usize) -> impl Strategy<Value = SparseMatrix> {
    let max_entries = (rows * cols).min(24);
    prop::collection::vec((0..rows as i64, 0..cols as i64, value()), 0..=max_entries)
        .prop_map(move |triplets| SparseMatrix::from_triplets(rows, cols, triplets))
}

fn matrix() -> impl Strategy<Value = SparseMatrix> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| matrix_with_shape(rows, cols))
}

/// Two matrices of the same shape
fn same_shape_pair() -> impl Strategy<Value = (SparseMatrix, SparseMatrix)> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        (matrix_with_shape(rows, cols), matrix_with_shape(rows, cols))
    })
}

/// Two matrices that can be multiplied
fn multipliable_pair() -> impl Strategy<Value = (SparseMatrix, SparseMatrix)> {
    (1usize..8, 1usize..8, 1usize..8).prop_flat_map(|(n, k, m)| {
        (matrix_with_shape(n, k), matrix_with_shape(k, m))
    })
}

/// Textbook dense product, used as an oracle
fn dense_product(a: &SparseMatrix, b: &SparseMatrix) -> Vec<Vec<i64>> {
    let (n, k, m) = (a.num_rows(), a.num_cols(), b.num_cols());
    let mut c = vec![vec![0i64; m]; n];
    for i in 0..n {
        for j in 0..m {
            for p in 0..k {
                c[i][j] += a.get(i as i64, p as i64) * b.get(p as i64, j as i64);
            }
        }
    }
    c
}

proptest! {
    #[test]
    fn prop_round_trip(m in matrix()) {
        let parsed: SparseMatrix = parse_str(&m.to_string()).unwrap();
        prop_assert_eq!(parsed, m);
    }

    #[test]
    fn prop_no_zero_entries_stored(m in matrix()) {
        prop_assert!(m.iter().all(|(_, _, v)| v != 0));
    }

    #[test]
    fn prop_set_zero_removes(mut m in matrix(), r in -2i64..10, c in -2i64..10) {
        m.set(r, c, 0);
        prop_assert_eq!(m.get(r, c), 0);
        prop_assert!(!m.contains(r, c));
    }

    #[test]
    fn prop_additive_identity(m in matrix()) {
        let zeros = SparseMatrix::new(m.num_rows(), m.num_cols());
        prop_assert_eq!(add(&m, &zeros).unwrap(), m.clone());
        prop_assert_eq!(subtract(&m, &zeros).unwrap(), m);
    }

    #[test]
    fn prop_add_commutes((a, b) in same_shape_pair()) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn prop_self_subtraction_is_empty(m in matrix()) {
        let d = subtract(&m, &m).unwrap();
        prop_assert!(d.is_empty());
        prop_assert_eq!(d.shape(), m.shape());
    }

    #[test]
    fn prop_subtract_is_add_of_negation((a, b) in same_shape_pair()) {
        let negated = SparseMatrix::from_triplets(
            b.num_rows(),
            b.num_cols(),
            b.iter().map(|(r, c, v)| (r, c, -v)),
        );
        prop_assert_eq!(subtract(&a, &b).unwrap(), add(&a, &negated).unwrap());
    }

    #[test]
    fn prop_add_is_elementwise((a, b) in same_shape_pair()) {
        let c = add(&a, &b).unwrap();
        for r in 0..a.num_rows() as i64 {
            for col in 0..a.num_cols() as i64 {
                prop_assert_eq!(c.get(r, col), a.get(r, col) + b.get(r, col));
            }
        }
    }

    #[test]
    fn prop_multiply_shape((a, b) in multipliable_pair()) {
        let c = multiply(&a, &b).unwrap();
        prop_assert_eq!(c.num_rows(), a.num_rows());
        prop_assert_eq!(c.num_cols(), b.num_cols());
    }

    #[test]
    fn prop_multiply_matches_dense((a, b) in multipliable_pair()) {
        let c = multiply(&a, &b).unwrap();
        let expected = dense_product(&a, &b);
        for (i, row) in expected.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                prop_assert_eq!(c.get(i as i64, j as i64), value);
            }
        }
        prop_assert!(c.iter().all(|(_, _, v)| v != 0));
    }

    #[test]
    fn prop_strategies_agree((a, b) in multipliable_pair()) {
        let sweep_config = MatrixConfig::with_strategy(MultiplyStrategy::ColumnSweep);
        let indexed_config = MatrixConfig::with_strategy(MultiplyStrategy::RowIndexed);
        let sweep = multiply_with_config(&a, &b, &sweep_config).unwrap();
        let indexed = multiply_with_config(&a, &b, &indexed_config).unwrap();
        prop_assert_eq!(sweep, indexed);
    }

    #[test]
    fn prop_shape_mismatch_rejected(a in matrix(), b in matrix()) {
        if a.shape() != b.shape() {
            prop_assert!(matches!(add(&a, &b), Err(MatrixError::DimensionMismatch(_))));
        }
        if a.num_cols() != b.num_rows() {
            prop_assert!(matches!(multiply(&a, &b), Err(MatrixError::DimensionMismatch(_))));
        }
    }
}

#[test]
fn test_format_rejection() {
    for line in ["(1, 2)", "1, 2, 3"] {
        let err = parse_str::<i64>(line).unwrap_err();
        assert!(matches!(err, MatrixError::Format { line: 1 }));
    }
}
