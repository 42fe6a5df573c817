//! # DOKMAT: dictionary-of-keys sparse integer matrices
//!
//! A small library for loading sparse integer matrices from a line-oriented
//! text format, editing individual elements, and computing sums, differences
//! and products while storing only non-zero entries.
//!
//! ## Overview
//!
//! - [`SparseMatrix`] maps `(row, col)` coordinates to non-zero values.
//!   Absent coordinates read as zero and writing zero removes an entry.
//! - [`add`], [`subtract`] and [`multiply`] return new matrices and never
//!   modify their operands. Shape mismatches and integer overflow are
//!   reported as [`MatrixError`] values.
//! - The [`format`] module parses and writes the text format:
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 0, 1)
//! (1, 1, 2)
//! ```
//!
//! ## Usage
//!
//! ```
//! use dokmat::{format, multiply, Operation, SparseMatrix};
//!
//! let a: SparseMatrix = format::parse_str("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
//! let b: SparseMatrix = "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n".parse().unwrap();
//!
//! let sum = "add".parse::<Operation>().unwrap().apply(&a, &b).unwrap();
//! assert_eq!(sum.to_string(), "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)\n");
//!
//! let product = multiply(&a, &b).unwrap();
//! assert_eq!(product.get(0, 1), 4);
//! ```

pub mod error;
pub mod format;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{MatrixError, Result};
pub use format::{parse_str, read_matrix, write_matrix};
pub use matrix::{add, multiply, multiply_with_config, subtract};
pub use matrix::{Element, MatrixConfig, MultiplyStrategy, Operation, SparseMatrix};
pub use utils::{from_dense, from_sprs, to_dense, to_sprs_csr, to_triplets};

/// Version information for the DOKMAT library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
