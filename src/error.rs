//! Error types for sparse matrix operations

use std::fmt;
use std::path::PathBuf;

use crate::matrix::Operation;

/// Errors that can occur while loading or combining matrices
#[derive(Debug)]
pub enum MatrixError {
    /// A header or entry line did not match the file grammar
    Format {
        /// 1-based line number of the offending line
        line: usize,
    },
    /// Operand shapes are incompatible with the requested operation
    DimensionMismatch(Operation),
    /// Operation name outside the supported set
    UnknownOperation(String),
    /// An intermediate or final value does not fit the element type
    Overflow(Operation),
    /// A coordinate lies outside the declared shape where a bounded format is required
    OutOfBounds { row: i64, col: i64 },
    /// Reading or writing a matrix file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Format { .. } => write!(f, "Input file has wrong format"),
            MatrixError::DimensionMismatch(op) => {
                write!(f, "Matrix size mismatch for {}", op.noun())
            }
            MatrixError::UnknownOperation(_) => write!(f, "Invalid operation"),
            MatrixError::Overflow(op) => write!(f, "Integer overflow during {}", op.noun()),
            MatrixError::OutOfBounds { row, col } => {
                write!(f, "Entry ({row}, {col}) lies outside the matrix dimensions")
            }
            MatrixError::Io { path, .. } => {
                write!(f, "cannot access matrix file {}", path.display())
            }
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrixError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
