//! The closed set of supported binary operations

use std::fmt;
use std::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::matrix::arithmetic::{add, multiply_with_config, subtract};
use crate::matrix::config::MatrixConfig;
use crate::matrix::dok::{Element, SparseMatrix};

/// A binary matrix operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Every supported operation
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Name accepted by [`Operation::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Noun used in error messages
    pub fn noun(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Applies the operation with the default configuration
    pub fn apply<T: Element>(
        &self,
        a: &SparseMatrix<T>,
        b: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        self.apply_with_config(a, b, &MatrixConfig::default())
    }

    /// Applies the operation; `config` only affects multiplication
    pub fn apply_with_config<T: Element>(
        &self,
        a: &SparseMatrix<T>,
        b: &SparseMatrix<T>,
        config: &MatrixConfig,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply_with_config(a, b, config),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = MatrixError;

    /// Parses `add`, `subtract` or `multiply`, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.name() == wanted)
            .ok_or(MatrixError::UnknownOperation(wanted))
    }
}
