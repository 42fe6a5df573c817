//! Configuration for sparse matrix arithmetic

use std::fmt;
use std::str::FromStr;

/// Strategy used to pair entries of A with entries of B during multiplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplyStrategy {
    /// For every entry (r, k) of A, probe B at (k, c) for every column c of B.
    /// Cost grows with the column count of B.
    #[default]
    ColumnSweep,
    /// For every entry (r, k) of A, walk only the stored entries of row k of B
    RowIndexed,
}

impl MultiplyStrategy {
    /// All strategies, in declaration order
    pub const ALL: [MultiplyStrategy; 2] = [
        MultiplyStrategy::ColumnSweep,
        MultiplyStrategy::RowIndexed,
    ];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            MultiplyStrategy::ColumnSweep => "column-sweep",
            MultiplyStrategy::RowIndexed => "row-indexed",
        }
    }
}

impl fmt::Display for MultiplyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MultiplyStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown multiply strategy '{}' (expected column-sweep or row-indexed)",
                    s.trim()
                )
            })
    }
}

/// Configuration for matrix arithmetic
#[derive(Debug, Clone, Default)]
pub struct MatrixConfig {
    /// How products are gathered in `multiply`
    pub multiply_strategy: MultiplyStrategy,
}

impl MatrixConfig {
    /// Create a config using the given multiplication strategy
    pub fn with_strategy(strategy: MultiplyStrategy) -> Self {
        Self {
            multiply_strategy: strategy,
        }
    }
}
