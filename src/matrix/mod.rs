// Matrix data structures and operations

pub mod arithmetic;
pub mod config;
pub mod dok;
pub mod operation;

pub use arithmetic::{add, multiply, multiply_with_config, subtract};
pub use config::{MatrixConfig, MultiplyStrategy};
pub use dok::{Element, SparseMatrix};
pub use operation::Operation;
