//! Matrix module: dense and sparse backends, text rendering and parsing.

pub mod dense;
pub use dense::{DenseMatrix, DoubleMatrix, RealMatrix};
pub mod sparse;
pub use sparse::{DoubleSparseMatrix, RealSparseMatrix, SparseMatrix};
pub mod text;
pub use text::parse_matrix;
