//! Storage-agnostic operations over real-valued matrices.
//!
//! Everything here reads and writes through [`MatrixStore`](crate::MatrixStore)
//! only; inputs are never mutated and each call returns a freshly owned result.

pub mod arith;
pub use arith::{
    add, add_sparse, dimensions_equal, identity, identity_sparse, multiply, multiply_sparse,
    scalar_multiply, scalar_multiply_sparse, subtract, subtract_sparse,
};

pub mod determinant;
pub use determinant::{cofactor_determinant, determinant, determinant_sparse};
