//! dualmat: dense and sparse matrices behind one storage trait
//!
//! This crate provides a generic two-dimensional matrix with two backends, a dense
//! `Vec`-backed one and a sparse `HashMap`-backed one, unified by the
//! [`MatrixStore`] trait. Real-valued matrices read unwritten cells as zero and the
//! sparse backend never stores a zero. On top of the storage layer sit elementwise
//! arithmetic, matrix products, identity construction and a cofactor-expansion
//! determinant, all of which work against either backend.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod ops;

// Re-exports for convenience
pub use self::config::*;
pub use self::core::*;
pub use self::error::*;
pub use self::matrix::*;
pub use self::ops::*;
