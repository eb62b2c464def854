//! Determinant by cofactor (Laplace) expansion along the first row.
//!
//! For an `n × n` matrix `a`:
//!
//! ```text
//! det(a) = Σ_x (-1)^x · a[0][x] · det(minor(a, 0, x))
//! ```
//!
//! with `det` of a `1 × 1` matrix being its only entry. Minors are built with
//! the same backend as the input (a sparse matrix recurses through sparse
//! minors) and one minor buffer is allocated per recursion level, rewritten
//! for every excluded column. Dense and sparse inputs with the same content
//! give bit-identical results, since both accumulate in the same order.
//!
//! The cost is `O(n!)`; this is meant for small matrices only.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §2.1

use crate::core::shape::Shape;
use crate::core::traits::{MatrixStore, RealStore};
use crate::error::{MatError, Result};
use crate::matrix::{RealMatrix, RealSparseMatrix};
use num_traits::Float;

/// Determinant of any square real-valued store, recursing through minors of kind `M`.
pub fn cofactor_determinant<T, M>(m: &M) -> Result<T>
where
    T: Float,
    M: MatrixStore<T>,
{
    let shape = m.shape();
    if !shape.is_square() {
        return Err(MatError::InvalidDimension(format!(
            "determinant needs a square matrix, got {shape}"
        )));
    }
    if shape.rows() == 0 {
        return Err(MatError::InvalidDimension(
            "determinant of an empty matrix".to_string(),
        ));
    }
    tracing::debug!(order = shape.rows(), "cofactor expansion");
    expand(m, shape.rows())
}

fn expand<T, M>(a: &M, n: usize) -> Result<T>
where
    T: Float,
    M: MatrixStore<T>,
{
    if n == 1 {
        return a.value(0, 0);
    }

    let mut minor = M::with_shape(Shape::square(n - 1)?);
    let mut det = T::zero();
    let mut sign = T::one();
    for x in 0..n {
        for i in 1..n {
            for (q, j) in (0..n).filter(|&j| j != x).enumerate() {
                minor.set_value(i - 1, q, a.value(i, j)?)?;
            }
        }
        let pivot = a.value(0, x)?;
        det = det + pivot * expand(&minor, n - 1)? * sign;
        sign = -sign;
    }
    Ok(det)
}

/// Determinant of a dense matrix.
pub fn determinant<T: Float>(m: &RealMatrix<T>) -> Result<T> {
    cofactor_determinant(m)
}

/// Determinant of a sparse matrix, recursing through sparse minors.
pub fn determinant_sparse<T: Float>(m: &RealSparseMatrix<T>) -> Result<T> {
    cofactor_determinant(m)
}
