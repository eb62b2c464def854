//! Conversions between dualmat stores and faer dense matrices.
//!
//! These wrappers let any real-valued [`MatrixStore`] be handed to faer (for
//! example to cross-check a product or determinant against faer's kernels) and
//! let faer results be brought back into a dense or sparse backend.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::shape::Shape;
use crate::core::traits::{MatrixStore, RealStore};
use crate::error::Result;
use faer::{Mat, MatRef};
use num_traits::Float;

/// Copy a real-valued store into a `faer::Mat`; unwritten cells become zero.
pub fn to_faer<T, M>(m: &M) -> Result<Mat<T>>
where
    T: Float,
    M: MatrixStore<T> + ?Sized,
{
    let (rows, cols) = (m.nrows(), m.ncols());
    let mut values = Vec::with_capacity(m.size());
    for row in 0..rows {
        for col in 0..cols {
            values.push(m.value(row, col)?);
        }
    }
    Ok(Mat::from_fn(rows, cols, |i, j| values[i * cols + j]))
}

/// Copy a faer matrix into a new store of kind `M`.
///
/// Sparse numeric targets drop the zeros as usual.
pub fn from_faer<T, M>(a: MatRef<'_, T>) -> Result<M>
where
    T: Float,
    M: MatrixStore<T>,
{
    let mut m = M::with_shape(Shape::new(a.nrows(), a.ncols())?);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            m.set(i, j, Some(a[(i, j)]))?;
        }
    }
    Ok(m)
}
