//! Elementwise arithmetic, matrix product and identity construction.
//!
//! Every function reads its inputs only through [`MatrixStore`], so dense and
//! sparse operands can be mixed freely, and returns a newly allocated result.
//! The `_sparse` variants produce a [`RealSparseMatrix`]; zero results are
//! never stored there.

use crate::core::shape::Shape;
use crate::core::traits::{MatrixStore, RealStore};
use crate::error::{MatError, Result};
use crate::matrix::{RealMatrix, RealSparseMatrix};
use num_traits::Float;

/// True when both stores have the same number of rows and columns.
pub fn dimensions_equal<T, A, B>(m1: &A, m2: &B) -> bool
where
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
{
    m1.shape() == m2.shape()
}

fn require_same_shape<T, A, B>(m1: &A, m2: &B) -> Result<Shape>
where
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
{
    if !dimensions_equal::<T, A, B>(m1, m2) {
        return Err(MatError::InvalidDimension(format!(
            "operands are {} and {}",
            m1.shape(),
            m2.shape()
        )));
    }
    Ok(m1.shape())
}

fn zip_with<T, A, B, O, F>(m1: &A, m2: &B, f: F) -> Result<O>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
    O: MatrixStore<T>,
    F: Fn(T, T) -> T,
{
    let shape = require_same_shape::<T, A, B>(m1, m2)?;
    let mut out = O::with_shape(shape);
    for r in 0..shape.rows() {
        for c in 0..shape.cols() {
            out.set_value(r, c, f(m1.value(r, c)?, m2.value(r, c)?))?;
        }
    }
    Ok(out)
}

fn product<T, A, B, O>(m1: &A, m2: &B) -> Result<O>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
    O: MatrixStore<T>,
{
    if m1.ncols() != m2.nrows() {
        return Err(MatError::InvalidDimension(format!(
            "cannot multiply {} by {}",
            m1.shape(),
            m2.shape()
        )));
    }
    let mut out = O::with_shape(Shape::new(m1.nrows(), m2.ncols())?);
    for r in 0..m1.nrows() {
        for c in 0..m2.ncols() {
            let mut val = T::zero();
            for z in 0..m1.ncols() {
                val = val + m1.value(r, z)? * m2.value(z, c)?;
            }
            out.set_value(r, c, val)?;
        }
    }
    Ok(out)
}

fn scaled<T, A, O>(m: &A, scalar: T) -> Result<O>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    O: MatrixStore<T>,
{
    let mut out = O::with_shape(m.shape());
    for r in 0..m.nrows() {
        for c in 0..m.ncols() {
            out.set_value(r, c, scalar * m.value(r, c)?)?;
        }
    }
    Ok(out)
}

fn eye<T: Float, O: MatrixStore<T>>(n: usize) -> Result<O> {
    if n < 1 {
        return Err(MatError::InvalidDimension(
            "identity order must be at least 1".to_string(),
        ));
    }
    let mut out = O::with_shape(Shape::square(n)?);
    for i in 0..n {
        out.set_value(i, i, T::one())?;
    }
    Ok(out)
}

/// `m1 + m2` into a dense matrix.
pub fn add<T, A, B>(m1: &A, m2: &B) -> Result<RealMatrix<T>>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
{
    zip_with(m1, m2, |x, y| x + y)
}

/// `m1 + m2` into a sparse matrix.
pub fn add_sparse<T, A, B>(m1: &A, m2: &B) -> Result<RealSparseMatrix<T>>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
{
    zip_with(m1, m2, |x, y| x + y)
}

/// `m1 - m2` into a dense matrix.
pub fn subtract<T, A, B>(m1: &A, m2: &B) -> Result<RealMatrix<T>>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
{
    zip_with(m1, m2, |x, y| x - y)
}

/// `m1 - m2` into a sparse matrix.
pub fn subtract_sparse<T, A, B>(m1: &A, m2: &B) -> Result<RealSparseMatrix<T>>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
{
    zip_with(m1, m2, |x, y| x - y)
}

/// Matrix product `m1 · m2`; requires `m1.ncols() == m2.nrows()`.
pub fn multiply<T, A, B>(m1: &A, m2: &B) -> Result<RealMatrix<T>>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
{
    product(m1, m2)
}

pub fn multiply_sparse<T, A, B>(m1: &A, m2: &B) -> Result<RealSparseMatrix<T>>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
    B: MatrixStore<T> + ?Sized,
{
    product(m1, m2)
}

pub fn scalar_multiply<T, A>(m: &A, scalar: T) -> Result<RealMatrix<T>>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
{
    scaled(m, scalar)
}

pub fn scalar_multiply_sparse<T, A>(m: &A, scalar: T) -> Result<RealSparseMatrix<T>>
where
    T: Float,
    A: MatrixStore<T> + ?Sized,
{
    scaled(m, scalar)
}

/// `n × n` identity; `n` must be at least 1.
pub fn identity<T: Float>(n: usize) -> Result<RealMatrix<T>> {
    eye(n)
}

pub fn identity_sparse<T: Float>(n: usize) -> Result<RealSparseMatrix<T>> {
    eye(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{DoubleMatrix, DoubleSparseMatrix};

    fn sample() -> DoubleMatrix {
        DoubleMatrix::from_rows(&[[1.0, -2.0], [0.5, 4.0]]).unwrap()
    }

    #[test]
    fn add_and_subtract() {
        let a = sample();
        let b = DoubleMatrix::from_rows(&[[1.0, 2.0], [-0.5, 1.0]]).unwrap();
        assert_eq!(
            add(&a, &b).unwrap(),
            DoubleMatrix::from_rows(&[[2.0, 0.0], [0.0, 5.0]]).unwrap()
        );
        assert_eq!(
            subtract(&a, &b).unwrap(),
            DoubleMatrix::from_rows(&[[0.0, -4.0], [1.0, 3.0]]).unwrap()
        );
    }

    #[test]
    fn sparse_results_skip_zeros() {
        let a = sample();
        let b = DoubleMatrix::from_rows(&[[1.0, 2.0], [-0.5, 1.0]]).unwrap();
        let sum = add_sparse(&a, &b).unwrap();
        assert_eq!(sum.stored_len(), 2);
        let diff = subtract_sparse(&a, &a).unwrap();
        assert_eq!(diff.stored_len(), 0);
        let scaled = scalar_multiply_sparse(&a, 0.0).unwrap();
        assert_eq!(scaled.stored_len(), 0);
    }

    #[test]
    fn mismatched_shapes() {
        let a = sample();
        let b = DoubleMatrix::new(2, 3).unwrap();
        assert!(!dimensions_equal(&a, &b));
        assert!(matches!(add(&a, &b), Err(MatError::InvalidDimension(_))));
        assert!(matches!(subtract_sparse(&a, &b), Err(MatError::InvalidDimension(_))));
        assert!(matches!(multiply(&b, &a), Err(MatError::InvalidDimension(_))));
        assert!(multiply(&a, &b).is_ok());
    }

    #[test]
    fn product_of_rectangular() {
        let a = DoubleMatrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
        let b = DoubleSparseMatrix::from_text(3, 1, "4 0 6", r"\s").unwrap();
        let p = multiply(&a, &b).unwrap();
        assert_eq!(p.shape(), Shape::new(1, 1).unwrap());
        assert_eq!(p.value(0, 0).unwrap(), 22.0);
    }

    #[test]
    fn scalar_and_identity() {
        let a = sample();
        assert_eq!(
            scalar_multiply(&a, 2.0).unwrap(),
            DoubleMatrix::from_rows(&[[2.0, -4.0], [1.0, 8.0]]).unwrap()
        );
        let i3 = identity::<f64>(3).unwrap();
        let s3 = identity_sparse::<f64>(3).unwrap();
        assert_eq!(s3.stored_len(), 3);
        assert!(i3 == s3);
        assert!(matches!(identity::<f64>(0), Err(MatError::InvalidDimension(_))));
        assert!(matches!(identity_sparse::<f64>(0), Err(MatError::InvalidDimension(_))));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = sample();
        let before = a.clone();
        let _ = add(&a, &a).unwrap();
        let _ = multiply(&a, &a).unwrap();
        assert_eq!(a, before);
    }
}
