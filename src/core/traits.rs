//! Core storage traits for dualmat.

use crate::core::policy::CellPolicy;
use crate::core::shape::Shape;
use crate::error::Result;
use num_traits::Float;
use std::ops::Range;

/// Row/column-addressed storage of optional elements.
///
/// This is the only surface the arithmetic and determinant code reads and
/// writes through, so dense and sparse backends are interchangeable there.
pub trait MatrixStore<E> {
    /// Dimensions, fixed at construction.
    fn shape(&self) -> Shape;

    /// Element at `(row, col)`, or the backend's default for unwritten cells.
    fn get(&self, row: usize, col: usize) -> Result<Option<E>>;

    /// Write `element` at `(row, col)`.
    fn set(&mut self, row: usize, col: usize, element: Option<E>) -> Result<()>;

    /// Reset every cell to unwritten; the shape is kept.
    fn clear(&mut self);

    /// A new, all-unwritten matrix of the same backend.
    fn with_shape(shape: Shape) -> Self
    where
        Self: Sized;

    /// Independent copy of the half-open region `rows × cols`, re-indexed from `(0, 0)`.
    fn sub_matrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self>
    where
        Self: Sized;

    fn nrows(&self) -> usize {
        self.shape().rows()
    }

    fn ncols(&self) -> usize {
        self.shape().cols()
    }

    /// Number of cells, `nrows() * ncols()`.
    fn size(&self) -> usize {
        self.shape().size()
    }
}

/// Real-valued view over any store: every cell is a definite number.
///
/// Unwritten cells read as zero whatever the backend's policy.
pub trait RealStore<T: Float>: MatrixStore<T> {
    fn value(&self, row: usize, col: usize) -> Result<T> {
        Ok(self.get(row, col)?.unwrap_or_else(T::zero))
    }

    fn set_value(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.set(row, col, Some(value))
    }
}

impl<T: Float, M: MatrixStore<T> + ?Sized> RealStore<T> for M {}

/// Shape-and-content equality across backends.
///
/// Two stores are equal when their shapes match and every cell reads the
/// same: both unwritten, or present and equal under the `cell_eq` of both
/// policies `P` and `Q`.
pub fn structurally_equal<E, P, Q, A, B>(a: &A, b: &B) -> bool
where
    E: PartialEq,
    P: CellPolicy<E>,
    Q: CellPolicy<E>,
    A: MatrixStore<E> + ?Sized,
    B: MatrixStore<E> + ?Sized,
{
    if a.shape() != b.shape() {
        return false;
    }
    for row in 0..a.nrows() {
        for col in 0..a.ncols() {
            let same = match (a.get(row, col), b.get(row, col)) {
                (Ok(None), Ok(None)) => true,
                (Ok(Some(x)), Ok(Some(y))) => P::cell_eq(&x, &y) && Q::cell_eq(&x, &y),
                _ => false,
            };
            if !same {
                return false;
            }
        }
    }
    true
}
