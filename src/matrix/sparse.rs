//! Sparse matrix storage keyed by row-major linear index.
//!
//! Only written cells cost storage. Whether a write is materialized is up to
//! the [`CellPolicy`]: [`Generic`] stores every write, explicit `None`
//! included, while [`Numeric`] removes the entry for `None` or zero so the
//! map never holds a zero.

use crate::core::policy::{CellPolicy, Generic, Numeric};
use crate::core::shape::Shape;
use crate::core::traits::{MatrixStore, structurally_equal};
use crate::error::Result;
use crate::matrix::dense::DenseMatrix;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::ops::Range;

/// Sparse matrix over `E`, with read defaults and write suppression chosen by `P`.
#[derive(Clone, Debug)]
pub struct SparseMatrix<E, P = Generic> {
    shape: Shape,
    entries: HashMap<usize, Option<E>>,
    _policy: PhantomData<P>,
}

/// Sparse matrix of floats: never stores a zero, unwritten cells read as zero.
pub type RealSparseMatrix<T> = SparseMatrix<T, Numeric>;

/// Sparse matrix of `f64`.
pub type DoubleSparseMatrix = RealSparseMatrix<f64>;

impl<E, P> SparseMatrix<E, P> {
    /// Create a `rows × cols` matrix with no stored entries.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::empty(Shape::new(rows, cols)?))
    }

    fn empty(shape: Shape) -> Self {
        SparseMatrix {
            shape,
            entries: HashMap::new(),
            _policy: PhantomData,
        }
    }

    /// Number of materialized entries.
    pub fn stored_len(&self) -> usize {
        self.entries.len()
    }

    /// Materialized entries as `(row, col, element)`, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, Option<&E>)> + '_ {
        self.entries.iter().map(move |(&index, value)| {
            let (row, col) = self.shape.position(index);
            (row, col, value.as_ref())
        })
    }

    /// Store `value` without bounds or policy checks; callers guarantee both.
    pub(crate) fn insert_unchecked(&mut self, row: usize, col: usize, value: E) {
        self.entries.insert(row * self.shape.cols() + col, Some(value));
    }
}

impl<E: Clone, P: CellPolicy<E>> SparseMatrix<E, P> {
    /// Dense copy with the same policy; stored entries become written slots.
    pub fn to_dense(&self) -> DenseMatrix<E, P> {
        let mut dense = DenseMatrix::<E, P>::with_shape(self.shape);
        for (&index, value) in &self.entries {
            dense.put_unchecked(index, value.clone());
        }
        dense
    }
}

impl<E: Clone, P: CellPolicy<E>> MatrixStore<E> for SparseMatrix<E, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Result<Option<E>> {
        let index = self.shape.locate(row, col)?;
        Ok(match self.entries.get(&index) {
            Some(value) => value.clone(),
            None => P::absent(),
        })
    }

    fn set(&mut self, row: usize, col: usize, element: Option<E>) -> Result<()> {
        let index = self.shape.locate(row, col)?;
        if P::retains(element.as_ref()) {
            self.entries.insert(index, element);
        } else {
            self.entries.remove(&index);
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn with_shape(shape: Shape) -> Self {
        Self::empty(shape)
    }

    fn sub_matrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self> {
        let shape = self.shape.region(&rows, &cols)?;
        let mut m = Self::empty(shape);
        for row in rows.clone() {
            for col in cols.clone() {
                if let Some(value) = self.get(row, col)? {
                    if P::retains(Some(&value)) {
                        m.set(row - rows.start, col - cols.start, Some(value))?;
                    }
                }
            }
        }
        Ok(m)
    }
}

impl<E, P, Q> PartialEq<SparseMatrix<E, Q>> for SparseMatrix<E, P>
where
    E: Clone + PartialEq,
    P: CellPolicy<E>,
    Q: CellPolicy<E>,
{
    fn eq(&self, other: &SparseMatrix<E, Q>) -> bool {
        structurally_equal::<E, P, Q, _, _>(self, other)
    }
}

impl<E, P, Q> PartialEq<DenseMatrix<E, Q>> for SparseMatrix<E, P>
where
    E: Clone + PartialEq,
    P: CellPolicy<E>,
    Q: CellPolicy<E>,
{
    fn eq(&self, other: &DenseMatrix<E, Q>) -> bool {
        structurally_equal::<E, P, Q, _, _>(self, other)
    }
}
