//! Dense, row-major matrix storage.
//!
//! `DenseMatrix` keeps one slot per cell in a `Vec<Option<E>>` and stores
//! every write as-is, including `None` and zero. Only reads consult the
//! [`CellPolicy`]: with [`Numeric`] an unwritten slot reads as zero.

use crate::core::policy::{CellPolicy, Generic, Numeric};
use crate::core::shape::Shape;
use crate::core::traits::{MatrixStore, structurally_equal};
use crate::error::{MatError, Result};
use crate::matrix::sparse::SparseMatrix;
use std::marker::PhantomData;
use std::ops::Range;

/// Dense matrix over `E`, with read defaults chosen by `P`.
#[derive(Clone, Debug)]
pub struct DenseMatrix<E, P = Generic> {
    shape: Shape,
    data: Vec<Option<E>>,
    _policy: PhantomData<P>,
}

/// Dense matrix of floats: unwritten cells read as zero.
pub type RealMatrix<T> = DenseMatrix<T, Numeric>;

/// Dense matrix of `f64`.
pub type DoubleMatrix = RealMatrix<f64>;

impl<E, P> DenseMatrix<E, P> {
    /// Allocate a `rows × cols` matrix with every slot unwritten.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::empty(Shape::new(rows, cols)?))
    }

    fn empty(shape: Shape) -> Self {
        DenseMatrix {
            shape,
            data: std::iter::repeat_with(|| None).take(shape.size()).collect(),
            _policy: PhantomData,
        }
    }

    /// Build from a slice of equally long rows.
    pub fn from_rows<R: AsRef<[E]>>(rows: &[R]) -> Result<Self>
    where
        E: Clone,
    {
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatError::InvalidDimension(format!(
                    "row {i} has {} columns, expected {ncols}",
                    row.len()
                )));
            }
            data.extend(row.iter().cloned().map(Some));
        }
        Ok(DenseMatrix {
            shape: Shape::new(rows.len(), ncols)?,
            data,
            _policy: PhantomData,
        })
    }

    /// Raw slots in row-major order; `None` marks an unwritten cell.
    pub fn slots(&self) -> &[Option<E>] {
        &self.data
    }

    /// Overwrite the slot at row-major `index`; callers guarantee it is in bounds.
    pub(crate) fn put_unchecked(&mut self, index: usize, element: Option<E>) {
        self.data[index] = element;
    }
}

impl<E: Clone, P: CellPolicy<E>> DenseMatrix<E, P> {
    /// Sparse copy with the same policy; unwritten and suppressed cells stay absent.
    pub fn to_sparse(&self) -> SparseMatrix<E, P> {
        let mut sparse = SparseMatrix::<E, P>::with_shape(self.shape);
        for (index, slot) in self.data.iter().enumerate() {
            if let Some(value) = slot {
                if P::retains(Some(value)) {
                    let (row, col) = self.shape.position(index);
                    sparse.insert_unchecked(row, col, value.clone());
                }
            }
        }
        sparse
    }
}

impl<E: Clone, P: CellPolicy<E>> MatrixStore<E> for DenseMatrix<E, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Result<Option<E>> {
        let index = self.shape.locate(row, col)?;
        Ok(self.data[index].clone().or_else(P::absent))
    }

    fn set(&mut self, row: usize, col: usize, element: Option<E>) -> Result<()> {
        let index = self.shape.locate(row, col)?;
        self.data[index] = element;
        Ok(())
    }

    fn clear(&mut self) {
        self.data.iter_mut().for_each(|slot| *slot = None);
    }

    fn with_shape(shape: Shape) -> Self {
        Self::empty(shape)
    }

    fn sub_matrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self> {
        let shape = self.shape.region(&rows, &cols)?;
        let mut m = Self::empty(shape);
        for row in rows.clone() {
            for col in cols.clone() {
                m.set(row - rows.start, col - cols.start, self.get(row, col)?)?;
            }
        }
        Ok(m)
    }
}

impl<E, P, Q> PartialEq<DenseMatrix<E, Q>> for DenseMatrix<E, P>
where
    E: Clone + PartialEq,
    P: CellPolicy<E>,
    Q: CellPolicy<E>,
{
    fn eq(&self, other: &DenseMatrix<E, Q>) -> bool {
        structurally_equal::<E, P, Q, _, _>(self, other)
    }
}

impl<E, P, Q> PartialEq<SparseMatrix<E, Q>> for DenseMatrix<E, P>
where
    E: Clone + PartialEq,
    P: CellPolicy<E>,
    Q: CellPolicy<E>,
{
    fn eq(&self, other: &SparseMatrix<E, Q>) -> bool {
        structurally_equal::<E, P, Q, _, _>(self, other)
    }
}
