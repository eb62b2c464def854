//! Cell policies: what an unwritten cell reads as, and which writes a sparse
//! backend materializes.
//!
//! A policy is a zero-sized type parameter on [`DenseMatrix`](crate::DenseMatrix)
//! and [`SparseMatrix`](crate::SparseMatrix). Dense storage only consults
//! [`CellPolicy::absent`]; sparse storage also consults [`CellPolicy::retains`]
//! on every write. Matrix `==` compares cells with [`CellPolicy::cell_eq`].

use num_traits::Float;

/// Read-default and write-suppression rules for one element type.
pub trait CellPolicy<E> {
    /// The value an unwritten cell reads as.
    fn absent() -> Option<E>;

    /// Whether a sparse backend keeps an entry for `value`.
    ///
    /// Returning `false` makes the write remove any existing entry.
    fn retains(value: Option<&E>) -> bool;

    /// Equality of two present cells.
    fn cell_eq(a: &E, b: &E) -> bool
    where
        E: PartialEq,
    {
        a == b
    }
}

/// No default and no suppression: unwritten cells read as `None` and every
/// write, including an explicit `None`, is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generic;

impl<E> CellPolicy<E> for Generic {
    fn absent() -> Option<E> {
        None
    }

    fn retains(_value: Option<&E>) -> bool {
        true
    }
}

/// Numeric policy for floats: unwritten cells read as zero, and `None` or
/// zero writes (`-0.0` included) are dropped from sparse storage.
///
/// Cells compare by value identity rather than IEEE `==`: every `NaN` equals
/// every other `NaN`, and `0.0` differs from `-0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Numeric;

impl<T: Float> CellPolicy<T> for Numeric {
    fn absent() -> Option<T> {
        Some(T::zero())
    }

    fn retains(value: Option<&T>) -> bool {
        matches!(value, Some(v) if !v.is_zero())
    }

    fn cell_eq(a: &T, b: &T) -> bool
    where
        T: PartialEq,
    {
        if a.is_nan() || b.is_nan() {
            return a.is_nan() && b.is_nan();
        }
        a == b && a.is_sign_negative() == b.is_sign_negative()
    }
}
