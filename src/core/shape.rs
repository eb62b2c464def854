//! Matrix dimensions and row-major linear indexing.

use crate::error::{MatError, Result};
use std::fmt;
use std::ops::Range;

/// Fixed `rows × cols` extent of a matrix.
///
/// A shape is only constructed through [`Shape::new`] (or its signed
/// counterpart), so `rows * cols` is known to fit in a `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Create a shape, failing if the cell count overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        rows.checked_mul(cols).ok_or_else(|| {
            MatError::InvalidDimension(format!("{rows}x{cols} exceeds addressable size"))
        })?;
        Ok(Shape { rows, cols })
    }

    /// Create a shape from signed dimensions; negative values are rejected.
    pub fn from_signed(rows: i64, cols: i64) -> Result<Self> {
        if rows < 0 || cols < 0 {
            return Err(MatError::InvalidDimension(format!(
                "negative dimensions {rows}x{cols}"
            )));
        }
        let to_usize = |v: i64| {
            usize::try_from(v)
                .map_err(|_| MatError::InvalidDimension(format!("dimension {v} too large")))
        };
        Shape::new(to_usize(rows)?, to_usize(cols)?)
    }

    /// Square `n × n` shape.
    pub fn square(n: usize) -> Result<Self> {
        Shape::new(n, n)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, `rows * cols`.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major linear index of `(row, col)`, bounds checked.
    pub fn locate(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatError::IndexOutOfRange(format!(
                "({row}, {col}) outside {self}"
            )));
        }
        Ok(row * self.cols + col)
    }

    /// Like [`Shape::locate`] for signed indices; negative indices are out of range.
    pub fn locate_signed(&self, row: i64, col: i64) -> Result<usize> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => self.locate(r, c),
            _ => Err(MatError::IndexOutOfRange(format!(
                "({row}, {col}) outside {self}"
            ))),
        }
    }

    /// Inverse of the linear index: `(row, col)` for `index < size()`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Validate a half-open sub-region and return its shape.
    ///
    /// Both ranges must be non-empty and lie inside this shape.
    pub fn region(&self, rows: &Range<usize>, cols: &Range<usize>) -> Result<Shape> {
        if rows.start >= rows.end || rows.end > self.rows {
            return Err(MatError::IndexOutOfRange(format!(
                "row range {}..{} invalid for {self}",
                rows.start, rows.end
            )));
        }
        if cols.start >= cols.end || cols.end > self.cols {
            return Err(MatError::IndexOutOfRange(format!(
                "column range {}..{} invalid for {self}",
                cols.start, cols.end
            )));
        }
        Ok(Shape {
            rows: rows.end - rows.start,
            cols: cols.end - cols.start,
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
