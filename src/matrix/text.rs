//! Text rendering and lenient text construction.
//!
//! Rendering is row-major: columns separated by one space, every row
//! terminated by `\n`. Unwritten cells of a [`Generic`](crate::Generic)
//! matrix render as `-`.
//!
//! Construction fills cells row-major from number tokens. Running out of
//! tokens is not an error; the rest of the matrix stays unwritten (zero).
//! Surplus tokens are ignored without being parsed.

use crate::config::options::ParseOptions;
use crate::core::policy::{CellPolicy, Numeric};
use crate::core::shape::Shape;
use crate::core::traits::MatrixStore;
use crate::error::{MatError, Result};
use crate::matrix::dense::DenseMatrix;
use crate::matrix::sparse::SparseMatrix;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

fn write_rows<E, M>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    E: fmt::Display,
    M: MatrixStore<E> + ?Sized,
{
    for row in 0..m.nrows() {
        for col in 0..m.ncols() {
            match m.get(row, col).map_err(|_| fmt::Error)? {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("-")?,
            }
            if col + 1 != m.ncols() {
                f.write_str(" ")?;
            }
        }
        f.write_str("\n")?;
    }
    Ok(())
}

impl<E: Clone + fmt::Display, P: CellPolicy<E>> fmt::Display for DenseMatrix<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows::<E, Self>(self, f)
    }
}

impl<E: Clone + fmt::Display, P: CellPolicy<E>> fmt::Display for SparseMatrix<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows::<E, Self>(self, f)
    }
}

/// Fill a new `rows × cols` store of kind `M` from delimited number text.
pub fn parse_matrix<T, M>(rows: usize, cols: usize, text: &str, options: &ParseOptions) -> Result<M>
where
    T: Float + FromStr,
    M: MatrixStore<T>,
{
    let shape = Shape::new(rows, cols)?;
    let mut m = M::with_shape(shape);
    if shape.size() == 0 {
        return Ok(m);
    }

    let tokens = options.delimiter.tokens(text);
    if tokens.is_empty() {
        return Err(MatError::MissingInput("matrix text has no tokens"));
    }

    for (index, token) in tokens.iter().take(shape.size()).enumerate() {
        let value: T = token.trim().parse().map_err(|_| MatError::ParseElement {
            index,
            token: token.to_string(),
        })?;
        let (row, col) = shape.position(index);
        m.set(row, col, Some(value))?;
    }
    if tokens.len() < shape.size() {
        tracing::trace!(
            tokens = tokens.len(),
            cells = shape.size(),
            "matrix text ran out of tokens; remaining cells left unwritten"
        );
    }
    Ok(m)
}

impl<T: Float + FromStr> DenseMatrix<T, Numeric> {
    /// Build from `text` split by the regular expression `pattern`, such as
    /// `\s` or `,\s*`.
    pub fn from_text(rows: usize, cols: usize, text: &str, pattern: &str) -> Result<Self> {
        Self::from_text_with(rows, cols, text, &ParseOptions::with_pattern(pattern)?)
    }

    pub fn from_text_with(
        rows: usize,
        cols: usize,
        text: &str,
        options: &ParseOptions,
    ) -> Result<Self> {
        parse_matrix::<T, Self>(rows, cols, text, options)
    }
}

impl<T: Float + FromStr> SparseMatrix<T, Numeric> {
    /// Sparse counterpart of [`DenseMatrix::from_text`]; zero tokens are not stored.
    pub fn from_text(rows: usize, cols: usize, text: &str, pattern: &str) -> Result<Self> {
        Self::from_text_with(rows, cols, text, &ParseOptions::with_pattern(pattern)?)
    }

    pub fn from_text_with(
        rows: usize,
        cols: usize,
        text: &str,
        options: &ParseOptions,
    ) -> Result<Self> {
        parse_matrix::<T, Self>(rows, cols, text, options)
    }
}
