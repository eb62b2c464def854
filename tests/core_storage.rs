//! Tests for the storage layer: construction defaults, bounds, sub-matrices,
//! cross-backend equality and the sparse zero-suppression invariant.
//!
//! Dense and sparse backends are driven through the same `MatrixStore`
//! contract with random and fixed data.

use dualmat::{
    DenseMatrix, DoubleMatrix, DoubleSparseMatrix, MatError, MatrixStore, RealStore, Shape,
    SparseMatrix,
};
use rand::Rng;

/// Fill a dense and a sparse matrix with the same random content, about half zeros.
fn random_pair(rows: usize, cols: usize) -> (DoubleMatrix, DoubleSparseMatrix) {
    let mut rng = rand::thread_rng();
    let mut dense = DoubleMatrix::new(rows, cols).unwrap();
    let mut sparse = DoubleSparseMatrix::new(rows, cols).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            let v = if rng.gen_bool(0.5) { 0.0 } else { rng.gen_range(-10.0..10.0) };
            dense.set_value(r, c, v).unwrap();
            sparse.set_value(r, c, v).unwrap();
        }
    }
    (dense, sparse)
}

/// Every freshly built matrix has `rows * cols` cells, all at the default.
#[test]
fn new_matrices_read_default() {
    for (rows, cols) in [(0, 0), (0, 4), (3, 0), (1, 1), (4, 7)] {
        let dense = DoubleMatrix::new(rows, cols).unwrap();
        let sparse = DoubleSparseMatrix::new(rows, cols).unwrap();
        let generic: DenseMatrix<String> = DenseMatrix::new(rows, cols).unwrap();
        assert_eq!(dense.size(), rows * cols);
        assert_eq!(sparse.size(), rows * cols);
        assert_eq!(generic.size(), rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                assert_eq!(dense.value(r, c).unwrap(), 0.0);
                assert_eq!(sparse.value(r, c).unwrap(), 0.0);
                assert_eq!(generic.get(r, c).unwrap(), None);
            }
        }
    }
}

/// Negative dimensions only exist for signed callers and are rejected there.
#[test]
fn signed_dimensions_and_indices() {
    assert!(matches!(Shape::from_signed(-1, 2), Err(MatError::InvalidDimension(_))));
    let m = DoubleMatrix::with_shape(Shape::from_signed(2, 2).unwrap());
    let shape = m.shape();
    assert!(matches!(shape.locate_signed(-1, 0), Err(MatError::IndexOutOfRange(_))));
    assert!(matches!(shape.locate_signed(2, 0), Err(MatError::IndexOutOfRange(_))));
    assert!(matches!(m.get(2, 0), Err(MatError::IndexOutOfRange(_))));
    assert!(matches!(m.get(0, 2), Err(MatError::IndexOutOfRange(_))));
}

/// Equality is shape plus content, independent of backend.
#[test]
fn dense_equals_sparse_with_same_content() {
    let (dense, sparse) = random_pair(5, 4);
    assert!(dense == sparse);
    assert!(sparse == dense);

    let mut other = sparse.clone();
    other.set_value(0, 0, dense.value(0, 0).unwrap() + 1.0).unwrap();
    assert!(dense != other);

    let wider = DoubleSparseMatrix::new(5, 5).unwrap();
    assert!(DoubleMatrix::new(5, 4).unwrap() != wider);
}

/// Explicit zeros in a dense matrix compare equal to absent sparse entries.
#[test]
fn explicit_zero_equals_absent() {
    let mut dense = DoubleMatrix::new(2, 2).unwrap();
    dense.set_value(1, 1, 0.0).unwrap();
    let sparse = DoubleSparseMatrix::new(2, 2).unwrap();
    assert!(dense == sparse);
}

/// No sequence of writes leaves a zero in sparse storage.
#[test]
fn sparse_never_stores_zero() {
    let mut rng = rand::thread_rng();
    let mut m = DoubleSparseMatrix::new(6, 6).unwrap();
    for _ in 0..500 {
        let (r, c) = (rng.gen_range(0..6), rng.gen_range(0..6));
        let v = match rng.gen_range(0..3) {
            0 => None,
            1 => Some(0.0),
            _ => Some(rng.gen_range(-1.0..1.0)),
        };
        m.set(r, c, v).unwrap();
        assert!(m.entries().all(|(_, _, v)| v.is_some_and(|x| *x != 0.0)));
    }
    m.clear();
    assert_eq!(m.stored_len(), 0);
    assert_eq!(m.shape(), Shape::new(6, 6).unwrap());
}

/// A sub-matrix reproduces its region and is fully detached from the source.
#[test]
fn sub_matrix_round_trip() {
    let (dense, sparse) = random_pair(6, 5);
    let (rows, cols) = (1..4, 2..5);

    let mut dsub = dense.sub_matrix(rows.clone(), cols.clone()).unwrap();
    let mut ssub = sparse.sub_matrix(rows.clone(), cols.clone()).unwrap();
    assert_eq!(dsub.shape(), Shape::new(3, 3).unwrap());
    for r in rows.clone() {
        for c in cols.clone() {
            let expected = dense.value(r, c).unwrap();
            assert_eq!(dsub.value(r - rows.start, c - cols.start).unwrap(), expected);
            assert_eq!(ssub.value(r - rows.start, c - cols.start).unwrap(), expected);
        }
    }
    assert!(ssub.entries().all(|(_, _, v)| v.is_some_and(|x| *x != 0.0)));

    dsub.set_value(0, 0, 123.0).unwrap();
    ssub.set_value(0, 0, 123.0).unwrap();
    assert!(dense == sparse);
    assert_ne!(dense.value(1, 2).unwrap(), 123.0);
}

/// Malformed ranges fail with `IndexOutOfRange` on both backends.
#[test]
fn sub_matrix_bad_ranges() {
    let (dense, sparse) = random_pair(3, 3);
    for (rows, cols) in [(0..0, 0..1), (0..4, 0..1), (0..1, 3..3), (0..1, 1..4)] {
        assert!(matches!(
            dense.sub_matrix(rows.clone(), cols.clone()),
            Err(MatError::IndexOutOfRange(_))
        ));
        assert!(matches!(
            sparse.sub_matrix(rows, cols),
            Err(MatError::IndexOutOfRange(_))
        ));
    }
}

/// The unspecialized sparse matrix keeps explicit `None` entries.
#[test]
fn generic_sparse_stores_none() {
    let mut m: SparseMatrix<char> = SparseMatrix::new(1, 3).unwrap();
    m.set(0, 0, Some('a')).unwrap();
    m.set(0, 1, None).unwrap();
    assert_eq!(m.stored_len(), 2);
    let dense = m.to_dense();
    assert!(dense == m);
    assert_eq!(dense.to_string(), "a - -\n");
}

/// Float cells compare by value identity: `NaN` matches `NaN`, `-0.0` is not `0.0`.
#[test]
fn float_equality_is_value_identity() {
    let (mut dense, _) = random_pair(3, 3);
    dense.set_value(1, 2, f64::NAN).unwrap();
    let sparse = dense.to_sparse();
    assert!(dense == dense.clone());
    assert!(dense == sparse);
    assert!(sparse == sparse.clone());

    let mut neg = DoubleMatrix::new(2, 2).unwrap();
    neg.set_value(0, 1, -0.0).unwrap();
    let mut absent = DoubleSparseMatrix::new(2, 2).unwrap();
    absent.set_value(0, 1, -0.0).unwrap();
    assert_eq!(absent.stored_len(), 0);
    assert!(neg != absent);
    assert!(absent != neg);
}
