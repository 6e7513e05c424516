//! `Matrix`: a two-dimensional grid of reals.
//!
//! This is a thin newtype around `nalgebra::DMatrix<f64>`.  Tables are
//! written row by row, so the constructors take row-major data and the
//! accessors speak in rows and columns.

use std::ops::Index;

use ceng_core::{
    ensure_shape,
    errors::{Error, Result},
    Real,
};
use nalgebra::DMatrix;

/// A dynamically-sized 2D matrix of `Real` values (row-major access).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create from a row-major data slice.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Create from nested rows as written in a table.
    ///
    /// # Errors
    /// Returns a shape error naming `argument` if the rows are empty or
    /// do not all have the same length.
    pub fn from_rows(rows: &[Vec<Real>], argument: &str) -> Result<Self> {
        ensure_shape!(!rows.is_empty(), argument, "2-D array has no rows");
        let cols = rows[0].len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::shape(
                argument,
                format!(
                    "ragged 2-D array: row 0 has {cols} columns but row {i} has {}",
                    row.len()
                ),
            ));
        }
        let data: Vec<Real> = rows.iter().flatten().copied().collect();
        Ok(Self::from_row_slice(rows.len(), cols, &data))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Extract row `i`.
    pub fn row(&self, i: usize) -> Vec<Real> {
        self.0.row(i).iter().copied().collect()
    }

    /// Extract column `j`.
    pub fn column(&self, j: usize) -> Vec<Real> {
        self.0.column(j).iter().copied().collect()
    }

    /// All rows, top to bottom.
    pub fn to_rows(&self) -> Vec<Vec<Real>> {
        (0..self.rows()).map(|i| self.row(i)).collect()
    }

    /// Reverse the order of the rows.
    pub fn reverse_rows(&self) -> Self {
        let (rows, cols) = self.shape();
        Self(DMatrix::from_fn(rows, cols, |i, j| self.0[(rows - 1 - i, j)]))
    }

    /// Reverse the order of the columns.
    pub fn reverse_columns(&self) -> Self {
        let (rows, cols) = self.shape();
        Self(DMatrix::from_fn(rows, cols, |i, j| self.0[(i, cols - 1 - j)]))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_is_row_major() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], "z").unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), vec![4.0, 5.0, 6.0]);
        assert_eq!(m.column(1), vec![2.0, 5.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]], "y").unwrap_err();
        assert!(err.is_shape());
        assert!(err.to_string().contains("`y`"));
    }

    #[test]
    fn empty_rows_are_rejected() {
        assert!(Matrix::from_rows(&[], "z").unwrap_err().is_shape());
    }

    #[test]
    fn transpose_and_reverse() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]], "z").unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (2, 3));
        assert_eq!(t.row(0), vec![1.0, 3.0, 5.0]);
        assert_eq!(m.reverse_rows().row(0), vec![5.0, 6.0]);
        assert_eq!(m.reverse_columns().row(0), vec![2.0, 1.0]);
    }
}
