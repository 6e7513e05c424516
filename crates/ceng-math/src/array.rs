//! `Array`: the shape a table is supplied in.
//!
//! Chart data arrives either as a flat sequence (one axis, or the values of a
//! single curve) or as nested rows (a 2-D grid).  [`Array`] keeps the rank
//! explicit so that mode detection is a match on the variant rather than an
//! inspection of nesting depth.  Nested rows are stored as given; turning
//! them into a [`Matrix`] is where raggedness is caught.

use ceng_core::{
    errors::{Error, Result},
    Real,
};
use num_traits::ToPrimitive;

use crate::matrix::Matrix;

/// A 1-D or 2-D numeric array.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    /// A flat sequence of samples.
    Vector(Vec<Real>),
    /// Nested rows, row-major.
    Grid(Vec<Vec<Real>>),
}

impl Array {
    /// Build a vector from any numeric element type, e.g. integer chart
    /// readings.
    ///
    /// # Errors
    /// Returns a precondition error if an element is not representable as
    /// a `Real`.
    pub fn cast<T, I>(values: I) -> Result<Self>
    where
        T: ToPrimitive,
        I: IntoIterator<Item = T>,
    {
        to_reals(values).map(Self::Vector)
    }

    /// Build a grid from nested rows of any numeric element type.
    ///
    /// # Errors
    /// Returns a precondition error if an element is not representable as
    /// a `Real`.
    pub fn cast_grid<T, R, I>(rows: I) -> Result<Self>
    where
        T: ToPrimitive,
        R: IntoIterator<Item = T>,
        I: IntoIterator<Item = R>,
    {
        rows.into_iter()
            .map(to_reals)
            .collect::<Result<Vec<_>>>()
            .map(Self::Grid)
    }

    /// Number of dimensions (1 or 2).
    pub fn ndim(&self) -> usize {
        match self {
            Self::Vector(_) => 1,
            Self::Grid(_) => 2,
        }
    }

    /// `true` for a 2-D array.
    pub fn is_2d(&self) -> bool {
        self.ndim() == 2
    }

    /// Shape as `[len]` or `[rows, cols]` (columns of the first row).
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Vector(v) => vec![v.len()],
            Self::Grid(rows) => vec![rows.len(), rows.first().map_or(0, Vec::len)],
        }
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        match self {
            Self::Vector(v) => v.len(),
            Self::Grid(rows) => rows.iter().map(Vec::len).sum(),
        }
    }

    /// Whether the array holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the samples of a vector.
    ///
    /// # Errors
    /// Returns a shape error naming `argument` for a 2-D array.
    pub fn as_vector(&self, argument: &str) -> Result<&[Real]> {
        match self {
            Self::Vector(v) => Ok(v),
            Self::Grid(_) => Err(Error::shape(
                argument,
                format!("expected a 1-D array, got shape {:?}", self.shape()),
            )),
        }
    }

    /// Convert a grid into a [`Matrix`].
    ///
    /// # Errors
    /// Returns a shape error naming `argument` for a 1-D array or ragged
    /// rows.
    pub fn to_matrix(&self, argument: &str) -> Result<Matrix> {
        match self {
            Self::Grid(rows) => Matrix::from_rows(rows, argument),
            Self::Vector(v) => Err(Error::shape(
                argument,
                format!("expected a 2-D array, got shape [{}]", v.len()),
            )),
        }
    }
}

fn to_reals<T: ToPrimitive>(values: impl IntoIterator<Item = T>) -> Result<Vec<Real>> {
    values
        .into_iter()
        .map(|v| {
            v.to_f64()
                .ok_or_else(|| Error::Conversion("not representable as Real".into()))
        })
        .collect()
}

impl From<Vec<Real>> for Array {
    fn from(v: Vec<Real>) -> Self {
        Self::Vector(v)
    }
}

impl From<&[Real]> for Array {
    fn from(v: &[Real]) -> Self {
        Self::Vector(v.to_vec())
    }
}

impl From<&Vec<Real>> for Array {
    fn from(v: &Vec<Real>) -> Self {
        Self::Vector(v.clone())
    }
}

impl<const N: usize> From<[Real; N]> for Array {
    fn from(v: [Real; N]) -> Self {
        Self::Vector(v.to_vec())
    }
}

impl From<Vec<Vec<Real>>> for Array {
    fn from(rows: Vec<Vec<Real>>) -> Self {
        Self::Grid(rows)
    }
}

impl<const M: usize, const N: usize> From<[[Real; M]; N]> for Array {
    fn from(rows: [[Real; M]; N]) -> Self {
        Self::Grid(rows.iter().map(|r| r.to_vec()).collect())
    }
}

impl From<Matrix> for Array {
    fn from(m: Matrix) -> Self {
        Self::Grid(m.to_rows())
    }
}

impl From<&Array> for Array {
    fn from(a: &Array) -> Self {
        a.clone()
    }
}
