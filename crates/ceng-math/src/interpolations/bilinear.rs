//! Bilinear 2D interpolation between discrete grid points.
//!
//! Standard bilinear interpolation on a rectangular grid `(xs × ys → z)`
//! where row `i` of `z` holds the values at `xs[i]`.

use ceng_core::{ensure_shape, errors::Result, Real};

use super::lerp;
use crate::{axis::Axis, matrix::Matrix};

/// 2D interpolation trait.
pub trait Interpolation2D: std::fmt::Debug + Send + Sync {
    /// Evaluate the surface at `(x, y)`.
    fn operator(&self, x: Real, y: Real) -> Real;
    /// Lower bound of the x domain.
    fn x_min(&self) -> Real;
    /// Upper bound of the x domain.
    fn x_max(&self) -> Real;
    /// Lower bound of the y domain.
    fn y_min(&self) -> Real;
    /// Upper bound of the y domain.
    fn y_max(&self) -> Real;
}

/// Bilinear interpolation on a rectangular grid.
///
/// `z[(i, j)]` = f(xs\[i\], ys\[j\]).
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearInterpolation {
    xs: Axis,
    ys: Axis,
    z: Matrix,
}

impl BilinearInterpolation {
    /// Build a bilinear interpolation on the grid `(xs × ys → z)`.
    ///
    /// `z` must already be in increasing order along both axes.
    ///
    /// # Errors
    /// Returns a shape error naming `argument` if `z` is not
    /// `xs.len() × ys.len()`.
    pub fn new(xs: Axis, ys: Axis, z: Matrix, argument: &str) -> Result<Self> {
        ensure_shape!(
            z.shape() == (xs.len(), ys.len()),
            argument,
            "expected a {}×{} grid, got {}×{}",
            xs.len(),
            ys.len(),
            z.rows(),
            z.cols()
        );
        Ok(Self { xs, ys, z })
    }

    /// The row axis.
    pub fn x_axis(&self) -> &Axis {
        &self.xs
    }

    /// The column axis.
    pub fn y_axis(&self) -> &Axis {
        &self.ys
    }

    /// The value grid.
    pub fn grid(&self) -> &Matrix {
        &self.z
    }
}

impl Interpolation2D for BilinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs.min()
    }

    fn x_max(&self) -> Real {
        self.xs.max()
    }

    fn y_min(&self) -> Real {
        self.ys.min()
    }

    fn y_max(&self) -> Real {
        self.ys.max()
    }

    fn operator(&self, x: Real, y: Real) -> Real {
        let i = self.xs.locate(x);
        let j = self.ys.locate(y);
        let t = self.xs.fraction(i, x);
        let u = self.ys.fraction(j, y);

        let lower = lerp(self.z[(i, j)], self.z[(i + 1, j)], t);
        let upper = lerp(self.z[(i, j + 1)], self.z[(i + 1, j + 1)], t);
        lerp(lower, upper, u)
    }
}
