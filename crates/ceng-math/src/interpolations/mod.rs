//! Linear interpolation schemes on validated axes.
//!
//! The primitives here always blend inside the bracketing interval; a point
//! outside the axis is blended on the nearest edge interval, which is linear
//! extrapolation.  Out-of-domain policy is the caller's job.

/// Bilinear interpolation on a rectangular grid.
pub mod bilinear;

use ceng_core::{ensure_shape, errors::Result, Real};

use crate::axis::Axis;

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    fn operator(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

/// Blend `y0` and `y1` at fraction `t`.
///
/// Written as a weighted mean so `t = 0` and `t = 1` return the endpoints
/// exactly.
#[inline]
pub fn lerp(y0: Real, y1: Real, t: Real) -> Real {
    (1.0 - t) * y0 + t * y1
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolation {
    xs: Axis,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct from a validated axis and values in increasing-axis order.
    ///
    /// # Errors
    /// Returns a shape error naming `argument` if `ys` does not have one
    /// value per axis sample.
    pub fn new(xs: Axis, ys: Vec<Real>, argument: &str) -> Result<Self> {
        ensure_shape!(
            xs.len() == ys.len(),
            argument,
            "expected {} values to match the axis, got {}",
            xs.len(),
            ys.len()
        );
        Ok(Self { xs, ys })
    }

    /// Construct from raw samples as tabulated, in either axis direction.
    ///
    /// # Errors
    /// Returns a shape error if `xs` is not a valid axis or the lengths
    /// differ.
    pub fn from_samples(xs: &[Real], ys: &[Real], x_arg: &str, y_arg: &str) -> Result<Self> {
        let axis = Axis::new(xs, x_arg)?;
        ensure_shape!(
            xs.len() == ys.len(),
            y_arg,
            "expected {} values to pair with `{x_arg}`, got {}",
            xs.len(),
            ys.len()
        );
        let ys = axis.reorder(ys);
        Self::new(axis, ys, y_arg)
    }

    /// The independent axis.
    pub fn axis(&self) -> &Axis {
        &self.xs
    }

    /// The dependent values, in increasing-axis order.
    pub fn values(&self) -> &[Real] {
        &self.ys
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs.min()
    }

    fn x_max(&self) -> Real {
        self.xs.max()
    }

    fn operator(&self, x: Real) -> Real {
        let i = self.xs.locate(x);
        lerp(self.ys[i], self.ys[i + 1], self.xs.fraction(i, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_interpolation() {
        let interp = LinearInterpolation::from_samples(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], "x", "y")
            .unwrap();
        assert_abs_diff_eq!(interp.operator(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.operator(1.5), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn exact_at_knots() {
        let ys = [0.1, 0.7, 0.3, 1.0 / 3.0];
        let interp =
            LinearInterpolation::from_samples(&[0.0, 0.3, 0.9, 1.7], &ys, "x", "y").unwrap();
        assert_eq!(interp.operator(0.0), ys[0]);
        assert_eq!(interp.operator(0.3), ys[1]);
        assert_eq!(interp.operator(0.9), ys[2]);
        assert_eq!(interp.operator(1.7), ys[3]);
    }

    #[test]
    fn decreasing_samples() {
        let interp =
            LinearInterpolation::from_samples(&[3.0, 2.0, 1.0], &[30.0, 20.0, 10.0], "x", "y")
                .unwrap();
        assert_eq!(interp.values(), &[10.0, 20.0, 30.0]);
        assert_abs_diff_eq!(interp.operator(1.5), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn extrapolates_on_edge_interval() {
        let interp =
            LinearInterpolation::from_samples(&[1.0, 2.0], &[10.0, 20.0], "x", "y").unwrap();
        assert!(!interp.is_in_range(3.0));
        assert_abs_diff_eq!(interp.operator(3.0), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn length_mismatch() {
        let err = LinearInterpolation::from_samples(&[1.0, 2.0, 3.0], &[1.0, 2.0], "x", "y")
            .unwrap_err();
        assert!(err.is_shape());
        assert!(err.to_string().contains("`y`"));
    }
}
