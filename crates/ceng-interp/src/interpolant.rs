//! The interpolant builder and evaluation.
//!
//! [`build`] validates one table into an [`Interpolant`], which owns a copy
//! of its samples and never changes afterwards.  The out-of-domain policy is
//! applied on every evaluation, not at construction.

use ceng_core::{
    errors::{Error, Result},
    Real,
};
use ceng_math::{
    interpolations::lerp, Array, Axis, Interpolation1D, Interpolation2D, LinearInterpolation,
};
use tracing::debug;

use crate::options::{BoundsPolicy, InterpOptions};
use crate::shape::{resolve, Argument, Layout, Resolution, Surface};

/// A callable estimate of a tabulated value at one or two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolant {
    resolution: Resolution,
    bounds: BoundsPolicy,
}

/// Build an interpolant from `x`, `y` and optionally `z`.
///
/// Without `z`, `y` holds the values of the curve `y = f(x)`.  With `z`,
/// exactly one of the three must be 2-D (see [`crate::shape`]).
///
/// # Errors
/// Returns [`Error::Shape`] if the arrays admit no valid interpretation.
///
/// # Example
/// ```
/// use ceng_interp::{build_1d, InterpOptions};
///
/// let f = build_1d([1.0, 2.0, 3.0], [10.0, 20.0, 30.0], &InterpOptions::default()).unwrap();
/// assert_eq!(f.interpolate(1.5).unwrap(), 15.0);
/// ```
pub fn build(
    x: impl Into<Array>,
    y: impl Into<Array>,
    z: Option<Array>,
    options: &InterpOptions,
) -> Result<Interpolant> {
    let (x, y) = (x.into(), y.into());
    let resolution = resolve(&x, &y, z.as_ref(), options.axis)?;
    match &resolution {
        Resolution::Linear1D(curve) => {
            debug!(samples = curve.axis().len(), "built 1-D interpolant");
        }
        Resolution::Bilinear2D(surface) => {
            debug!(
                grid = %surface.grid_argument(),
                axis = surface.axis(),
                "built 2-D interpolant"
            );
        }
    }
    Ok(Interpolant::new(resolution, options.bounds))
}

/// Build a curve `y = f(x)`.
///
/// # Errors
/// See [`build`].
pub fn build_1d(
    x: impl Into<Array>,
    y: impl Into<Array>,
    options: &InterpOptions,
) -> Result<Interpolant> {
    build(x, y, None, options)
}

/// Build a chart `z = f(x, y)`.
///
/// # Errors
/// See [`build`].
pub fn build_2d(
    x: impl Into<Array>,
    y: impl Into<Array>,
    z: impl Into<Array>,
    options: &InterpOptions,
) -> Result<Interpolant> {
    build(x, y, Some(z.into()), options)
}

impl Interpolant {
    /// Wrap an already validated table.
    pub fn new(resolution: Resolution, bounds: BoundsPolicy) -> Self {
        Self { resolution, bounds }
    }

    /// The validated table.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// The out-of-domain policy.
    pub fn bounds(&self) -> BoundsPolicy {
        self.bounds
    }

    /// Number of independent variables (1 or 2).
    pub fn ndim(&self) -> usize {
        match self.resolution {
            Resolution::Linear1D(_) => 1,
            Resolution::Bilinear2D(_) => 2,
        }
    }

    /// `[min, max]` of each independent variable, `x` first.
    ///
    /// For a curve family the inner range is the envelope of all curves;
    /// individual curves may cover less.
    pub fn domain(&self) -> Vec<(Real, Real)> {
        match &self.resolution {
            Resolution::Linear1D(curve) => vec![(curve.x_min(), curve.x_max())],
            Resolution::Bilinear2D(surface) => match surface.layout() {
                Layout::Grid(grid) => vec![
                    (grid.x_min(), grid.x_max()),
                    (grid.y_min(), grid.y_max()),
                ],
                Layout::CurveFamily {
                    outer,
                    outer_variable,
                    curves,
                } => {
                    let inner = curves.iter().fold((Real::INFINITY, Real::NEG_INFINITY), |acc, c| {
                        (acc.0.min(c.x_min()), acc.1.max(c.x_max()))
                    });
                    let outer = (outer.min(), outer.max());
                    match outer_variable {
                        Argument::X => vec![outer, inner],
                        _ => vec![inner, outer],
                    }
                }
            },
        }
    }

    /// Evaluate a 1-D interpolant at `x`.
    ///
    /// # Errors
    /// [`Error::Arity`] on a 2-D interpolant; [`Error::OutOfDomain`] under
    /// [`BoundsPolicy::Raise`].
    pub fn interpolate(&self, x: Real) -> Result<Real> {
        let Resolution::Linear1D(curve) = &self.resolution else {
            return Err(Error::Arity {
                expected: 2,
                got: 1,
            });
        };
        Ok(match self.admit("x", x, curve.x_min(), curve.x_max())? {
            Some(x) => curve.operator(x),
            None => self.fill(),
        })
    }

    /// Evaluate a 2-D interpolant at `(x, y)`.
    ///
    /// # Errors
    /// [`Error::Arity`] on a 1-D interpolant; [`Error::OutOfDomain`] under
    /// [`BoundsPolicy::Raise`].
    pub fn interpolate2(&self, x: Real, y: Real) -> Result<Real> {
        let Resolution::Bilinear2D(surface) = &self.resolution else {
            return Err(Error::Arity {
                expected: 1,
                got: 2,
            });
        };
        self.surface_value(surface, x, y)
    }

    /// Evaluate at a point given as a slice of coordinates.
    ///
    /// # Errors
    /// [`Error::Arity`] if `point.len()` differs from [`Self::ndim`].
    pub fn call(&self, point: &[Real]) -> Result<Real> {
        match (point, self.ndim()) {
            (&[x], 1) => self.interpolate(x),
            (&[x, y], 2) => self.interpolate2(x, y),
            (_, expected) => Err(Error::Arity {
                expected,
                got: point.len(),
            }),
        }
    }

    fn surface_value(&self, surface: &Surface, x: Real, y: Real) -> Result<Real> {
        match surface.layout() {
            Layout::Grid(grid) => {
                let x = self.admit("x", x, grid.x_min(), grid.x_max())?;
                let y = self.admit("y", y, grid.y_min(), grid.y_max())?;
                Ok(match (x, y) {
                    (Some(x), Some(y)) => grid.operator(x, y),
                    _ => self.fill(),
                })
            }
            Layout::CurveFamily {
                outer,
                outer_variable,
                curves,
            } => {
                let (o, inner, inner_name) = match outer_variable {
                    Argument::X => (x, y, "y"),
                    _ => (y, x, "x"),
                };
                self.family_value(outer, outer_variable.name(), curves, o, inner, inner_name)
            }
        }
    }

    /// Interpolate along the curves bracketing `o`, then across them.
    ///
    /// A curve with zero weight is neither evaluated nor bounds-checked, so
    /// a query exactly on one curve only needs to lie within that curve.
    fn family_value(
        &self,
        outer: &Axis,
        outer_name: &str,
        curves: &[LinearInterpolation],
        o: Real,
        inner: Real,
        inner_name: &str,
    ) -> Result<Real> {
        let Some(o) = self.admit(outer_name, o, outer.min(), outer.max())? else {
            return Ok(self.fill());
        };
        let k = outer.locate(o);
        let t = outer.fraction(k, o);
        let weighted = [t < 1.0, t > 0.0];

        let mut ends = [0.0; 2];
        for ((end, curve), used) in ends.iter_mut().zip(&curves[k..k + 2]).zip(weighted) {
            if !used {
                continue;
            }
            match self.admit(inner_name, inner, curve.x_min(), curve.x_max())? {
                Some(v) => *end = curve.operator(v),
                None => return Ok(self.fill()),
            }
        }
        Ok(lerp(ends[0], ends[1], t))
    }

    /// Apply the bounds policy to one coordinate: `Some(v)` to interpolate
    /// at, `None` to fill.
    ///
    /// A NaN coordinate has no nearest boundary and is out of domain under
    /// every policy.
    fn admit(&self, axis: &str, v: Real, min: Real, max: Real) -> Result<Option<Real>> {
        if v >= min && v <= max {
            return Ok(Some(v));
        }
        let out_of_domain = || Error::OutOfDomain {
            axis: axis.to_owned(),
            value: v,
            min,
            max,
        };
        if v.is_nan() {
            return Err(out_of_domain());
        }
        match self.bounds {
            BoundsPolicy::Raise => Err(out_of_domain()),
            BoundsPolicy::Fill(_) => Ok(None),
            BoundsPolicy::Clamp => Ok(Some(v.clamp(min, max))),
        }
    }

    fn fill(&self) -> Real {
        self.bounds.fill_value().unwrap_or(Real::NAN)
    }
}
