//! Mode detection and shape validation.
//!
//! [`resolve`] inspects the rank of each argument exactly once and returns a
//! [`Resolution`]; nothing downstream looks at array shapes again.
//!
//! Without `z` the table is a single curve `y = f(x)`.  With `z` exactly one
//! argument is 2-D and its role decides the layout:
//!
//! | 2-D argument | rows follow | layout                                      |
//! |--------------|-------------|---------------------------------------------|
//! | `z`          | `x`         | value grid over `x × y`                     |
//! | `y`          | `x`         | one curve `y → z` per `x` sample            |
//! | `x`          | `y`         | one curve `x → z` per `y` sample            |
//!
//! `axis = 1` means the 2-D argument was tabulated the other way round and
//! is transposed before validation.

use std::fmt;

use ceng_core::{
    ensure_shape,
    errors::{Error, Result},
    Real,
};
use ceng_math::{Array, Axis, BilinearInterpolation, LinearInterpolation, Matrix};

/// One of the three builder arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// First independent variable.
    X,
    /// Second independent variable (or the values, in 1-D mode).
    Y,
    /// Dependent variable in 2-D mode.
    Z,
}

impl Argument {
    /// Lower-case name as used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The validated form of one table.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A single curve over one independent variable.
    Linear1D(LinearInterpolation),
    /// A chart over two independent variables.
    Bilinear2D(Surface),
}

/// A validated 2-D table together with how it was oriented.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    layout: Layout,
    grid_argument: Argument,
    axis: usize,
}

impl Surface {
    /// How the samples are organised.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Which argument was supplied 2-D.
    pub fn grid_argument(&self) -> Argument {
        self.grid_argument
    }

    /// The orientation the 2-D argument was read with.
    pub fn axis(&self) -> usize {
        self.axis
    }
}

/// Sample organisation of a 2-D table.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// Values on the rectangular grid `x × y`.
    Grid(BilinearInterpolation),
    /// A family of curves, one per sample of `outer_variable`, each mapping
    /// the other independent variable to the shared dependent values.
    CurveFamily {
        /// Samples of the variable that selects a curve.
        outer: Axis,
        /// `X` or `Y`.
        outer_variable: Argument,
        /// One curve per `outer` sample, in increasing `outer` order.
        curves: Vec<LinearInterpolation>,
    },
}

/// Decide between 1-D and 2-D mode and validate every shape.
///
/// # Errors
/// Returns [`Error::Shape`] naming the offending argument when the ranks or
/// lengths admit no valid interpretation, when an axis is not strictly
/// monotonic, or when `axis` is invalid for the mode.
pub fn resolve(x: &Array, y: &Array, z: Option<&Array>, axis: Option<usize>) -> Result<Resolution> {
    match z {
        None => resolve_1d(x, y, axis).map(Resolution::Linear1D),
        Some(z) => resolve_2d(x, y, z, axis).map(Resolution::Bilinear2D),
    }
}

fn resolve_1d(x: &Array, y: &Array, axis: Option<usize>) -> Result<LinearInterpolation> {
    if let Some(axis) = axis {
        ensure_shape!(
            axis == 0,
            "axis",
            "axis {axis} does not exist for 1-D interpolation (only 0 is accepted)"
        );
    }
    for (arg, a) in [(Argument::X, x), (Argument::Y, y)] {
        ensure_shape!(
            !a.is_2d(),
            arg.name(),
            "1-D interpolation (no `z`) takes 1-D `x` and `y`, got shape {:?}",
            a.shape()
        );
    }
    LinearInterpolation::from_samples(x.as_vector("x")?, y.as_vector("y")?, "x", "y")
}

fn resolve_2d(x: &Array, y: &Array, z: &Array, axis: Option<usize>) -> Result<Surface> {
    let args = [(Argument::X, x), (Argument::Y, y), (Argument::Z, z)];
    let two_d: Vec<Argument> = args
        .iter()
        .filter(|(_, a)| a.is_2d())
        .map(|(arg, _)| *arg)
        .collect();

    let grid_argument = match two_d.as_slice() {
        [single] => *single,
        [] => {
            return Err(Error::shape(
                "z",
                "a 2-D argument is required: with `z` given, exactly one of x, y, z must be 2-D",
            ))
        }
        [.., last] => {
            let names: Vec<&str> = two_d.iter().map(|a| a.name()).collect();
            return Err(Error::shape(
                last.name(),
                format!(
                    "exactly one of x, y, z may be 2-D, got {}",
                    names.join(", ")
                ),
            ));
        }
    };

    let axis = axis.unwrap_or(0);
    ensure_shape!(
        axis <= 1,
        "axis",
        "axis {axis} does not exist for a 2-D `{grid_argument}` (expected 0 or 1)"
    );

    let raw = match grid_argument {
        Argument::X => x,
        Argument::Y => y,
        Argument::Z => z,
    }
    .to_matrix(grid_argument.name())?;
    let grid = if axis == 1 { raw.transpose() } else { raw.clone() };

    let layout = match grid_argument {
        Argument::Z => {
            let xs = Axis::new(x.as_vector("x")?, "x")?;
            let ys = Axis::new(y.as_vector("y")?, "y")?;
            check_grid_shape(&raw, &grid, (xs.len(), ys.len()), "x", "y", grid_argument, axis)?;
            let mut grid = grid;
            if xs.is_reversed() {
                grid = grid.reverse_rows();
            }
            if ys.is_reversed() {
                grid = grid.reverse_columns();
            }
            Layout::Grid(BilinearInterpolation::new(xs, ys, grid, "z")?)
        }
        Argument::Y => curve_family(x.as_vector("x")?, Argument::X, &raw, &grid, z, Argument::Y, axis)?,
        Argument::X => curve_family(y.as_vector("y")?, Argument::Y, &raw, &grid, z, Argument::X, axis)?,
    };

    Ok(Surface {
        layout,
        grid_argument,
        axis,
    })
}

fn curve_family(
    outer_values: &[Real],
    outer_variable: Argument,
    raw: &Matrix,
    grid: &Matrix,
    z: &Array,
    inner: Argument,
    axis: usize,
) -> Result<Layout> {
    let outer = Axis::new(outer_values, outer_variable.name())?;
    let values = z.as_vector("z")?;
    check_grid_shape(
        raw,
        grid,
        (outer.len(), values.len()),
        outer_variable.name(),
        "z",
        inner,
        axis,
    )?;

    let curves = (0..grid.rows())
        .map(|i| {
            LinearInterpolation::from_samples(&grid.row(i), values, inner.name(), "z")
                .map_err(|e| in_row(e, i))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Layout::CurveFamily {
        curves: outer.reorder(&curves),
        outer,
        outer_variable,
    })
}

fn check_grid_shape(
    raw: &Matrix,
    grid: &Matrix,
    expected: (usize, usize),
    rows_name: &str,
    cols_name: &str,
    argument: Argument,
    axis: usize,
) -> Result<()> {
    if grid.shape() == expected {
        return Ok(());
    }
    let (r, c) = expected;
    let expected_raw = if axis == 1 { (c, r) } else { (r, c) };
    Err(Error::shape(
        argument.name(),
        format!(
            "shape {:?} does not match `{rows_name}` ({r}) × `{cols_name}` ({c}) \
             with axis {axis}; expected {:?}",
            raw.shape(),
            expected_raw
        ),
    ))
}

fn in_row(err: Error, row: usize) -> Error {
    match err {
        Error::Shape { argument, message } => Error::Shape {
            argument,
            message: format!("row {row}: {message}"),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(values: &[Real]) -> Array {
        Array::from(values)
    }

    fn g(rows: &[&[Real]]) -> Array {
        Array::from(rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>())
    }

    fn shape_argument(err: Error) -> String {
        match err {
            Error::Shape { argument, .. } => argument,
            other => panic!("expected a shape error, got {other:?}"),
        }
    }

    #[test]
    fn one_dimensional_without_z() {
        let r = resolve(&v(&[1.0, 2.0, 3.0]), &v(&[10.0, 20.0, 30.0]), None, None).unwrap();
        assert!(matches!(r, Resolution::Linear1D(_)));
    }

    #[test]
    fn axis_in_1d() {
        let r = resolve(&v(&[1.0, 2.0]), &v(&[1.0, 2.0]), None, Some(0)).unwrap();
        assert!(matches!(r, Resolution::Linear1D(_)));
        let err = resolve(&v(&[1.0, 2.0]), &v(&[1.0, 2.0]), None, Some(1)).unwrap_err();
        assert_eq!(shape_argument(err), "axis");
    }

    #[test]
    fn two_d_y_without_z_is_rejected() {
        let err = resolve(&v(&[1.0, 2.0]), &g(&[&[1.0, 2.0], &[3.0, 4.0]]), None, None).unwrap_err();
        assert_eq!(shape_argument(err), "y");
    }

    #[test]
    fn z_grid() {
        let r = resolve(
            &v(&[1.0, 2.0]),
            &v(&[10.0, 20.0, 30.0]),
            Some(&g(&[&[3.0, 6.0, 9.0], &[12.0, 15.0, 18.0]])),
            None,
        )
        .unwrap();
        let Resolution::Bilinear2D(surface) = r else {
            panic!("expected 2-D")
        };
        assert_eq!(surface.grid_argument(), Argument::Z);
        assert_eq!(surface.axis(), 0);
        assert!(matches!(surface.layout(), Layout::Grid(_)));
    }

    #[test]
    fn z_grid_transposed_with_axis_1() {
        let z = g(&[&[3.0, 12.0], &[6.0, 15.0], &[9.0, 18.0]]);
        let r = resolve(&v(&[1.0, 2.0]), &v(&[10.0, 20.0, 30.0]), Some(&z), Some(1)).unwrap();
        let Resolution::Bilinear2D(surface) = r else {
            panic!("expected 2-D")
        };
        let Layout::Grid(grid) = surface.layout() else {
            panic!("expected a grid")
        };
        assert_eq!(grid.grid().row(0), vec![3.0, 6.0, 9.0]);
    }

    #[test]
    fn z_grid_shape_mismatch_names_z() {
        // Tabulated the other way round but read with the default axis.
        let z = g(&[&[3.0, 12.0], &[6.0, 15.0], &[9.0, 18.0]]);
        let err = resolve(&v(&[1.0, 2.0]), &v(&[10.0, 20.0, 30.0]), Some(&z), None).unwrap_err();
        assert!(err.to_string().contains("expected (2, 3)"));
        assert_eq!(shape_argument(err), "z");
    }

    #[test]
    fn no_2d_argument_in_2d_mode() {
        let err = resolve(&v(&[1.0, 2.0]), &v(&[1.0, 2.0]), Some(&v(&[1.0, 2.0])), None)
            .unwrap_err();
        assert!(err.to_string().contains("2-D argument is required"));
    }

    #[test]
    fn two_2d_arguments() {
        let sq = g(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let err = resolve(&v(&[1.0, 2.0]), &sq, Some(&sq), None).unwrap_err();
        assert!(err.to_string().contains("got y, z"));
        assert_eq!(shape_argument(err), "z");
    }

    #[test]
    fn invalid_axis() {
        let z = g(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let err = resolve(&v(&[1.0, 2.0]), &v(&[1.0, 2.0]), Some(&z), Some(2)).unwrap_err();
        assert_eq!(shape_argument(err), "axis");
    }

    #[test]
    fn curve_family_from_2d_y() {
        let y = g(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]]);
        let r = resolve(&v(&[0.0, 1.0]), &y, Some(&v(&[10.0, 20.0, 30.0])), None).unwrap();
        let Resolution::Bilinear2D(surface) = r else {
            panic!("expected 2-D")
        };
        match surface.layout() {
            Layout::CurveFamily {
                outer,
                outer_variable,
                curves,
            } => {
                assert_eq!(outer.values(), &[0.0, 1.0]);
                assert_eq!(*outer_variable, Argument::X);
                assert_eq!(curves.len(), 2);
            }
            other => panic!("expected a curve family, got {other:?}"),
        }
    }

    #[test]
    fn curve_family_rows_must_be_monotonic() {
        let x = g(&[&[1.0, 2.0], &[3.0, 3.0]]);
        let err = resolve(&x, &v(&[1.0, 2.0]), Some(&v(&[0.0, 1.0])), None).unwrap_err();
        assert!(err.to_string().contains("row 1"));
        assert_eq!(shape_argument(err), "x");
    }

    #[test]
    fn non_monotonic_axis() {
        let z = g(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let err = resolve(&v(&[1.0, 3.0, 2.0]), &v(&[1.0, 2.0]), Some(&z), None).unwrap_err();
        assert_eq!(shape_argument(err), "x");
    }

    #[test]
    fn ragged_grid() {
        let z = g(&[&[1.0, 2.0], &[3.0]]);
        let err = resolve(&v(&[1.0, 2.0]), &v(&[1.0, 2.0]), Some(&z), None).unwrap_err();
        assert_eq!(shape_argument(err), "z");
    }
}
