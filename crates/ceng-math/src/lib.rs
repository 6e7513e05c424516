//! # ceng-math
//!
//! Numeric building blocks for table interpolation: the array-like input
//! model ([`Array`], [`Matrix`] over nalgebra), validated monotonic
//! [`Axis`] samples, and the piecewise-linear and bilinear primitives the
//! interpolant builder orchestrates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Array-like table input (vector or matrix).
pub mod array;

/// Validated, strictly monotonic sample axes.
pub mod axis;

/// Linear and bilinear interpolation schemes.
pub mod interpolations;

/// `Matrix` newtype over `nalgebra::DMatrix`.
pub mod matrix;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use axis::Axis;
pub use interpolations::{
    bilinear::{BilinearInterpolation, Interpolation2D},
    Interpolation1D, LinearInterpolation,
};
pub use matrix::Matrix;
