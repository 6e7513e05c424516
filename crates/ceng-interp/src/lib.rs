//! # ceng-interp
//!
//! Lookup-table interpolation for design values published as curves and
//! charts.  Raw table data, shared or keyed by class labels, is validated
//! once into immutable [`Interpolant`]s that are then evaluated at one or
//! two coordinates.
//!
//! ```rust
//! use ceng_interp::{build_dict, InterpOptions, PerKey};
//! use ceng_math::Array;
//!
//! let z = PerKey::keyed([(("B", "1"), Array::from([[3.0, 6.0, 9.0], [12.0, 15.0, 18.0]]))]);
//! let dict = build_dict([1.0, 2.0], [10.0, 20.0, 30.0], Some(z), &InterpOptions::default()).unwrap();
//! let v = dict.interpolant(&("B", "1").into()).unwrap().interpolate2(1.5, 25.0).unwrap();
//! assert_eq!(v, 12.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Keyed interpolant dictionaries.
pub mod dict;

/// The interpolant builder and evaluation.
pub mod interpolant;

/// Builder options and out-of-domain policy.
pub mod options;

/// Shared-or-keyed inputs.
pub mod per_key;

/// Mode detection and shape validation.
pub mod shape;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use dict::{build_dict, InterpolantDict};
pub use interpolant::{build, build_1d, build_2d, Interpolant};
pub use options::{BoundsPolicy, InterpOptions};
pub use per_key::PerKey;
pub use shape::{resolve, Argument, Layout, Resolution, Surface};
