//! # ceng
//!
//! Lookup-table interpolation for civil-engineering design values.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ceng-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ceng = "0.1"
//! ```
//!
//! ```rust
//! use ceng::prelude::*;
//!
//! let f = build_1d([1.0, 2.0, 3.0], [10.0, 20.0, 30.0], &InterpOptions::default())?;
//! assert_eq!(f.interpolate(1.5)?, 15.0);
//! # Ok::<(), ceng::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, keys, and error definitions.
pub use ceng_core as core;

/// Table arrays, axes, and interpolation primitives.
pub use ceng_math as math;

/// Interpolant builders and keyed dictionaries.
pub use ceng_interp as interp;

/// The items most callers need.
pub mod prelude {
    pub use ceng_core::{Error, IterableDict, Key, Real, Result};
    pub use ceng_interp::{
        build, build_1d, build_2d, build_dict, BoundsPolicy, InterpOptions, Interpolant,
        InterpolantDict, PerKey,
    };
    pub use ceng_math::Array;
}
