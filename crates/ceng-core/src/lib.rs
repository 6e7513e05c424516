//! # ceng-core
//!
//! Core types shared across the ceng-rs workspace: the `Real` alias, the
//! error hierarchy with its `ensure_shape!` macro, the composite table
//! [`Key`], and [`IterableDict`] for tables where many keys share one curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_shape!` macro.
pub mod errors;

/// Composite table keys.
pub mod key;

/// Immutable mapping built from groups of keys.
pub mod lookup;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use key::Key;
pub use lookup::IterableDict;
