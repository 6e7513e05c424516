//! Error types for ceng-rs.
//!
//! Every failure in the workspace is reported through the single
//! `thiserror`-derived [`Error`] enum.  Construction-time problems with the
//! table data are [`Error::Shape`] or [`Error::KeyMismatch`]; evaluation-time
//! problems are [`Error::OutOfDomain`].  [`ensure_shape!`](crate::ensure_shape)
//! keeps shape checks to one line.

use thiserror::Error;

use crate::{Key, Real};

/// The top-level error type used throughout ceng-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Array dimensionality, lengths, or axis ordering do not admit any
    /// valid 1-D or 2-D interpretation.
    #[error("shape error in `{argument}`: {message}")]
    Shape {
        /// The offending argument (`x`, `y`, `z`, or `axis`).
        argument: String,
        /// What was wrong and what was expected.
        message: String,
    },

    /// Two or more keyed inputs disagree on their key sets.
    #[error("mappings must have the same keys (symmetric difference: [{}])", key_list(.symmetric_difference))]
    KeyMismatch {
        /// Keys present in some but not all keyed inputs, sorted.
        symmetric_difference: Vec<Key>,
    },

    /// A query coordinate fell outside the sampled domain.
    #[error("{axis} = {value} is outside the interpolation domain [{min}, {max}]")]
    OutOfDomain {
        /// The independent variable the coordinate belongs to (`x` or `y`).
        axis: String,
        /// The offending coordinate.
        value: Real,
        /// Lower bound of the valid range.
        min: Real,
        /// Upper bound of the valid range.
        max: Real,
    },

    /// Building the interpolant of one key of a dictionary failed.
    #[error("failed to build interpolant for key {key}: {source}")]
    KeyBuild {
        /// The key whose data was rejected.
        key: Key,
        /// The underlying failure.
        source: Box<Error>,
    },

    /// Lookup of a key that is not part of a dictionary.
    #[error("unknown key {0}")]
    UnknownKey(Key),

    /// The same key was given in more than one group.
    #[error("duplicate key {0}")]
    DuplicateKey(Key),

    /// An interpolant was evaluated with the wrong number of coordinates.
    #[error("interpolant takes {expected} coordinate(s), got {got}")]
    Arity {
        /// Number of independent variables of the interpolant.
        expected: usize,
        /// Number of coordinates supplied.
        got: usize,
    },

    /// A table value could not be converted to `Real`.
    #[error("cannot convert table value: {0}")]
    Conversion(String),
}

impl Error {
    /// Build an [`Error::Shape`] for `argument`.
    pub fn shape(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Strip any [`Error::KeyBuild`] wrappers and return the root cause.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::KeyBuild { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// `true` if the root cause is a shape error.
    pub fn is_shape(&self) -> bool {
        matches!(self.root_cause(), Self::Shape { .. })
    }

    /// `true` if the root cause is a key-set mismatch.
    pub fn is_key_mismatch(&self) -> bool {
        matches!(self.root_cause(), Self::KeyMismatch { .. })
    }

    /// `true` if the root cause is an out-of-domain query.
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self.root_cause(), Self::OutOfDomain { .. })
    }
}

fn key_list(keys: &[Key]) -> String {
    keys.iter()
        .map(Key::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shorthand `Result` type used throughout ceng-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Shape { argument, .. })` if `$cond` is false.
///
/// # Example
/// ```
/// use ceng_core::{ensure_shape, errors::Error};
/// fn pair(x: &[f64], y: &[f64]) -> ceng_core::errors::Result<()> {
///     ensure_shape!(x.len() == y.len(), "y", "expected length {}, got {}", x.len(), y.len());
///     Ok(())
/// }
/// assert!(pair(&[1.0], &[2.0]).is_ok());
/// assert!(pair(&[1.0], &[]).unwrap_err().is_shape());
/// ```
#[macro_export]
macro_rules! ensure_shape {
    ($cond:expr, $argument:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::shape($argument, format!($($msg)*)));
        }
    };
}
