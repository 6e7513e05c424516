//! Builder options and out-of-domain policy.
//!
//! Options are plain values passed to [`build`](crate::build) and
//! [`build_dict`](crate::build_dict); there is no process-wide state.  With
//! the `serde` feature they can be stored in a consumer's own configuration.

use ceng_core::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What an interpolant does with a query outside its sampled domain.
///
/// A NaN coordinate is always an out-of-domain error, whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "policy", content = "value"))]
pub enum BoundsPolicy {
    /// Fail with an out-of-domain error.
    #[default]
    Raise,
    /// Return the given value verbatim.
    Fill(Real),
    /// Clamp the coordinate to the nearest boundary sample, then interpolate.
    Clamp,
}

impl BoundsPolicy {
    /// Map a `(bounds_error, fill_value)` pair onto a policy.
    ///
    /// `bounds_error = true` raises regardless of `fill_value`; otherwise a
    /// fill value fills and its absence clamps.
    pub fn from_flags(bounds_error: bool, fill_value: Option<Real>) -> Self {
        match (bounds_error, fill_value) {
            (true, _) => Self::Raise,
            (false, Some(v)) => Self::Fill(v),
            (false, None) => Self::Clamp,
        }
    }

    /// `true` if out-of-domain queries fail.
    pub fn bounds_error(&self) -> bool {
        matches!(self, Self::Raise)
    }

    /// The fill value, if any.
    pub fn fill_value(&self) -> Option<Real> {
        match self {
            Self::Fill(v) => Some(*v),
            _ => None,
        }
    }
}

/// Options shared by every interpolant of a build.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InterpOptions {
    /// Which dimension (0 or 1) of the 2-D argument runs along the row
    /// variable. `None` uses the convention (0). A 1-D table accepts only
    /// `None` or `Some(0)`.
    pub axis: Option<usize>,
    /// Out-of-domain policy.
    pub bounds: BoundsPolicy,
}

impl InterpOptions {
    /// Default options: conventional orientation, raise out of domain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orientation of the 2-D argument.
    pub fn with_axis(mut self, axis: usize) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the out-of-domain policy.
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the out-of-domain policy from a `(bounds_error, fill_value)`
    /// pair.
    pub fn with_bounds_flags(self, bounds_error: bool, fill_value: Option<Real>) -> Self {
        self.with_bounds(BoundsPolicy::from_flags(bounds_error, fill_value))
    }
}
