//! Validated sample axes.
//!
//! Charts are not always tabulated left to right: a curve read off a figure
//! may list its abscissae in decreasing order.  [`Axis`] accepts either
//! direction as long as it is strict, and stores the samples increasing.
//! When the input was decreasing, [`Axis::is_reversed`] is set and
//! [`Axis::reorder`] must be applied to any data aligned with the input.

use ceng_core::{
    ensure_shape,
    errors::{Error, Result},
    Real,
};

/// Strictly increasing sample points of one independent variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    values: Vec<Real>,
    reversed: bool,
}

impl Axis {
    /// Validate `values` as an axis for the argument named `argument`.
    ///
    /// # Errors
    /// Returns a shape error if there are fewer than 2 samples, a sample is
    /// not finite, or the samples are not strictly monotonic.
    pub fn new(values: &[Real], argument: &str) -> Result<Self> {
        ensure_shape!(
            values.len() >= 2,
            argument,
            "need at least 2 samples along an axis, got {}",
            values.len()
        );
        if let Some(v) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::shape(argument, format!("axis sample {v} is not finite")));
        }

        let reversed = values[1] < values[0];
        let strict = values.windows(2).all(|w| {
            if reversed {
                w[1] < w[0]
            } else {
                w[1] > w[0]
            }
        });
        ensure_shape!(
            strict,
            argument,
            "axis samples must be strictly monotonic without duplicates, got {values:?}"
        );

        let mut values = values.to_vec();
        if reversed {
            values.reverse();
        }
        Ok(Self { values, reversed })
    }

    /// The samples, increasing.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; an axis has at least two samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `true` if the samples were supplied decreasing.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Smallest sample.
    pub fn min(&self) -> Real {
        self.values[0]
    }

    /// Largest sample.
    pub fn max(&self) -> Real {
        self.values[self.values.len() - 1]
    }

    /// `true` if `v` lies in `[min, max]`.
    pub fn contains(&self, v: Real) -> bool {
        v >= self.min() && v <= self.max()
    }

    /// Clamp `v` into `[min, max]`.
    pub fn clamp(&self, v: Real) -> Real {
        v.clamp(self.min(), self.max())
    }

    /// Put data aligned with the supplied samples into increasing-axis
    /// order.
    pub fn reorder<T: Clone>(&self, data: &[T]) -> Vec<T> {
        let mut out = data.to_vec();
        if self.reversed {
            out.reverse();
        }
        out
    }

    /// Binary search: find `k` such that `values[k] <= v < values[k+1]`,
    /// clamped to the interior intervals.
    pub fn locate(&self, v: Real) -> usize {
        let vs = &self.values;
        let n = vs.len();
        if v <= vs[0] {
            return 0;
        }
        if v >= vs[n - 1] {
            return n - 2;
        }
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if vs[mid] <= v {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Fractional position of `v` within interval `k`.
    pub fn fraction(&self, k: usize, v: Real) -> Real {
        (v - self.values[k]) / (self.values[k + 1] - self.values[k])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn increasing_axis() {
        let a = Axis::new(&[1.0, 2.0, 4.0], "x").unwrap();
        assert!(!a.is_reversed());
        assert_eq!(a.min(), 1.0);
        assert_eq!(a.max(), 4.0);
        assert_eq!(a.locate(0.0), 0);
        assert_eq!(a.locate(1.0), 0);
        assert_eq!(a.locate(2.0), 1);
        assert_eq!(a.locate(3.0), 1);
        assert_eq!(a.locate(4.0), 1);
        assert_eq!(a.locate(9.0), 1);
        assert_eq!(a.fraction(1, 3.0), 0.5);
    }

    #[test]
    fn decreasing_axis_is_stored_increasing() {
        let a = Axis::new(&[30.0, 20.0, 10.0], "y").unwrap();
        assert!(a.is_reversed());
        assert_eq!(a.values(), &[10.0, 20.0, 30.0]);
        assert_eq!(a.reorder(&[3.0, 2.0, 1.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = Axis::new(&[1.0, 2.0, 2.0, 3.0], "x").unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn direction_change_is_rejected() {
        assert!(Axis::new(&[1.0, 3.0, 2.0], "x").unwrap_err().is_shape());
        assert!(Axis::new(&[3.0, 1.0, 2.0], "x").unwrap_err().is_shape());
    }

    #[test]
    fn too_short_or_not_finite() {
        assert!(Axis::new(&[1.0], "x").unwrap_err().is_shape());
        assert!(Axis::new(&[1.0, f64::NAN], "x").unwrap_err().is_shape());
        assert!(Axis::new(&[1.0, f64::INFINITY], "x").unwrap_err().is_shape());
    }

    #[test]
    fn contains_and_clamp() {
        let a = Axis::new(&[1.0, 2.0], "x").unwrap();
        assert!(a.contains(1.0) && a.contains(2.0) && a.contains(1.5));
        assert!(!a.contains(2.5) && !a.contains(0.5));
        assert_eq!(a.clamp(5.0), 2.0);
        assert_eq!(a.clamp(-5.0), 1.0);
    }

    /// Strictly increasing samples built from positive steps.
    fn samples() -> impl Strategy<Value = Vec<Real>> {
        (-50.0..50.0f64, vec(0.01..5.0f64, 1..16)).prop_map(|(start, steps)| {
            let mut out = vec![start];
            for s in steps {
                let last = out[out.len() - 1];
                out.push(last + s);
            }
            out
        })
    }

    proptest! {
        #[test]
        fn locate_brackets_in_range_values(values in samples(), u in 0.0..=1.0f64) {
            let a = Axis::new(&values, "x").unwrap();
            let v = a.clamp(a.min() + u * (a.max() - a.min()));
            let k = a.locate(v);
            prop_assert!(k + 1 < a.len());
            prop_assert!(a.values()[k] <= v && v <= a.values()[k + 1]);
            let t = a.fraction(k, v);
            prop_assert!((0.0..=1.0).contains(&t));
        }

        #[test]
        fn reversed_input_gives_the_same_axis(values in samples()) {
            let forward = Axis::new(&values, "x").unwrap();
            let rev: Vec<Real> = values.iter().rev().copied().collect();
            let backward = Axis::new(&rev, "x").unwrap();
            prop_assert_eq!(forward.values(), backward.values());
            prop_assert!(backward.is_reversed());
        }
    }
}
