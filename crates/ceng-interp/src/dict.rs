//! Keyed interpolant dictionaries.
//!
//! A standard usually publishes one chart per class (material, soil class,
//! exposure category).  [`build_dict`] turns the whole family into an
//! [`InterpolantDict`] in one call: keyed inputs supply per-class data and
//! shared inputs supply the axes every class has in common.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

use ceng_core::{
    errors::{Error, Result},
    Key,
};
use ceng_math::Array;
use tracing::{debug, trace};

use crate::interpolant::{build, Interpolant};
use crate::options::InterpOptions;
use crate::per_key::PerKey;

/// An immutable map from [`Key`] to [`Interpolant`].
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolantDict {
    entries: BTreeMap<Key, Interpolant>,
    keyed: bool,
}

/// Build one interpolant per key.
///
/// Each of `x`, `y`, `z` may be shared or keyed; all keyed inputs must have
/// the same key set.  Without any keyed input the result is unkeyed and
/// holds a single interpolant (see [`InterpolantDict::single`]).
///
/// # Errors
/// * [`Error::KeyMismatch`] if keyed inputs disagree on their keys.
/// * [`Error::KeyBuild`] wrapping the first key whose data is rejected; no
///   partial dictionary is returned.
///
/// # Example
/// ```
/// use ceng_interp::{build_dict, InterpOptions, PerKey};
/// use ceng_math::Array;
///
/// let y: PerKey<Array> = PerKey::keyed([("A", Array::from([0.0, 1.0])), ("B", Array::from([0.0, 2.0]))]);
/// let dict = build_dict([0.0, 10.0], y, None, &InterpOptions::default()).unwrap();
/// assert_eq!(dict.interpolant(&"B".into()).unwrap().interpolate(5.0).unwrap(), 1.0);
/// ```
pub fn build_dict(
    x: impl Into<PerKey<Array>>,
    y: impl Into<PerKey<Array>>,
    z: Option<PerKey<Array>>,
    options: &InterpOptions,
) -> Result<InterpolantDict> {
    let (x, y) = (x.into(), y.into());
    let keys = common_keys(&[Some(&x), Some(&y), z.as_ref()])?;
    let keyed = keys.is_some();
    let keys = keys.unwrap_or_else(|| vec![Key::unit()]);

    debug!(
        keys = keys.len(),
        keyed,
        two_d = z.is_some(),
        "building interpolant dictionary"
    );

    // Normalise every key's triple before building anything.
    let triples = keys
        .into_iter()
        .map(|key| {
            let pick = |p: &PerKey<Array>| {
                p.get(&key)
                    .cloned()
                    .ok_or_else(|| Error::UnknownKey(key.clone()))
            };
            let (xk, yk) = (pick(&x)?, pick(&y)?);
            let zk = z.as_ref().map(pick).transpose()?;
            Ok((key, xk, yk, zk))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut entries = BTreeMap::new();
    for (key, xk, yk, zk) in triples {
        trace!(%key, "building interpolant");
        let interpolant = build(xk, yk, zk, options).map_err(|source| Error::KeyBuild {
            key: key.clone(),
            source: Box::new(source),
        })?;
        entries.insert(key, interpolant);
    }
    Ok(InterpolantDict { entries, keyed })
}

/// The key set shared by every keyed input, sorted, or `None` if no input
/// is keyed.
fn common_keys(inputs: &[Option<&PerKey<Array>>]) -> Result<Option<Vec<Key>>> {
    let sets: Vec<BTreeSet<&Key>> = inputs.iter().flatten().filter_map(|p| p.key_set()).collect();
    let Some(first) = sets.first() else {
        return Ok(None);
    };
    if sets.iter().all(|s| s == first) {
        return Ok(Some(first.iter().map(|&k| k.clone()).collect()));
    }

    let union: BTreeSet<&Key> = sets.iter().flatten().copied().collect();
    let symmetric_difference = union
        .into_iter()
        .filter(|k| !sets.iter().all(|s| s.contains(k)))
        .cloned()
        .collect();
    Err(Error::KeyMismatch {
        symmetric_difference,
    })
}

impl InterpolantDict {
    /// Interpolant for `key`, if present.
    pub fn get(&self, key: &Key) -> Option<&Interpolant> {
        self.entries.get(key)
    }

    /// Interpolant for `key`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownKey`] if `key` is not present.
    pub fn interpolant(&self, key: &Key) -> Result<&Interpolant> {
        self.get(key).ok_or_else(|| Error::UnknownKey(key.clone()))
    }

    /// The only interpolant of an unkeyed dictionary.
    pub fn single(&self) -> Option<&Interpolant> {
        if self.keyed {
            None
        } else {
            self.entries.get(&Key::unit())
        }
    }

    /// `true` if at least one input was keyed.
    pub fn is_keyed(&self) -> bool {
        self.keyed
    }

    /// `true` if `key` is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// `(key, interpolant)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Interpolant)> {
        self.entries.iter()
    }

    /// Number of interpolants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&Key> for InterpolantDict {
    type Output = Interpolant;

    /// # Panics
    /// Panics if `key` is not present; use [`InterpolantDict::get`] to
    /// handle absence.
    fn index(&self, key: &Key) -> &Interpolant {
        &self.entries[key]
    }
}

impl<'a> IntoIterator for &'a InterpolantDict {
    type Item = (&'a Key, &'a Interpolant);
    type IntoIter = std::collections::btree_map::Iter<'a, Key, Interpolant>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
