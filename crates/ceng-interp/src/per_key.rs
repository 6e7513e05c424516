//! Shared-or-keyed inputs.
//!
//! Each of `x`, `y`, `z` given to [`build_dict`](crate::build_dict) is either
//! one array used for every key or a map with one array per key.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use ceng_core::{IterableDict, Key};
use ceng_math::Array;

/// A value shared by all keys, or one value per key.
#[derive(Debug, Clone, PartialEq)]
pub enum PerKey<T> {
    /// Used for every key.
    Shared(T),
    /// One value per key.
    Keyed(BTreeMap<Key, T>),
}

impl<T> PerKey<T> {
    /// Build a keyed input from `(key, value)` pairs.
    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<T>,
    {
        Self::Keyed(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// `true` for a keyed input.
    pub fn is_keyed(&self) -> bool {
        matches!(self, Self::Keyed(_))
    }

    /// The key set of a keyed input.
    pub fn key_set(&self) -> Option<BTreeSet<&Key>> {
        match self {
            Self::Shared(_) => None,
            Self::Keyed(map) => Some(map.keys().collect()),
        }
    }

    /// The value for `key`: the shared value, or the keyed entry.
    pub fn get(&self, key: &Key) -> Option<&T> {
        match self {
            Self::Shared(v) => Some(v),
            Self::Keyed(map) => map.get(key),
        }
    }
}

impl PerKey<Array> {
    /// A shared array.
    pub fn shared(array: impl Into<Array>) -> Self {
        Self::Shared(array.into())
    }
}

impl From<Array> for PerKey<Array> {
    fn from(a: Array) -> Self {
        Self::Shared(a)
    }
}

impl From<Vec<f64>> for PerKey<Array> {
    fn from(v: Vec<f64>) -> Self {
        Self::Shared(v.into())
    }
}

impl From<&[f64]> for PerKey<Array> {
    fn from(v: &[f64]) -> Self {
        Self::Shared(v.into())
    }
}

impl<const N: usize> From<[f64; N]> for PerKey<Array> {
    fn from(v: [f64; N]) -> Self {
        Self::Shared(v.into())
    }
}

impl From<Vec<Vec<f64>>> for PerKey<Array> {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::Shared(rows.into())
    }
}

impl<const M: usize, const N: usize> From<[[f64; M]; N]> for PerKey<Array> {
    fn from(rows: [[f64; M]; N]) -> Self {
        Self::Shared(rows.into())
    }
}

impl<K: Into<Key>, A: Into<Array>> From<BTreeMap<K, A>> for PerKey<Array> {
    fn from(map: BTreeMap<K, A>) -> Self {
        Self::keyed(map)
    }
}

impl<K: Into<Key>, A: Into<Array>> From<HashMap<K, A>> for PerKey<Array> {
    fn from(map: HashMap<K, A>) -> Self {
        Self::keyed(map)
    }
}

impl<A: Into<Array>> From<IterableDict<A>> for PerKey<Array> {
    fn from(dict: IterableDict<A>) -> Self {
        Self::keyed(dict.into_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_applies_to_every_key() {
        let p: PerKey<Array> = PerKey::from([1.0, 2.0]);
        assert!(!p.is_keyed());
        assert_eq!(p.key_set(), None);
        assert_eq!(p.get(&Key::from("anything")), Some(&Array::from([1.0, 2.0])));
    }

    #[test]
    fn keyed_lookup() {
        let p: PerKey<Array> = PerKey::keyed([("A", [1.0, 2.0]), ("B", [3.0, 4.0])]);
        assert!(p.is_keyed());
        let keys = p.key_set().unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&Key::from("B")));
        assert_eq!(p.get(&Key::from("C")), None);
    }

    #[test]
    fn from_maps() {
        let mut hm = HashMap::new();
        hm.insert("A", vec![1.0, 2.0]);
        let p: PerKey<Array> = PerKey::from(hm);
        assert_eq!(p.get(&Key::from("A")), Some(&Array::from(vec![1.0, 2.0])));

        let grouped = IterableDict::new([(vec!["S1", "S2"], vec![0.5, 0.7])]).unwrap();
        let p: PerKey<Array> = PerKey::from(grouped);
        assert_eq!(p.key_set().unwrap().len(), 2);
    }
}
