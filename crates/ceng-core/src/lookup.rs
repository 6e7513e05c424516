//! Immutable mapping built from groups of keys.
//!
//! Design tables often assign one curve to several classes at once
//! ("classes A, B and C use curve 1").  [`IterableDict`] is built from
//! `(keys, value)` groups and answers lookups for every individual key.

use std::collections::BTreeMap;

use crate::errors::{Error, Result};
use crate::Key;

/// A read-only map constructed from groups of keys sharing one value.
#[derive(Debug, Clone, PartialEq)]
pub struct IterableDict<V> {
    groups: Vec<(Vec<Key>, V)>,
    root: BTreeMap<Key, V>,
}

impl<V: Clone> IterableDict<V> {
    /// Build from `(keys, value)` groups.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateKey`] if a key appears in more than one
    /// group (or twice in the same group).
    pub fn new<I, G, K>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = (G, V)>,
        G: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut root = BTreeMap::new();
        let mut kept = Vec::new();
        for (keys, value) in groups {
            let keys: Vec<Key> = keys.into_iter().map(Into::into).collect();
            for key in &keys {
                if root.insert(key.clone(), value.clone()).is_some() {
                    return Err(Error::DuplicateKey(key.clone()));
                }
            }
            kept.push((keys, value));
        }
        Ok(Self { groups: kept, root })
    }
}

impl<V> IterableDict<V> {
    /// Value for `key`, if present.
    pub fn get(&self, key: &Key) -> Option<&V> {
        self.root.get(key)
    }

    /// `true` if `key` is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.root.contains_key(key)
    }

    /// Number of individual keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the dict has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Individual keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.root.keys()
    }

    /// `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &V)> {
        self.root.iter()
    }

    /// The groups as supplied at construction.
    pub fn groups(&self) -> &[(Vec<Key>, V)] {
        &self.groups
    }

    /// The flattened key → value map.
    pub fn root(&self) -> &BTreeMap<Key, V> {
        &self.root
    }

    /// Consume and return the flattened map.
    pub fn into_root(self) -> BTreeMap<Key, V> {
        self.root
    }
}

impl<'a, V> IntoIterator for &'a IterableDict<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = std::collections::btree_map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.root.iter()
    }
}
