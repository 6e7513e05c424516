//! Composite table keys.
//!
//! A published chart is usually one of a family selected by a label such as a
//! material grade or a soil class, sometimes by several labels at once
//! (soil class × layer).  [`Key`] models both as an ordered tuple of labels,
//! compared element-wise and never by identity.

use std::fmt;

/// An ordered tuple of labels identifying one table or curve.
///
/// A single label displays as `A`; several display as `(B, 1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Vec<String>);

impl Key {
    /// Build a key from any sequence of labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// The empty key, used for the single entry of an unkeyed dictionary.
    pub fn unit() -> Self {
        Self(Vec::new())
    }

    /// The labels making up this key.
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Number of labels.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// `true` for the empty key.
    pub fn is_unit(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{single}"),
            labels => write!(f, "({})", labels.join(", ")),
        }
    }
}

impl From<&str> for Key {
    fn from(label: &str) -> Self {
        Self(vec![label.to_owned()])
    }
}

impl From<String> for Key {
    fn from(label: String) -> Self {
        Self(vec![label])
    }
}

impl From<&String> for Key {
    fn from(label: &String) -> Self {
        Self(vec![label.clone()])
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<(&str, &str)> for Key {
    fn from((a, b): (&str, &str)) -> Self {
        Self::new([a, b])
    }
}

impl From<(&str, &str, &str)> for Key {
    fn from((a, b, c): (&str, &str, &str)) -> Self {
        Self::new([a, b, c])
    }
}

impl<const N: usize> From<[&str; N]> for Key {
    fn from(labels: [&str; N]) -> Self {
        Self::new(labels)
    }
}

impl From<Vec<String>> for Key {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}
