//! A dictionary whose entries can also be read and written as attributes.
//!
//! [`AttrDict`] is the record type for model parameters. Entries keep
//! insertion order. The attribute API ([`getattr`](AttrDict::getattr),
//! [`setattr`](AttrDict::setattr), [`delattr`](AttrDict::delattr)) and the
//! item API ([`get_item`](AttrDict::get_item), [`insert`](AttrDict::insert),
//! [`remove`](AttrDict::remove)) operate on the same entries.
//!
//! A missing attribute is reported as [`AttrError::AttributeNotFound`], a
//! missing item as [`AttrError::KeyNotFound`].

use crate::error::{AttrError, Error};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::Index;

/// Compact one-line description of a value, used when a full listing
/// would be too long (e.g. in parameter summaries).
pub trait ShortRepr {
    /// The compact description.
    fn short_repr(&self) -> String;
}

/// Insertion-ordered `String -> V` dictionary with attribute-style access.
///
/// Serializes as a plain JSON object, so a round trip keeps every entry
/// reachable both ways.
///
/// # Examples
///
/// ```
/// use abm_tools::AttrDict;
/// use serde_json::json;
///
/// let mut ad = AttrDict::new();
/// ad.insert("a", json!(1));
/// assert_eq!(ad.getattr("a").unwrap(), &json!(1));
///
/// ad.setattr("b", json!(2));
/// assert_eq!(ad["b"], json!(2));
/// assert_eq!(ad.to_string(), r#"AttrDict {"a": 1, "b": 2}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de>"
))]
pub struct AttrDict<V = Value> {
    entries: IndexMap<String, V>,
}

impl<V> AttrDict<V> {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty dictionary with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Build from optional entries. `None` gives an empty dictionary.
    pub fn from_option<K, I>(entries: Option<I>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        entries.map_or_else(Self::new, |entries| entries.into_iter().collect())
    }

    // --- Attribute access ---

    /// Read an entry as an attribute.
    pub fn getattr(&self, name: &str) -> Result<&V, AttrError> {
        self.entries.get(name).ok_or_else(|| {
            tracing::trace!(name, "attribute not found");
            AttrError::AttributeNotFound(name.to_string())
        })
    }

    /// Mutably borrow an entry as an attribute.
    pub fn getattr_mut(&mut self, name: &str) -> Result<&mut V, AttrError> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| AttrError::AttributeNotFound(name.to_string()))
    }

    /// Write an entry as an attribute. Creates or overwrites.
    pub fn setattr(&mut self, name: impl Into<String>, value: V) {
        self.insert(name, value);
    }

    /// Delete an entry as an attribute, returning its value.
    pub fn delattr(&mut self, name: &str) -> Result<V, AttrError> {
        self.remove(name)
            .ok_or_else(|| AttrError::KeyNotFound(name.to_string()))
    }

    /// Whether an attribute of this name exists.
    pub fn hasattr(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    // --- Item access ---

    /// Read an entry by key.
    pub fn get_item(&self, key: &str) -> Result<&V, AttrError> {
        self.entries
            .get(key)
            .ok_or_else(|| AttrError::KeyNotFound(key.to_string()))
    }

    /// Read an entry by key, if present.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Mutably borrow an entry by key, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Insert an entry, returning the previous value. An existing key keeps
    /// its position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Remove an entry, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    /// Whether the key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.entries.iter()
    }

    /// Unwrap into the underlying map.
    pub fn into_inner(self) -> IndexMap<String, V> {
        self.entries
    }
}

impl AttrDict<Value> {
    /// Read a parameter and deserialize it into `T`.
    ///
    /// ```
    /// use abm_tools::AttrDict;
    /// use serde_json::json;
    ///
    /// let params: AttrDict = AttrDict::from([("steps", json!(100))]);
    /// let steps: u32 = params.get_as("steps").unwrap();
    /// assert_eq!(steps, 100);
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, Error> {
        let value = self.getattr(name)?;
        Ok(T::deserialize(value)?)
    }
}

impl<V> Default for AttrDict<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<&str> for AttrDict<V> {
    type Output = V;

    /// Panics if the key is missing, like `HashMap`.
    fn index(&self, key: &str) -> &V {
        &self.entries[key]
    }
}

impl<V: fmt::Display> fmt::Display for AttrDict<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AttrDict {")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<V> ShortRepr for AttrDict<V> {
    fn short_repr(&self) -> String {
        let n = self.len();
        let suffix = if n == 1 { "y" } else { "ies" };
        format!("AttrDict {{{n} entr{suffix}}}")
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for AttrDict<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for AttrDict<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl<V> From<IndexMap<String, V>> for AttrDict<V> {
    fn from(entries: IndexMap<String, V>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for AttrDict<V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, I> From<Option<I>> for AttrDict<V>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    fn from(entries: Option<I>) -> Self {
        Self::from_option(entries)
    }
}

impl<V> IntoIterator for AttrDict<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a AttrDict<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
