//! The insertion-ordered [`ParamMapping`].
//!
//! Re-encoding an unmodified mapping must reproduce its keys in the order they
//! were first seen, so the mapping is backed by a `Vec` rather than a hash map.
//! Parameter sets are small (a handful of camera or selection fields), which
//! keeps linear lookups cheap.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::value::ParamValue;

/// An ordered mapping from parameter key to [`ParamValue`].
///
/// Overwriting an existing key keeps its original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamMapping {
    entries: Vec<(String, ParamValue)>,
}

impl ParamMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a value, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Copy every entry of `other` onto this mapping. Values from `other` win;
    /// keys absent from `other` are kept.
    pub fn overlay(&mut self, other: &ParamMapping) {
        for (key, value) in other.iter() {
            self.insert(key, value.clone());
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ParamMapping
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = ParamMapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K, V> Extend<(K, V)> for ParamMapping
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl Serialize for ParamMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
