//! Insertion-ordered property maps
//!
//! A [`PropertyMap`] is the result of reflective extraction: a fresh,
//! caller-owned mapping from property name to [`Value`]. Keys are unique
//! and iteration follows insertion order, which for the `to_map*` family
//! is the declaration order of the source type's properties.
//!
//! Ordering is kept with the same two-structure arrangement used for
//! field tables elsewhere: an ordered entry vector paired with a
//! name→position index.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::Value;

/// Ordered name→value mapping produced by reflective extraction
#[derive(Clone, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl PropertyMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::default(),
        }
    }

    /// Insert a key/value pair.
    ///
    /// A duplicate key replaces the value in place, keeping the original
    /// position; the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for emptiness
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lower to a `serde_json::Value` object.
    ///
    /// JSON objects are unordered, so insertion order survives only in
    /// serializers that keep emission order (serializing the map itself
    /// with [`serde_json::to_string`] does).
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            object.insert(key.clone(), value.to_json());
        }
        serde_json::Value::Object(object)
    }
}

impl fmt::Debug for PropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl FromIterator<(String, Value)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("id", Value::int(1));
        map.insert("name", Value::string("ann"));
        map.insert("active", Value::bool(true));
        map
    }

    #[test]
    fn test_insertion_order() {
        let map = sample();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["id", "name", "active"]);
    }

    #[test]
    fn test_get_and_contains() {
        let map = sample();
        assert_eq!(map.get("id"), Some(&Value::int(1)));
        assert!(map.contains_key("name"));
        assert!(!map.contains_key("missing"));
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_key_keeps_position() {
        let mut map = sample();
        let old = map.insert("id", Value::int(2));
        assert_eq!(old, Some(Value::int(1)));
        assert_eq!(map.len(), 3);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["id", "name", "active"]);
        assert_eq!(map.get("id"), Some(&Value::int(2)));
    }

    #[test]
    fn test_empty() {
        let map = PropertyMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.keys().count(), 0);
    }

    #[test]
    fn test_to_json() {
        let map = sample();
        let json = map.to_json();
        assert_eq!(json["id"], serde_json::json!(1));
        assert_eq!(json["name"], serde_json::json!("ann"));
        assert_eq!(json["active"], serde_json::json!(true));
    }

    #[test]
    fn test_serialize_preserves_order() {
        let map = sample();
        let text = serde_json::to_string(&map).unwrap();
        assert_eq!(text, r#"{"id":1,"name":"ann","active":true}"#);
    }

    #[test]
    fn test_from_iterator() {
        let map: PropertyMap = vec![
            ("a".to_string(), Value::int(1)),
            ("b".to_string(), Value::int(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("b"), Some(&Value::int(2)));
    }
}
