//! Dynamic values for session context, tool parameters, and result metadata
//!
//! Context and metadata carry caller-supplied data of mixed shape. Instead of
//! dynamic dispatch on runtime types, [`Value`] is a closed tagged union so
//! rendering and serialization stay exhaustive, and [`ValueMap`] is an
//! insertion-ordered string-keyed map so listings and rendered output are
//! deterministic.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-shaped value.
///
/// Scalars display as their plain string form; lists and maps display as
/// compact JSON. This is the rendering rule used by the runtime's output
/// template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Ordered string-keyed map of values
    Map(ValueMap),
}

impl Value {
    /// True for string, integer, float, and boolean values.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Try to get as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as a float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as a map
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
            Value::List(_) | Value::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

/// Insertion-ordered string-keyed map of [`Value`]s.
///
/// Backed by an association list: iteration order is registration order, and
/// inserting an existing key replaces the value **in place** without moving
/// the entry. Lookups are linear, which is the right trade for the small
/// maps carried by sessions and results.
///
/// # Example
///
/// ```rust
/// use ravelin_core::ValueMap;
///
/// let mut map = ValueMap::new().with("env", "prod").with("retries", 3i64);
/// map.insert("env", "staging");
///
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, ["env", "retries"]);
/// assert_eq!(map.get("env").and_then(|v| v.as_str()), Some("staging"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
    entries: Vec<(String, Value)>,
}

impl ValueMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an entry, chainable for construction sites.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace an entry.
    ///
    /// Replacing keeps the entry at its original position and returns the
    /// previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        for (existing, slot) in &mut self.entries {
            if *existing == key {
                return Some(std::mem::replace(slot, value));
            }
        }
        self.entries.push((key, value));
        None
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove an entry by key, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl FromIterator<(String, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Extend<(String, Value)> for ValueMap {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for ValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueMapVisitor;

        impl<'de> Visitor<'de> for ValueMapVisitor {
            type Value = ValueMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string-keyed map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = ValueMap::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ValueMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_display_directly() {
        assert_eq!(Value::from("prod").to_string(), "prod");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn structured_values_display_as_json() {
        let list = Value::List(vec![Value::from(1i64), Value::from("two")]);
        assert_eq!(list.to_string(), r#"[1,"two"]"#);

        let map = Value::Map(ValueMap::new().with("a", 1i64).with("b", "x"));
        assert_eq!(map.to_string(), r#"{"a":1,"b":"x"}"#);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut map = ValueMap::new().with("first", 1i64).with("second", 2i64);

        let old = map.insert("first", 10i64);

        assert_eq!(old, Some(Value::Integer(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["first", "second"]);
        assert_eq!(map.get("first").and_then(Value::as_i64), Some(10));
    }

    #[test]
    fn remove_absent_key_is_none() {
        let mut map = ValueMap::new().with("present", true);
        assert_eq!(map.remove("absent"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn serde_preserves_insertion_order() {
        let map = ValueMap::new()
            .with("z", 1i64)
            .with("a", 2i64)
            .with("m", 3i64);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2,"m":3}"#);

        let back: ValueMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
    }

    #[test]
    fn nested_values_round_trip() {
        let map = ValueMap::new()
            .with("flags", Value::List(vec![Value::from(true), Value::from(false)]))
            .with("inner", ValueMap::new().with("k", "v"));

        let json = serde_json::to_string(&map).unwrap();
        let back: ValueMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
