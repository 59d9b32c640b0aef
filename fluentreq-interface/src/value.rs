//! Scalar configuration values and the maps that hold them.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;

/// A scalar configuration value: a string, a boolean or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// An integer or finite floating point number.
    Number(Number),
    /// A string.
    String(String),
}

/// The error returned when converting something that is not a string, boolean or finite number
/// into a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("only strings, booleans and numbers are accepted as configuration values")]
pub struct InvalidValue;

impl Value {
    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value as `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    /// Returns the value as `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    /// Returns `true` if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => b.fmt(f),
            Self::Number(n) => n.fmt(f),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<f64> for Value {
    type Error = InvalidValue;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        Number::from_f64(n).map(Self::Number).ok_or(InvalidValue)
    }
}

impl TryFrom<f32> for Value {
    type Error = InvalidValue;

    fn try_from(n: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(n))
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = InvalidValue;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => Ok(Self::Number(n)),
            serde_json::Value::String(s) => Ok(Self::String(s)),
            serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Err(InvalidValue)
            }
        }
    }
}

/// A string-keyed collection of scalar [`Value`]s.
///
/// Merging only ever inserts or overrides keys. There is no way to remove a key once set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(BTreeMap<String, Value>);

impl ConfigMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a JSON object, skipping every entry whose value is not a scalar.
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut map = Self::new();
        for (key, value) in object {
            map.insert(key, value);
        }
        map
    }

    /// Inserts `value` under `key` if it converts into a [`Value`].
    ///
    /// Returns `false` and leaves the map untouched when the conversion fails.
    pub fn insert<V>(&mut self, key: impl Into<String>, value: V) -> bool
    where
        V: TryInto<Value>,
    {
        match value.try_into() {
            Ok(value) => {
                self.0.insert(key.into(), value);
                true
            }
            Err(_) => false,
        }
    }

    /// Gets the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Adds every entry of `other`, overriding existing keys.
    pub fn merge(&mut self, other: ConfigMap) {
        self.0.extend(other.0);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from("a"), Value::String("a".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(5u16).as_u64(), Some(5));
        assert_eq!(Value::try_from(1.5).unwrap().as_f64(), Some(1.5));
        assert_eq!(Value::try_from(f64::NAN), Err(InvalidValue));
        assert_eq!(Value::try_from(f32::INFINITY), Err(InvalidValue));
    }

    #[test]
    fn test_json_conversions() {
        assert_eq!(Value::try_from(json!("x")), Ok(Value::from("x")));
        assert_eq!(Value::try_from(json!(3)), Ok(Value::from(3)));
        assert_eq!(Value::try_from(json!(null)), Err(InvalidValue));
        assert_eq!(Value::try_from(json!([1, 2])), Err(InvalidValue));
        assert_eq!(Value::try_from(json!({"a": 1})), Err(InvalidValue));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("text").to_string(), "text");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::try_from(0.5).unwrap().to_string(), "0.5");
    }

    #[test]
    fn test_insert_rejects_non_scalars() {
        let mut map = ConfigMap::new();
        assert!(map.insert("timeout", 5));
        assert!(!map.insert("timeout", f64::NAN));
        assert!(!map.insert("list", json!(["a"])));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("timeout"), Some(&Value::from(5)));
    }

    #[test]
    fn test_merge_overrides_and_keeps() {
        let mut persisted: ConfigMap = [("a", Value::from(1)), ("b", Value::from("keep"))]
            .into_iter()
            .collect();
        let call: ConfigMap = [("a", Value::from(2)), ("c", Value::from(true))]
            .into_iter()
            .collect();
        persisted.merge(call);

        assert_eq!(persisted.len(), 3);
        assert_eq!(persisted.get("a"), Some(&Value::from(2)));
        assert_eq!(persisted.get("b"), Some(&Value::from("keep")));
        assert_eq!(persisted.get("c"), Some(&Value::from(true)));
    }

    #[test]
    fn test_from_json_object_skips_non_scalars() {
        let object = json!({"timeout": 10, "body": null, "nested": {"x": 1}, "ua": "agent"});
        let serde_json::Value::Object(object) = object else {
            unreachable!()
        };
        let map = ConfigMap::from_json_object(object);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("timeout"));
        assert!(map.contains_key("ua"));
    }

    #[test]
    fn test_serde_round_trip_shape() {
        let mut map = ConfigMap::new();
        map.insert("flag", true);
        map.insert("name", "x");
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            json!({"flag": true, "name": "x"})
        );
    }
}
