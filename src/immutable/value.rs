use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// A JSON-shaped value whose containers are reference counted.
///
/// Cloning never deep copies: arrays, objects and strings bump a count.
/// Two values that came from the same original share every subtree that was
/// not on an update path, see [`Value::shares_storage`].
///
/// Objects keep insertion order and numbers keep their exact JSON text, so a
/// value prints back the way it was parsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(Arc<str>),
    Array(Arc<Vec<Value>>),
    Object(Arc<IndexMap<String, Value>>),
}

impl Value {
    /// Build an object from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Build an array from elements.
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(Arc::new(elements.into_iter().collect()))
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(&**fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    /// Field lookup; `None` for non-objects and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    /// True when both values point at the same heap allocation.
    ///
    /// Scalars other than strings live inline and never share storage.
    pub fn shares_storage(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// True when `self` was carried over into `other` untouched.
    ///
    /// Containers and strings must be the same allocation; inline scalars
    /// have no allocation, so they count as kept when equal.
    pub fn is_kept_in(&self, other: &Value) -> bool {
        match self {
            Value::Null | Value::Bool(_) | Value::Number(_) => self == other,
            _ => self.shares_storage(other),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Arc::from(value))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(elements) => {
                Value::array(elements.into_iter().map(Value::from))
            }
            serde_json::Value::Object(fields) => {
                Value::object(fields.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_containers() {
        let original = Value::object([("a", Value::array([Value::from(1)]))]);
        let copy = original.clone();
        assert!(copy.shares_storage(&original));
        assert!(copy.get("a").unwrap().shares_storage(original.get("a").unwrap()));
    }

    #[test]
    fn equal_but_separate_values_do_not_share() {
        let left = Value::array([Value::from("x")]);
        let right = Value::array([Value::from("x")]);
        assert_eq!(left, right);
        assert!(!left.shares_storage(&right));
    }

    #[test]
    fn scalars_never_share() {
        assert!(!Value::from(2).shares_storage(&Value::from(2)));
        assert!(!Value::Null.shares_storage(&Value::Null));
    }

    #[test]
    fn parses_from_json_text() {
        let value: Value = serde_json::from_str(r#"{"a":{"c":3},"b":2}"#).unwrap();
        assert_eq!(value.get("b"), Some(&Value::from(2)));
        assert_eq!(
            value.get("a").and_then(|a| a.get("c")),
            Some(&Value::from(3))
        );
    }

    #[test]
    fn serializes_back_to_json() {
        let value = Value::object([
            ("b", Value::from(true)),
            ("a", Value::array([Value::from("x"), Value::Null])),
        ]);
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"{"b":true,"a":["x",null]}"#);
    }

    #[test]
    fn key_order_survives_a_round_trip() {
        let text = r#"{"z":1,"a":{"c":1},"b":2}"#;
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), text);
    }

    #[test]
    fn wide_integers_are_not_rounded() {
        let text = r#"[18446744073709551616,-99999999999999999999]"#;
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), text);
    }

    #[test]
    fn equal_scalars_count_as_kept() {
        assert!(Value::from(2).is_kept_in(&Value::from(2)));
        assert!(Value::Null.is_kept_in(&Value::Null));
        assert!(!Value::from(2).is_kept_in(&Value::from(3)));
    }

    #[test]
    fn containers_are_kept_only_when_shared() {
        let original = Value::array([Value::from(1)]);
        assert!(original.is_kept_in(&original.clone()));
        assert!(!original.is_kept_in(&Value::array([Value::from(1)])));
    }
}
