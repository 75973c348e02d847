use std::sync::Arc;

use super::error::UpdateError;
use super::value::Value;

/// Replace `record.a.c` with `new_value`.
///
/// Equivalent to `{ ...record, a: { ...record.a, c: new_value } }`: the
/// top-level map and the map under `a` are copied, everything else is shared
/// with `record`. `record` itself is left untouched.
pub fn update_nested_field(record: &Value, new_value: Value) -> Result<Value, UpdateError> {
    set_in(record, &["a", "c"], new_value)
}

/// Replace one top-level field. Immutable counterpart of `record.key = value`.
pub fn set_field(record: &Value, key: &str, new_value: Value) -> Result<Value, UpdateError> {
    set_in(record, &[key], new_value)
}

/// Return a copy of `root` with the field at `path` replaced by `new_value`.
///
/// Every object on the path must exist except the last segment, which is
/// inserted when missing. An empty path yields `new_value`.
pub fn set_in(root: &Value, path: &[&str], new_value: Value) -> Result<Value, UpdateError> {
    tracing::debug!(path = %path.join("."), "immutable set");
    set_in_at(root, path, 0, new_value)
}

fn set_in_at(
    node: &Value,
    path: &[&str],
    depth: usize,
    new_value: Value,
) -> Result<Value, UpdateError> {
    let Some(key) = path.get(depth) else {
        return Ok(new_value);
    };

    let fields = node.as_object().ok_or_else(|| UpdateError::NotAnObject {
        path: path_label(&path[..depth]),
    })?;

    let child = if depth + 1 == path.len() {
        new_value
    } else {
        let current = fields.get(*key).ok_or_else(|| UpdateError::MissingField {
            path: path[..=depth].join("."),
        })?;
        set_in_at(current, path, depth + 1, new_value)?
    };

    // Shallow: sibling values are Arc handles, not deep copies. An existing
    // key keeps its position.
    let mut copy = fields.clone();
    copy.insert((*key).to_string(), child);
    Ok(Value::Object(Arc::new(copy)))
}

fn path_label(segments: &[&str]) -> String {
    if segments.is_empty() {
        "<root>".to_string()
    } else {
        segments.join(".")
    }
}

/// New sequence with `element` at the end. Counterpart of `arr.concat(x)`.
pub fn append_immutable<T: Clone>(sequence: &[T], element: T) -> Vec<T> {
    let mut copy = Vec::with_capacity(sequence.len() + 1);
    copy.extend_from_slice(sequence);
    copy.push(element);
    copy
}

/// New sequence with the element at `index` replaced.
/// Counterpart of `arr[index] = x`.
pub fn replace_at<T: Clone>(
    sequence: &[T],
    index: usize,
    element: T,
) -> Result<Vec<T>, UpdateError> {
    if index >= sequence.len() {
        return Err(UpdateError::IndexOutOfBounds {
            index,
            len: sequence.len(),
        });
    }
    let mut copy = sequence.to_vec();
    copy[index] = element;
    Ok(copy)
}

impl Value {
    /// [`append_immutable`] on an array value. Existing elements are shared.
    pub fn appended(&self, element: Value) -> Result<Value, UpdateError> {
        let elements = self.as_array().ok_or(UpdateError::NotAnArray)?;
        Ok(Value::Array(Arc::new(append_immutable(elements, element))))
    }

    /// [`replace_at`] on an array value. Untouched elements are shared.
    pub fn replaced_at(&self, index: usize, element: Value) -> Result<Value, UpdateError> {
        let elements = self.as_array().ok_or(UpdateError::NotAnArray)?;
        Ok(Value::Array(Arc::new(replace_at(elements, index, element)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Value {
        Value::object([
            ("a", Value::object([("c", Value::from(1)), ("d", Value::from("keep"))])),
            ("b", Value::array([Value::from(2)])),
        ])
    }

    #[test]
    fn nested_update_copies_only_the_path() {
        let before = record();
        let after = update_nested_field(&before, Value::from(42)).unwrap();

        assert!(!after.shares_storage(&before));
        assert!(!after.get("a").unwrap().shares_storage(before.get("a").unwrap()));
        assert!(after.get("b").unwrap().shares_storage(before.get("b").unwrap()));
        assert!(after
            .get("a")
            .and_then(|a| a.get("d"))
            .unwrap()
            .shares_storage(before.get("a").and_then(|a| a.get("d")).unwrap()));
    }

    #[test]
    fn nested_update_inserts_missing_leaf() {
        let before = Value::object([("a", Value::object::<&str, _>([]))]);
        let after = update_nested_field(&before, Value::from(7)).unwrap();
        assert_eq!(after.get("a").and_then(|a| a.get("c")), Some(&Value::from(7)));
        assert_eq!(before.get("a").and_then(|a| a.get("c")), None);
    }

    #[test]
    fn missing_intermediate_field_is_reported() {
        let before = Value::object([("b", Value::from(2))]);
        let err = update_nested_field(&before, Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            UpdateError::MissingField {
                path: "a".to_string()
            }
        );
    }

    #[test]
    fn non_object_intermediate_is_reported() {
        let before = Value::object([("a", Value::from(5))]);
        let err = update_nested_field(&before, Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            UpdateError::NotAnObject {
                path: "a".to_string()
            }
        );
    }

    #[test]
    fn non_object_root_is_reported() {
        let err = update_nested_field(&Value::from(3), Value::from(1)).unwrap_err();
        assert_eq!(
            err,
            UpdateError::NotAnObject {
                path: "<root>".to_string()
            }
        );
    }

    #[test]
    fn empty_path_returns_new_value() {
        let after = set_in(&record(), &[], Value::from("whole")).unwrap();
        assert_eq!(after, Value::from("whole"));
    }

    #[test]
    fn update_keeps_key_order() {
        let before: Value = serde_json::from_str(r#"{"z":1,"a":{"x":0,"c":1},"b":2}"#).unwrap();
        let after = update_nested_field(&before, Value::from(42)).unwrap();
        assert_eq!(
            serde_json::to_string(&after).unwrap(),
            r#"{"z":1,"a":{"x":0,"c":42},"b":2}"#
        );
    }

    #[test]
    fn set_field_replaces_top_level() {
        let before = Value::object([("a", Value::from(1)), ("b", Value::from(2))]);
        let after = set_field(&before, "b", Value::from(3)).unwrap();
        assert_eq!(after.get("b"), Some(&Value::from(3)));
        assert_eq!(before.get("b"), Some(&Value::from(2)));
    }

    #[test]
    fn append_leaves_input_alone() {
        let letters = vec!["a", "b"];
        let extended = append_immutable(&letters, "c");
        assert_eq!(extended, vec!["a", "b", "c"]);
        assert_eq!(letters, vec!["a", "b"]);
    }

    #[test]
    fn replace_at_leaves_input_alone() {
        let letters = vec!["a", "b", "c"];
        let replaced = replace_at(&letters, 1, "d").unwrap();
        assert_eq!(replaced, vec!["a", "d", "c"]);
        assert_eq!(letters, vec!["a", "b", "c"]);
    }

    #[test]
    fn replace_at_rejects_out_of_bounds() {
        let err = replace_at(&["a"], 3, "z").unwrap_err();
        assert_eq!(err, UpdateError::IndexOutOfBounds { index: 3, len: 1 });
    }

    #[test]
    fn value_append_shares_elements() {
        let inner = Value::object([("x", Value::from(1))]);
        let before = Value::array([inner.clone()]);
        let after = before.appended(Value::from("new")).unwrap();

        assert_eq!(after.as_array().unwrap().len(), 2);
        assert_eq!(before.as_array().unwrap().len(), 1);
        assert!(after.as_array().unwrap()[0].shares_storage(&inner));
    }

    #[test]
    fn value_append_on_non_array_fails() {
        let err = Value::from("text").appended(Value::Null).unwrap_err();
        assert_eq!(err, UpdateError::NotAnArray);
    }
}
