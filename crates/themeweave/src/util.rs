//! Small helpers shared by the resolvers.

use serde_json::Value;

/// Strips the `$$` marker from a set, box or component name.
pub(crate) fn strip_reference(name: &str) -> &str {
    name.strip_prefix("$$").unwrap_or(name)
}

/// Deep-merges `overlay` into `base`.
///
/// Mappings merge key by key, recursively. Lists concatenate, `base` items
/// first. Anything else is replaced by `overlay`.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(base), Value::Array(overlay)) => base.extend(overlay),
        (base, overlay) => *base = overlay,
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
