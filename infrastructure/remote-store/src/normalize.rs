use serde_json::Value;

/// Unwraps a list payload that may be a bare array, an object wrapping the
/// array under one of the known keys, or an object with some other
/// array-valued field. Fallback order: known keys, then any array field,
/// else empty. This is the only place aware of the backend's wrapper shapes.
pub fn unwrap_list(payload: Value, known_keys: &[&str]) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in known_keys {
                if matches!(map.get(*key), Some(Value::Array(_)))
                    && let Some(Value::Array(items)) = map.remove(*key)
                {
                    return items;
                }
            }
            for (_, value) in map {
                if let Value::Array(items) = value {
                    return items;
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Unwraps a single record that may arrive bare or wrapped under a key.
pub fn unwrap_item(payload: Value, key: &str) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key(key) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        other => other,
    }
}
