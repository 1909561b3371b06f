//! Conversion from JSON values.
//!
//! JSON objects have no key ordering and are rejected.

use serde_json::Value;

use crate::error::KeyError;
use crate::types::Key;

impl TryFrom<&Value> for Key {
    type Error = KeyError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Key::Null),
            Value::Bool(b) => Ok(Key::Boolean(*b)),
            Value::Number(n) => n
                .as_f64()
                .map(Key::Number)
                .ok_or_else(|| KeyError::unsupported(format!("number {n}"))),
            Value::String(s) => Ok(Key::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Key::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Key::Sequence),
            Value::Object(_) => Err(KeyError::unsupported("object")),
        }
    }
}

impl TryFrom<Value> for Key {
    type Error = KeyError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Key::String(s)),
            Value::Array(items) => items
                .into_iter()
                .map(Key::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Key::Sequence),
            other => Key::try_from(&other),
        }
    }
}
