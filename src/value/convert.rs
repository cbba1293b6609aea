use crate::value::types::*;
use std::rc::Rc;

// Adapters from serde_json documents. Objects keep document order because
// serde_json is built with `preserve_order`.

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Object(object) => Value::Mapping(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::String(s) => Value::Primitive(Primitive::Str(s)),
            serde_json::Value::Number(n) => Value::Primitive(number_to_primitive(&n)),
            serde_json::Value::Bool(b) => Value::Primitive(Primitive::Bool(b)),
            serde_json::Value::Null => Value::null(),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Object(object) => Value::Mapping(
                object
                    .iter()
                    .map(|(key, value)| (key.as_str(), Value::from(value)))
                    .collect(),
            ),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.iter().map(Value::from).collect())
            }
            serde_json::Value::String(s) => Value::Primitive(Primitive::Str(s.clone())),
            serde_json::Value::Number(n) => Value::Primitive(number_to_primitive(n)),
            serde_json::Value::Bool(b) => Value::Primitive(Primitive::Bool(*b)),
            serde_json::Value::Null => Value::null(),
        }
    }
}

fn number_to_primitive(n: &serde_json::Number) -> Primitive {
    if let Some(i) = n.as_i64() {
        Primitive::Int(i128::from(i))
    } else if let Some(u) = n.as_u64() {
        Primitive::Int(i128::from(u))
    } else if let Some(f) = n.as_f64() {
        Primitive::Float(f)
    } else {
        Primitive::Opaque(Rc::new(n.clone()))
    }
}
