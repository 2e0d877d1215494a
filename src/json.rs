use crate::from_json::{DOMAIN, DOMAIN_VALUE, RAW, RAW_DATA, TR};
use crate::tree::*;
use serde_json::{json, Map, Number};

/// Encode a tree in the JSON form accepted by [`crate::from_json::from_json`].
pub fn to_json_value(data: &Data) -> serde_json::Value {
    let mut obj = Map::new();
    for key in data.sorted_keys() {
        if let Some(value) = data.get(key) {
            obj.insert(key.to_string(), value_to_json(value));
        }
    }
    serde_json::Value::Object(obj)
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(n) => serde_json::Value::Number(Number::from(*n)),
        Value::Unsigned(n) => serde_json::Value::Number(Number::from(*n)),
        // Non-finite floats have no JSON form.
        Value::Float(n) => Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::Translatable(s) => json!({ TR: s }),
        Value::RawExpression(s) => json!({ RAW: s }),
        Value::RawBlock(s) => json!({ RAW_DATA: s }),
        Value::Map(d) => to_json_value(d),
        Value::Repeated(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::DomainWrapped(d) => json!({
            DOMAIN: d.domain,
            DOMAIN_VALUE: value_to_json(&d.value),
        }),
    }
}

/// Serialize to compact JSON.
pub fn to_json(data: &Data) -> String {
    to_json_value(data).to_string()
}

/// Serialize to pretty-printed JSON (2-space indent).
pub fn to_json_pretty(data: &Data) -> String {
    // Serializing a Value built from strings and numbers can't fail.
    serde_json::to_string_pretty(&to_json_value(data)).unwrap_or_default()
}

impl Data {
    pub fn to_json(&self) -> String {
        to_json(self)
    }

    pub fn to_json_pretty(&self) -> String {
        to_json_pretty(self)
    }
}
