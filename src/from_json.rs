use crate::error::JsonError;
use crate::tree::*;
use serde_json::Map;
use tracing::debug;

/// Marker keys recognized on JSON objects. Any object that is not one of
/// these shapes becomes a nested map.
pub(crate) const TR: &str = "$tr";
pub(crate) const RAW: &str = "$raw";
pub(crate) const RAW_DATA: &str = "$rawdata";
pub(crate) const DOMAIN: &str = "$domain";
pub(crate) const DOMAIN_VALUE: &str = "$value";

/// Build a tree from a JSON document whose top level is an object.
///
/// Beyond the obvious scalar mappings, arrays become `Repeated` and
/// a few marker objects select the string-like variants:
/// `{"$tr": s}`, `{"$raw": s}`, `{"$rawdata": s}` and
/// `{"$domain": d, "$value": v}`.
pub fn from_json(input: &str) -> Result<Data, JsonError> {
    let json: serde_json::Value = serde_json::from_str(input)?;
    let data = from_json_value(&json)?;
    debug!(entries = data.len(), "loaded tree from JSON");
    Ok(data)
}

pub fn from_json_value(json: &serde_json::Value) -> Result<Data, JsonError> {
    match json {
        serde_json::Value::Object(obj) => convert_object(obj, ""),
        _ => Err(JsonError::NotAnObject {
            path: String::new(),
        }),
    }
}

fn convert_object(obj: &Map<String, serde_json::Value>, path: &str) -> Result<Data, JsonError> {
    let mut data = Data::new();
    for (key, json) in obj {
        if key.is_empty() {
            return Err(JsonError::EmptyKey {
                path: path.to_string(),
            });
        }
        let child = join(path, key);
        data.insert(key.clone(), convert_value(json, &child)?);
    }
    Ok(data)
}

fn convert_value(json: &serde_json::Value, path: &str) -> Result<Value, JsonError> {
    match json {
        serde_json::Value::Null => Err(JsonError::Null {
            path: path.to_string(),
        }),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Unsigned(u))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| convert_value(item, &join(path, &i.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Repeated),
        serde_json::Value::Object(obj) => match convert_marker(obj, path)? {
            Some(value) => Ok(value),
            None => convert_object(obj, path).map(Value::Map),
        },
    }
}

/// Recognize a marker object. Returns `None` for an ordinary map.
fn convert_marker(
    obj: &Map<String, serde_json::Value>,
    path: &str,
) -> Result<Option<Value>, JsonError> {
    if obj.contains_key(DOMAIN) {
        if obj.len() != 2 || !obj.contains_key(DOMAIN_VALUE) {
            return Err(malformed(
                path,
                format!("'{}' requires exactly one sibling '{}'", DOMAIN, DOMAIN_VALUE),
            ));
        }
        let domain = marker_string(obj, DOMAIN, path)?;
        let inner = match obj.get(DOMAIN_VALUE) {
            Some(v) => convert_value(v, path)?,
            None => return Err(malformed(path, format!("missing '{}'", DOMAIN_VALUE))),
        };
        return Ok(Some(Value::domain(inner, domain)));
    }

    for marker in [TR, RAW, RAW_DATA] {
        if !obj.contains_key(marker) {
            continue;
        }
        if obj.len() != 1 {
            return Err(malformed(
                path,
                format!("'{}' must be the only key of its object", marker),
            ));
        }
        let s = marker_string(obj, marker, path)?;
        let value = match marker {
            TR => Value::Translatable(s),
            RAW => Value::RawExpression(s),
            _ => Value::RawBlock(s),
        };
        return Ok(Some(value));
    }

    Ok(None)
}

fn marker_string(
    obj: &Map<String, serde_json::Value>,
    marker: &str,
    path: &str,
) -> Result<String, JsonError> {
    match obj.get(marker) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        _ => Err(malformed(path, format!("'{}' must be a string", marker))),
    }
}

fn malformed(path: &str, message: String) -> JsonError {
    JsonError::MalformedMarker {
        path: path.to_string(),
        message,
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}
