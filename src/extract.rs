//! Locating problem-like records in loosely structured payloads and pulling
//! fields out of them by ordered key probing.

use serde_json::{Map, Value};

use crate::error::RecordError;

pub type Record = Map<String, Value>;

/// Where a source keeps its list of records.
#[derive(Debug, Clone, Copy)]
pub struct Locator {
    /// Container keys tried in order; the first one present wins. Dotted paths descend.
    pub containers: &'static [&'static str],
    /// When no container yields records, treat object-valued entries carrying one of these
    /// fields as records. Empty disables the scan.
    pub descriptive_fields: &'static [&'static str],
    /// Field that receives the entry key of an implicit record.
    pub key_field: &'static str,
}

/// Ordered sequence of record maps found in `payload`.
pub fn locate_records(payload: &Value, locator: &Locator) -> Vec<Record> {
    match payload {
        Value::Array(items) => objects(items),
        Value::Object(map) => {
            let listed = locator
                .containers
                .iter()
                .find_map(|key| lookup(map, key))
                .map(|container| match container {
                    Value::Array(items) => objects(items),
                    _ => Vec::new(),
                })
                .unwrap_or_default();

            if listed.is_empty() && !locator.descriptive_fields.is_empty() {
                implicit_records(map, locator)
            } else {
                listed
            }
        }
        _ => Vec::new(),
    }
}

fn objects(items: &[Value]) -> Vec<Record> {
    items
        .iter()
        .filter_map(|v| v.as_object().cloned())
        .collect()
}

/// `{"FCTRL": {"name": "Factorial"}, ...}` style payloads keyed by problem code,
/// in payload order.
fn implicit_records(map: &Record, locator: &Locator) -> Vec<Record> {
    map.iter()
        .filter_map(|(key, value)| {
            let inner = value.as_object()?;
            if !locator
                .descriptive_fields
                .iter()
                .any(|f| inner.contains_key(*f))
            {
                return None;
            }
            let mut record = inner.clone();
            record.insert(locator.key_field.to_string(), Value::String(key.clone()));
            Some(record)
        })
        .collect()
}

/// Resolve a possibly dotted key (`stat.question_id`) inside `map`.
fn lookup<'a>(map: &'a Record, key: &str) -> Option<&'a Value> {
    let mut parts = key.split('.');
    let mut current = map.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// First candidate key whose value is present, non-null and not an empty string.
pub fn probe<'a>(map: &'a Record, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| lookup(map, key))
        .find(|v| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

/// [`probe`] as trimmed text. Numbers are stringified; other shapes are skipped.
pub fn probe_str(map: &Record, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        let value = probe(map, std::slice::from_ref(key))?;
        match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    })
}

/// [`probe`] as an integer; see [`value_as_i64`].
pub fn probe_i64(map: &Record, keys: &[&str]) -> Option<i64> {
    keys.iter()
        .find_map(|key| probe(map, std::slice::from_ref(key)).and_then(value_as_i64))
}

/// [`probe`] as a float; numeric strings are parsed.
pub fn probe_f64(map: &Record, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match probe(map, std::slice::from_ref(key))? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Integers, integral floats and numeric strings. Anything else is `None`.
pub fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String list under the first present key; non-string entries are dropped.
pub fn probe_str_list(map: &Record, keys: &[&str]) -> Vec<String> {
    probe(map, keys)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Titles must be at least three characters and must not merely repeat the code.
pub fn validate_title(code: &str, title: &str) -> Result<(), RecordError> {
    if title.chars().count() < 3 {
        return Err(RecordError::TitleTooShort(title.to_string()));
    }
    if title.to_lowercase() == code.to_lowercase() {
        return Err(RecordError::TitleIsCode(title.to_string()));
    }
    Ok(())
}
