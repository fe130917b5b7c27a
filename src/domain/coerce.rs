// src/domain/coerce.rs
//
// Lookup and coercion helpers for loosely shaped upstream JSON.

use serde_json::{Map, Value};

/// Case-insensitive key lookup. The first matching key in document order wins.
pub fn field_ci<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

/// First alias whose value is present, non-null and not an empty string.
pub fn first_field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| field_ci(obj, key))
        .find(|v| is_present(v))
}

pub fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Loose truthiness: null, false, zero and "" are falsy; arrays and objects are not.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First truthy value among exact keys of `obj`.
pub fn first_truthy<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| truthy(v))
}

pub fn to_text(v: Option<&Value>) -> String {
    match v {
        None => String::new(),
        Some(v) => value_text(v),
    }
}

fn value_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => format!("{f}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => String::new(),
    }
}

/// Numeric coercion with a 0 fallback for anything unparsable or non-finite.
pub fn to_number(v: Option<&Value>) -> f64 {
    let parsed = match v {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::String(s)) => {
            let t = s.trim();
            if t.is_empty() {
                Some(0.0)
            } else {
                t.parse::<f64>().ok()
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => None,
    };

    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

/// Counts are whole numbers; fractions truncate toward zero.
pub fn to_count(v: Option<&Value>) -> i64 {
    to_number(v).trunc() as i64
}

/// Non-empty string value, if `v` is one.
pub fn non_empty_str(v: Option<&Value>) -> Option<&str> {
    v.and_then(Value::as_str).filter(|s| !s.is_empty())
}
