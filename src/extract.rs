//! Schema-tolerant extraction from loosely-structured JSON payloads.
//!
//! The research endpoints return company payloads whose field names and
//! shapes drift between scrape sources: a list of services may arrive as an
//! array of strings, a single newline-separated string, or an array of
//! objects with a `name`/`title` key. Rather than probing ad hoc at every
//! call site, these helpers try an ordered list of candidate paths and fall
//! back to a default when nothing matches.

use serde_json::Value;

/// Resolve a dotted path (`"details.founded"`) against a JSON value.
fn at_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Return the first candidate path that resolves to a non-null value.
pub fn first_present<'a>(value: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| at_path(value, path))
        .find(|v| !v.is_null())
}

/// Extract a string from the first matching path. Bare numbers are
/// stringified; other shapes are treated as absent.
pub fn string_at(value: &Value, paths: &[&str]) -> Option<String> {
    match first_present(value, paths)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract an integer from the first matching path, tolerating numeric
/// strings like `"1999"`.
pub fn int_at(value: &Value, paths: &[&str]) -> Option<i64> {
    match first_present(value, paths)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extract an ordered list of strings from the first matching path.
///
/// Accepted shapes: an array of strings, an array of objects carrying a
/// `name`/`title`/`value` key, or a single string (split on newlines).
/// Anything else resolves to the empty list.
pub fn string_list_at(value: &Value, paths: &[&str]) -> Vec<String> {
    let Some(found) = first_present(value, paths) else {
        return Vec::new();
    };
    match found {
        Value::Array(items) => items.iter().filter_map(list_item_as_string).collect(),
        Value::String(s) => s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn list_item_as_string(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => ["name", "title", "value"]
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
