//! Request normalization.
//!
//! Order fields arrive loosely typed: counts as numbers or strings, lists as
//! arrays or a single string, templates as a string or a bare number. Each
//! function here turns one raw JSON value into the typed field the engine
//! expects, and none of them fail.

use serde_json::{Number, Value};

/// Coerces a cake count to a non-negative integer.
///
/// - integers clamp to `0..=u32::MAX`
/// - finite floats truncate toward zero, then clamp
/// - strings are trimmed and parsed the same way
/// - anything else (null, bool, arrays, objects, garbage text) is 0
///
/// # Examples
///
/// ```
/// use cake_pricing::calculation::coerce_count;
/// use serde_json::json;
///
/// assert_eq!(coerce_count(&json!(3)), 3);
/// assert_eq!(coerce_count(&json!("2")), 2);
/// assert_eq!(coerce_count(&json!(-1)), 0);
/// assert_eq!(coerce_count(&json!("many")), 0);
/// assert_eq!(coerce_count(&json!(null)), 0);
/// ```
pub fn coerce_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => count_from_number(n),
        Value::String(s) => count_from_str(s),
        _ => 0,
    }
}

fn count_from_number(n: &Number) -> u32 {
    if let Some(u) = n.as_u64() {
        u32::try_from(u).unwrap_or(u32::MAX)
    } else if n.is_i64() {
        0
    } else {
        n.as_f64().map(count_from_f64).unwrap_or(0)
    }
}

fn count_from_str(s: &str) -> u32 {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return u32::try_from(i.max(0)).unwrap_or(u32::MAX);
    }
    s.parse::<f64>().map(count_from_f64).unwrap_or(0)
}

fn count_from_f64(f: f64) -> u32 {
    if f.is_finite() {
        // Saturating cast: negatives become 0, large values u32::MAX.
        f as u32
    } else {
        0
    }
}

/// Coerces the layer count; at least one layer.
pub fn coerce_layers(value: &Value) -> u32 {
    coerce_count(value).max(1)
}

/// Coerces the informational servings count; zero or invalid is `None`.
pub fn coerce_servings(value: &Value) -> Option<u32> {
    Some(coerce_count(value)).filter(|&n| n > 0)
}

/// Coerces a single identifier to a string.
///
/// Numbers become their text form, with integral floats written without a
/// fraction (`999.0` → `"999"`). Other non-strings become the empty string.
pub fn coerce_identifier(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => identifier_from_number(n),
        _ => String::new(),
    }
}

fn identifier_from_number(n: &Number) -> String {
    if n.is_u64() || n.is_i64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

/// Coerces a list of identifiers.
///
/// An array yields each element via [`coerce_identifier`] with empty
/// results dropped; a lone string yields one element; anything else is
/// empty. Duplicates are kept.
pub fn coerce_identifier_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(coerce_identifier)
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Coerces the template selector; blank or missing is `None`.
pub fn coerce_template(value: &Value) -> Option<String> {
    let id = coerce_identifier(value);
    let id = id.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
