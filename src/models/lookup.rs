//! Swatch metadata table (`swatch_lookup.json`).
//!
//! The table is either a JSON array of row objects or an object whose values
//! are row objects. Colour components may be numbers or numeric strings and
//! are coerced the way a browser's `Number()` would; anything that does not
//! coerce becomes NaN and the catalogue drops the row as malformed.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use swatch_engine::RawSwatchRow;

use crate::error::LoadError;

#[derive(Debug, Deserialize, Default)]
struct LookupRow {
    #[serde(default)]
    filename: Value,
    #[serde(default, deserialize_with = "present")]
    h: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    s: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    b: Option<Value>,
    #[serde(default)]
    dyestuff: Value,
    #[serde(default, rename = "pH")]
    ph: Value,
    #[serde(default)]
    mordant: Value,
    #[serde(default)]
    additive: Value,
    #[serde(default)]
    time: Value,
}

/// Keeps an explicit `null` distinct from an absent key.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Numeric coercion with browser `Number()` semantics for JSON values.
///
/// A missing value is NaN, `null` is 0, booleans are 0 or 1, and strings
/// are trimmed with an empty string counting as 0.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => coerce_str(s),
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

fn coerce_str(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = coerce_radix(trimmed) {
        return value;
    }
    // Rust accepts "inf" and "nan" spellings that Number() does not
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Unsigned `0x`, `0o` and `0b` integer literals. A prefix with bad or
/// missing digits is NaN; a sign before the prefix never reaches here
/// because the caller rejects the letter.
fn coerce_radix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

/// Text of a categorical cell. Strings pass through, numbers and booleans
/// are formatted, missing or null cells become empty.
fn label(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

impl From<LookupRow> for RawSwatchRow {
    fn from(row: LookupRow) -> Self {
        RawSwatchRow {
            h: coerce_number(row.h.as_ref()),
            s: coerce_number(row.s.as_ref()),
            b: coerce_number(row.b.as_ref()),
            filename: label(row.filename),
            dyestuff: label(row.dyestuff),
            ph: label(row.ph),
            mordant: label(row.mordant),
            additive: label(row.additive),
            time: label(row.time),
        }
    }
}

fn row_from_value(value: Value) -> RawSwatchRow {
    match serde_json::from_value::<LookupRow>(value) {
        Ok(row) => row.into(),
        // Non-object entries cannot carry a colour; NaN makes the catalogue drop them
        Err(_) => RawSwatchRow {
            h: f64::NAN,
            s: f64::NAN,
            b: f64::NAN,
            ..Default::default()
        },
    }
}

/// Parse the lookup table into raw rows in document order.
pub fn parse_lookup(content: &str) -> Result<Vec<RawSwatchRow>, LoadError> {
    let doc: Value = serde_json::from_str(content)?;
    let entries: Vec<Value> = match doc {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        _ => return Err(LoadError::Shape),
    };
    Ok(entries.into_iter().map(row_from_value).collect())
}

/// Read and parse the lookup table from disk.
pub async fn read_lookup(path: &Path) -> Result<Vec<RawSwatchRow>, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let rows = parse_lookup(&content)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Read lookup table");
    Ok(rows)
}
