//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! **Exactly one place** produces canonical JSON bytes in the workspace. All
//! digests that involve JSON route through this module.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. No extraneous whitespace (compact form: `{"a":1,"b":2}`).
//! 3. Strings are JSON-escaped per RFC 8259 §7.
//! 4. Integers (`i64` or `u64`) are written in decimal. Finite floats are
//!    written in their shortest round-trip form (`2.5`, `1e300`). Anything
//!    else is rejected.
//! 5. `null`, `true`, `false` are written literally.
//! 6. Output is always valid UTF-8.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number had no finite `f64` representation.
    NonFiniteNumber { raw: String },
    /// The value could not be converted to a `serde_json::Value`.
    Serialize { detail: String },
}

impl std::error::Error for CanonError {}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteNumber { raw } => {
                write!(f, "non-finite number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "cannot serialize to JSON: {detail}"),
        }
    }
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonFiniteNumber`] if a JSON number has no finite
/// `f64` value (only reachable with arbitrary-precision numbers).
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

/// Canonical bytes of any serializable value.
///
/// # Errors
///
/// Returns [`CanonError::Serialize`] if `serde_json` cannot represent the
/// value, or any error from [`canonical_json_bytes`].
pub fn canonical_bytes_of<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CanonError> {
    let value = serde_json::to_value(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })?;
    canonical_json_bytes(&value)
}

fn write_value(buf: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Null => buf.extend_from_slice(b"null"),
        Value::Bool(true) => buf.extend_from_slice(b"true"),
        Value::Bool(false) => buf.extend_from_slice(b"false"),
        Value::Number(n) => write_number(buf, n)?,
        Value::String(s) => write_string(buf, s),
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            // Byte-order key sort, independent of the map's own ordering.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_string(buf, key);
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

fn write_number(buf: &mut Vec<u8>, n: &serde_json::Number) -> Result<(), CanonError> {
    let finite = n.is_i64() || n.is_u64() || n.as_f64().is_some_and(f64::is_finite);
    if !finite {
        return Err(CanonError::NonFiniteNumber { raw: n.to_string() });
    }
    // serde_json prints integers exactly and floats in shortest round-trip form.
    let _ = write!(buf, "{n}");
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for ch in s.chars() {
        let _ = match ch {
            '"' => buf.write_all(b"\\\""),
            '\\' => buf.write_all(b"\\\\"),
            '\n' => buf.write_all(b"\\n"),
            '\r' => buf.write_all(b"\\r"),
            '\t' => buf.write_all(b"\\t"),
            c if u32::from(c) < 0x20 => write!(buf, "\\u{:04x}", u32::from(c)),
            c => write!(buf, "{c}"),
        };
    }
    buf.push(b'"');
}
