//! Canonical text form and key-order insensitive equality.
//!
//! The canonical form is JSON with dict keys sorted at every nesting level:
//!
//! ```text
//! {"a": 1, "b": [true, null, "x"], "c": {"d": 2.5}}
//! ```
//!
//! - Separators are `", "` and `": "`
//! - Ints print in decimal, floats in their default text form (`1.0`, `1e+16`)
//! - Non-finite floats print as `NaN`, `Infinity` and `-Infinity`
//! - Strings use JSON escaping
//!
//! Because `1` and `1.0` print differently they are never canonically equal.

use sha2::{Digest, Sha256};

use crate::model::Value;
use crate::util::format_float;

/// Renders `value` in canonical form.
pub fn to_canonical_string(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&canonical_float(*f)),
        Value::Text(s) => write_json_string(s, out),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Dict(entries) => {
            // Stable sort keeps duplicate keys (only possible when the
            // variant is built by hand) in insertion order.
            let mut sorted: Vec<&(String, Value)> = entries.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));

            out.push('{');
            for (i, (key, item)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_json_string(key, out);
                out.push_str(": ");
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

fn canonical_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format_float(f)
    }
}

fn write_json_string(text: &str, out: &mut String) {
    // Serializing a str cannot fail.
    out.push_str(&serde_json::to_string(text).unwrap_or_default());
}

/// Returns true if both values have the same canonical form.
///
/// Dict key order is ignored at every level; any differing leaf, list order
/// or numeric kind makes the values unequal. The comparison is textual, so
/// it is reflexive even for values containing NaN.
pub fn canonical_equal(a: &Value, b: &Value) -> bool {
    to_canonical_string(a) == to_canonical_string(b)
}

/// Computes a 16-byte fingerprint of the canonical form.
///
/// ```text
/// fingerprint = SHA-256(canonical_utf8)[0:16]
/// ```
///
/// Canonically equal values always share a fingerprint.
pub fn canonical_fingerprint(value: &Value) -> [u8; 16] {
    let hash = Sha256::digest(to_canonical_string(value).as_bytes());
    let mut fingerprint = [0u8; 16];
    fingerprint.copy_from_slice(&hash[..16]);
    fingerprint
}
