//! Reports on a value's kind and truthiness.

use crate::model::{Truthiness, Value};

/// Reports whether `value` has the kind named `expected`.
///
/// Returns `"La variable es {expected}: {True|False}"`. The comparison against
/// [`Kind::name`](crate::model::Kind::name) is case-sensitive, so `"number"`
/// never matches.
pub fn type_check(value: &Value, expected: &str) -> String {
    let matches = value.kind().name() == expected;
    format!(
        "La variable es {}: {}",
        expected,
        if matches { "True" } else { "False" }
    )
}

/// Classifies `value` as a boolean, falsy or truthy under the default policy.
pub fn falsy_report(value: &Value) -> String {
    falsy_report_with(value, Truthiness::default())
}

/// Like [`falsy_report`] with an explicit truthiness policy.
///
/// Booleans are reported as such before truthiness is considered.
pub fn falsy_report_with(value: &Value, policy: Truthiness) -> String {
    match value {
        Value::Bool(false) => "El elemento es el booleano false".to_string(),
        Value::Bool(true) => "El elemento es el booleano true".to_string(),
        other if policy.is_falsy(other) => "El elemento es falsy: true".to_string(),
        _ => "El elemento es truthy: true".to_string(),
    }
}

/// Distinguishes the null marker from other falsy values and from valid ones.
pub fn safe_value(value: &Value) -> String {
    safe_value_with(value, Truthiness::default())
}

/// Like [`safe_value`] with an explicit truthiness policy.
pub fn safe_value_with(value: &Value, policy: Truthiness) -> String {
    if value.is_null() {
        "El valor es None (ausencia intencional de datos)".to_string()
    } else if policy.is_falsy(value) {
        format!("El valor es falsy pero definido: {}", value)
    } else {
        format!("El valor es válido: {}", value)
    }
}
