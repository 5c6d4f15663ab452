//! Truthiness rules.
//!
//! Two scripting languages disagree on a few values:
//!
//! | value            | `Python` (default) | `JavaScript` |
//! |------------------|--------------------|--------------|
//! | `[]`, `{}`       | falsy              | truthy       |
//! | `NaN`            | truthy             | falsy        |
//!
//! Both treat the null marker, `false`, `0`, `0.0`, `-0.0` and empty text as
//! falsy, and everything else as truthy. Every operation that needs
//! truthiness goes through [`Truthiness::is_falsy`].

use crate::model::Value;

/// Policy deciding which values count as falsy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Truthiness {
    /// Empty composites are falsy, NaN is truthy.
    #[default]
    Python,
    /// Empty composites are truthy, NaN is falsy.
    JavaScript,
}

impl Truthiness {
    /// Returns true if `value` is treated as false in a conditional.
    pub fn is_falsy(self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0 || (self == Truthiness::JavaScript && f.is_nan()),
            Value::Text(s) => s.is_empty(),
            Value::List(items) => self == Truthiness::Python && items.is_empty(),
            Value::Dict(entries) => self == Truthiness::Python && entries.is_empty(),
        }
    }
}

/// Falsy check under the default [`Truthiness`] policy.
pub fn is_falsy(value: &Value) -> bool {
    Truthiness::default().is_falsy(value)
}

pub fn is_truthy(value: &Value) -> bool {
    !is_falsy(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_falsy_values() {
        let falsy = [
            Value::Null,
            Value::Bool(false),
            Value::Int(0),
            Value::Float(0.0),
            Value::Float(-0.0),
            Value::from(""),
        ];
        for value in &falsy {
            assert!(Truthiness::Python.is_falsy(value), "{:?} should be falsy", value);
            assert!(Truthiness::JavaScript.is_falsy(value), "{:?} should be falsy", value);
        }
    }

    #[test]
    fn test_shared_truthy_values() {
        let truthy = [
            Value::Bool(true),
            Value::Int(-1),
            Value::Float(0.5),
            Value::Float(f64::INFINITY),
            Value::from("Hola"),
            Value::from(" "),
            Value::from("0"),
            Value::List(vec![Value::Null]),
            Value::dict([("a", Value::Int(0))]),
        ];
        for value in &truthy {
            assert!(!Truthiness::Python.is_falsy(value), "{:?} should be truthy", value);
            assert!(!Truthiness::JavaScript.is_falsy(value), "{:?} should be truthy", value);
        }
    }

    #[test]
    fn test_empty_composites_follow_policy() {
        let empty_list = Value::List(vec![]);
        let empty_dict = Value::Dict(vec![]);

        assert!(is_falsy(&empty_list));
        assert!(is_falsy(&empty_dict));

        assert!(!Truthiness::JavaScript.is_falsy(&empty_list));
        assert!(!Truthiness::JavaScript.is_falsy(&empty_dict));
    }

    #[test]
    fn test_nan_follows_policy() {
        let nan = Value::Float(f64::NAN);
        assert!(is_truthy(&nan));
        assert!(Truthiness::JavaScript.is_falsy(&nan));
    }

    #[test]
    fn test_default_policy_is_python() {
        assert_eq!(Truthiness::default(), Truthiness::Python);
    }
}
