//! Argument validation shared by the operations.
//!
//! Each check returns the validated, unwrapped input so callers do not
//! inspect the original [`Value`] again. Rejections are logged at debug level.

use tracing::debug;

use crate::error::{ArgumentError, DivisionError, MoneyError};
use crate::model::{Currency, Value};

/// Checks that a name is non-empty once surrounding whitespace is removed.
///
/// Whitespace is the Unicode `White_Space` set plus the ASCII information
/// separators U+001C..=U+001F.
pub fn validate_name(field: &'static str, name: &str) -> Result<(), ArgumentError> {
    if name.chars().all(is_name_whitespace) {
        debug!(field, "rejected blank name");
        return Err(ArgumentError::EmptyName { field });
    }
    Ok(())
}

fn is_name_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Extracts both division operands as floats.
///
/// Fails with [`DivisionError::NotNumeric`] unless both are `Int` or `Float`.
/// NaN passes; the caller decides where it ranks against other failures.
pub fn numeric_operands(dividend: &Value, divisor: &Value) -> Result<(f64, f64), DivisionError> {
    match (dividend.as_f64(), divisor.as_f64()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => {
            debug!(
                dividend = %dividend.kind(),
                divisor = %divisor.kind(),
                "rejected non-numeric division operand"
            );
            Err(DivisionError::NotNumeric)
        }
    }
}

/// Checks that an amount is a non-negative whole number of minor units.
///
/// Only `Int` qualifies: floats are refused even when integral, and booleans
/// are not numbers.
pub fn validate_minor_units(amount: &Value) -> Result<u64, MoneyError> {
    amount
        .as_i64()
        .and_then(|n| u64::try_from(n).ok())
        .ok_or_else(|| {
            debug!(kind = %amount.kind(), amount = %amount, "rejected money amount");
            MoneyError::InvalidAmount
        })
}

/// Resolves a currency code from the closed set of supported currencies.
pub fn validate_currency_code(code: &str) -> Result<Currency, MoneyError> {
    Currency::from_code(code).ok_or_else(|| {
        debug!(code, "rejected unknown currency code");
        MoneyError::InvalidCurrencyCode
    })
}
