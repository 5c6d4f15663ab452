//! Minor-unit money formatting.

use crate::consts::MINOR_UNITS_PER_MAJOR;
use crate::error::MoneyError;
use crate::model::{Currency, Value};
use crate::validate::{validate_currency_code, validate_minor_units};

/// Formats a whole number of minor units as `{symbol}{units}.{cents}`.
///
/// Uses integer arithmetic, so every `u64` amount is exact.
pub fn format_minor_units(amount: u64, currency: Currency) -> String {
    format!(
        "{}{}.{:02}",
        currency.symbol(),
        amount / MINOR_UNITS_PER_MAJOR,
        amount % MINOR_UNITS_PER_MAJOR
    )
}

/// Validates the amount, then the currency code, then formats.
pub fn try_format_cents(cents: &Value, code: &str) -> Result<String, MoneyError> {
    let amount = validate_minor_units(cents)?;
    let currency = validate_currency_code(code)?;
    Ok(format_minor_units(amount, currency))
}

/// Formats cents in the given currency, e.g. `1234` in `"USD"` is `"$12.34"`.
///
/// Returns `"Valor invalido"` unless `cents` is a non-negative integer, then
/// `"Codigo de moneda invalido"` for an unsupported code.
pub fn format_cents(cents: &Value, code: &str) -> String {
    try_format_cents(cents, code).unwrap_or_else(|err| err.to_string())
}
