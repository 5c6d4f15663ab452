//! Division that reports failures as text.

use tracing::debug;

use crate::error::DivisionError;
use crate::model::Value;
use crate::util::{divide_ints, format_float};
use crate::validate::numeric_operands;

/// Divides two dynamic values using float division.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. either operand is not a number
/// 2. the divisor is zero
/// 3. either operand is NaN
///
/// Two integers are divided exactly and rounded once, so large operands
/// do not lose precision before the division.
pub fn try_divide(dividend: &Value, divisor: &Value) -> Result<f64, DivisionError> {
    let (a, b) = numeric_operands(dividend, divisor)?;

    if b == 0.0 {
        debug!(dividend = %dividend, "rejected division by zero");
        return Err(DivisionError::DivideByZero);
    }
    if a.is_nan() || b.is_nan() {
        debug!("rejected NaN division operand");
        return Err(DivisionError::OperandIsNan);
    }

    match (dividend, divisor) {
        (Value::Int(a), Value::Int(b)) => Ok(divide_ints(*a, *b)),
        _ => Ok(a / b),
    }
}

/// Divides and describes the outcome.
///
/// Returns `"El resultado de dividir {dividend} entre {divisor} es {result}"`
/// on success, with the quotient always written as a float (`10 / 2` gives
/// `5.0`). On failure returns the [`DivisionError`] message.
pub fn safe_divide(dividend: &Value, divisor: &Value) -> String {
    match try_divide(dividend, divisor) {
        Ok(quotient) => format!(
            "El resultado de dividir {} entre {} es {}",
            dividend,
            divisor,
            format_float(quotient)
        ),
        Err(err) => err.to_string(),
    }
}
