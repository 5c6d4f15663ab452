//! Age in days.

use tracing::debug;

use crate::consts::DAYS_PER_YEAR;
use crate::error::ArgumentError;
use crate::model::Value;

/// Converts an age in years to days, ignoring leap years.
///
/// Fractional years are truncated toward zero after multiplying, so 1.5
/// years is 547 days.
///
/// # Errors
///
/// - [`ArgumentError::NotNumeric`] for anything but `Int` or `Float`
/// - [`ArgumentError::NegativeYears`] for values below zero
/// - [`ArgumentError::NonFiniteYears`] for NaN and the infinities
/// - [`ArgumentError::Overflow`] when the day count exceeds `u64`
pub fn age_in_days(years: &Value) -> Result<u64, ArgumentError> {
    let result = match *years {
        Value::Int(n) if n < 0 => Err(ArgumentError::NegativeYears { years: n as f64 }),
        Value::Int(n) => (n as u64)
            .checked_mul(DAYS_PER_YEAR)
            .ok_or(ArgumentError::Overflow { years: n as f64 }),
        Value::Float(f) if !f.is_finite() => Err(ArgumentError::NonFiniteYears { years: f }),
        Value::Float(f) if f < 0.0 => Err(ArgumentError::NegativeYears { years: f }),
        Value::Float(f) => {
            let days = (f * DAYS_PER_YEAR as f64).trunc();
            // 2^64 is exactly representable, so anything below it fits.
            if days < u64::MAX as f64 {
                Ok(days as u64)
            } else {
                Err(ArgumentError::Overflow { years: f })
            }
        }
        ref other => Err(ArgumentError::NotNumeric { found: other.kind() }),
    };

    if let Err(err) = &result {
        debug!(error = %err, "age_in_days rejected input");
    }
    result
}
