//! Float rendering in the host's default text form.
//!
//! Floats are printed with the shortest digit string that round-trips,
//! always showing that they are floats:
//! - `5.0`, `0.5`, `12.34`, `1000000000000000.0` (fixed notation)
//! - `1e+16`, `1.5e-07` (scientific, decimal exponent outside `[-4, 16)`)
//! - `nan`, `inf`, `-inf`

/// Smallest decimal exponent still printed in fixed notation.
const FIXED_MIN_EXPONENT: i32 = -4;

/// First decimal exponent printed in scientific notation.
const FIXED_MAX_EXPONENT: i32 = 16;

/// Largest magnitude every integer below which converts to `f64` exactly.
const EXACT_INT_LIMIT: u64 = 1 << 53;

/// Quotient bits kept before the final rounding: 53 significand bits, a
/// round bit and room for a sticky bit below it.
const QUOTIENT_BITS: i32 = 56;

/// Formats a float the way the host language's `repr` does.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3" or "-5e-7".
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (FIXED_MIN_EXPONENT..FIXED_MAX_EXPONENT).contains(&exponent) {
        fixed_notation(&digits, exponent)
    } else {
        scientific_notation(&digits, exponent)
    };

    format!("{}{}", sign, body)
}

/// Divides two integers with a single rounding to the nearest float.
///
/// Converting each operand to `f64` first rounds twice once a magnitude
/// exceeds 2^53; here the exact quotient is rounded once instead.
/// `divisor` must not be zero.
pub fn divide_ints(dividend: i64, divisor: i64) -> f64 {
    let (n, d) = (dividend.unsigned_abs(), divisor.unsigned_abs());
    if n <= EXACT_INT_LIMIT && d <= EXACT_INT_LIMIT {
        return dividend as f64 / divisor as f64;
    }

    let (n, d) = (u128::from(n), u128::from(d));
    let bits = |x: u128| (128 - x.leading_zeros()) as i32;
    // Scale the dividend so the integer quotient carries at least
    // QUOTIENT_BITS - 1 bits; n << shift stays below 2^120.
    let shift = (QUOTIENT_BITS + bits(d) - bits(n)).max(0) as u32;
    let scaled = n << shift;
    let mut quotient = scaled / d;
    if scaled % d != 0 {
        // Sticky bit: lies below the round bit, so ties break correctly.
        quotient |= 1;
    }

    let magnitude = quotient as f64 / (1u128 << shift) as f64;
    if (dividend < 0) != (divisor < 0) {
        -magnitude
    } else {
        magnitude
    }
}

/// Places the decimal point in `digits` for a value of `d.ddd * 10^exponent`.
fn fixed_notation(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let padding = "0".repeat(int_len - digits.len());
        format!("{}{}.0", digits, padding)
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn scientific_notation(digits: &str, exponent: i32) -> String {
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{}e{}{:02}", lead, exp_sign, exponent.abs())
    } else {
        format!("{}.{}e{}{:02}", lead, rest, exp_sign, exponent.abs())
    }
}
