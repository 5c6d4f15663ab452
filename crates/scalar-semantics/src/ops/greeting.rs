//! Personal greeting.

use crate::error::ArgumentError;
use crate::validate::validate_name;

/// Builds `"Hola, {first} {last}!"`.
///
/// Both names must contain something besides whitespace. The names are
/// inserted as given, surrounding whitespace included.
pub fn greeting(first: &str, last: &str) -> Result<String, ArgumentError> {
    validate_name("first name", first)?;
    validate_name("last name", last)?;
    Ok(format!("Hola, {} {}!", first, last))
}
