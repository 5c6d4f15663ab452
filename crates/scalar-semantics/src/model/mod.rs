//! Data model types.
//!
//! - Values (the dynamic value sum type and its kinds)
//! - Truthiness (falsy/truthy policy)
//! - Currencies (closed code set and symbol table)

pub mod currency;
pub mod truthiness;
pub mod value;

pub use currency::{Currency, CURRENCY_SYMBOLS};
pub use truthiness::{is_falsy, is_truthy, Truthiness};
pub use value::{Kind, Value};
