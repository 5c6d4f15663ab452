//! Scalar semantics: the value rules of a dynamically typed scripting language.
//!
//! This crate pins down how a dynamic language treats its basic values:
//! truthiness, the null marker, numeric coercion and NaN, runtime type names,
//! default text rendering, money formatting and key-order insensitive
//! equality. Every operation is a small pure function over a [`Value`].
//!
//! # Quick Start
//!
//! ```rust
//! use scalar_semantics::{
//!     age_in_days, canonical_equal, falsy_report, format_cents, safe_divide, type_check, Value,
//! };
//!
//! assert_eq!(age_in_days(&Value::Int(10)).unwrap(), 3650);
//! assert_eq!(type_check(&Value::Int(10), "int"), "La variable es int: True");
//! assert_eq!(falsy_report(&Value::from("")), "El elemento es falsy: true");
//! assert_eq!(
//!     safe_divide(&Value::Int(10), &Value::Int(2)),
//!     "El resultado de dividir 10 entre 2 es 5.0"
//! );
//! assert_eq!(format_cents(&Value::Int(1234), "USD"), "$12.34");
//!
//! let a = Value::dict([("a", Value::Int(1)), ("b", Value::Int(2))]);
//! let b = Value::dict([("b", Value::Int(2)), ("a", Value::Int(1))]);
//! assert!(canonical_equal(&a, &b));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Dynamic values, kinds, truthiness policy, currencies
//! - [`ops`]: The value operations
//! - [`canonical`]: Canonical text form, equality and fingerprints
//! - [`validate`]: Argument validation shared by the operations
//! - [`util`]: Float rendering
//! - [`error`]: Error types
//! - [`consts`]: Conversion constants
//!
//! # Truthiness
//!
//! Empty lists and dicts are falsy and NaN is truthy under the default
//! [`Truthiness::Python`] policy. [`Truthiness::JavaScript`] flips both; the
//! `*_with` operations take the policy explicitly.
//!
//! # Logging
//!
//! Rejected inputs are reported through [`tracing`] at debug level. The crate
//! never installs a subscriber.

pub mod canonical;
pub mod consts;
pub mod error;
pub mod model;
pub mod ops;
pub mod util;
pub mod validate;

// Re-export commonly used items at crate root
pub use canonical::{canonical_equal, canonical_fingerprint, to_canonical_string};
pub use error::{ArgumentError, DivisionError, MoneyError};
pub use model::{is_falsy, is_truthy, Currency, Kind, Truthiness, Value, CURRENCY_SYMBOLS};
pub use ops::{
    age_in_days, falsy_report, falsy_report_with, format_cents, format_minor_units, greeting,
    safe_divide, safe_value, safe_value_with, try_divide, try_format_cents, type_check,
};
pub use util::{divide_ints, format_float};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
