//! The value operations.
//!
//! Every operation is pure. [`age_in_days`] and [`greeting`] signal bad input
//! through `Err`; [`safe_divide`] and [`format_cents`] never fail and describe
//! errors in the returned text, with typed `try_*` counterparts.

pub mod age;
pub mod division;
pub mod greeting;
pub mod inspect;
pub mod money;

pub use age::age_in_days;
pub use division::{safe_divide, try_divide};
pub use greeting::greeting;
pub use inspect::{falsy_report, falsy_report_with, safe_value, safe_value_with, type_check};
pub use money::{format_cents, format_minor_units, try_format_cents};
