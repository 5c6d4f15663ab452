//! Utility modules for value rendering.

pub mod number;

pub use number::{divide_ints, format_float};
