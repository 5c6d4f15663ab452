//! Error types for the value operations.
//!
//! [`ArgumentError`] is returned through `Err` by operations that reject bad
//! input outright. [`DivisionError`] and [`MoneyError`] back the operations
//! that report failure as text: their `Display` output is exactly the message
//! those operations return.

use thiserror::Error;

use crate::model::Kind;

/// Invalid argument passed to an operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("expected a number of years, found {found}")]
    NotNumeric { found: Kind },

    #[error("years must not be negative, got {years}")]
    NegativeYears { years: f64 },

    #[error("years must be finite, got {years}")]
    NonFiniteYears { years: f64 },

    #[error("{years} years expressed in days does not fit in 64 bits")]
    Overflow { years: f64 },

    #[error("{field} must not be empty or whitespace")]
    EmptyName { field: &'static str },
}

/// Reason a division was refused, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivisionError {
    #[error("Error: Uno de los valores no es un número")]
    NotNumeric,

    #[error("Error: No se puede dividir por 0")]
    DivideByZero,

    #[error("Error: Uno de los valores es NaN")]
    OperandIsNan,
}

/// Reason a money amount could not be formatted, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("Valor invalido")]
    InvalidAmount,

    #[error("Codigo de moneda invalido")]
    InvalidCurrencyCode,
}
