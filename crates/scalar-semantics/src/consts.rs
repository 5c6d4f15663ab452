//! Fixed conversion constants.

/// Days counted per year of age. Leap years are ignored.
pub const DAYS_PER_YEAR: u64 = 365;

/// Minor currency units (cents) per major unit.
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;
