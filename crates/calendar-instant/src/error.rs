//! Error types for calendar-instant operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The input does not resolve to a valid calendar instant.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Checked arithmetic would leave the supported range.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A unit, boundary, or week-start name that is not recognized.
    #[error("Unrecognized name: {0}")]
    UnrecognizedName(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
