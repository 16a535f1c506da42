//! Error handling for fingerbox
//!
//! Unit parsing errors live here since every layer that accepts user
//! lengths needs them. All error types use `thiserror`.

use thiserror::Error;

/// Length parsing error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Unit label not recognized
    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    /// Value is not a number
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    /// Malformed fraction such as "1/2/3"
    #[error("Invalid fraction format: '{0}'")]
    InvalidFraction(String),

    /// Fraction with a zero denominator
    #[error("Division by zero in '{0}'")]
    DivisionByZero(String),
}

/// Main error type for fingerbox
#[derive(Error, Debug)]
pub enum Error {
    /// Unit error
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    pub fn is_unit_error(&self) -> bool {
        matches!(self, Error::Unit(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
