//! Error types for conversion and date-entry parsing.

use thiserror::Error;

/// Errors that can occur when constructing or converting a calendar date.
///
/// Every public conversion entry point reports invalid input through this
/// type instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConversionError {
    #[error("invalid gregorian date: {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u32, day: u32 },

    #[error("invalid hijri date: {year}-{month:02}-{day:02}")]
    InvalidHijriDate { year: i32, month: u32, day: u32 },

    #[error("julian day {jdn} is before the hijri epoch")]
    BeforeHijriEpoch { jdn: i64 },

    #[error("julian day {jdn} is out of the supported range")]
    OutOfRange { jdn: i64 },
}

/// Errors that can occur when parsing a user-entered date string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseError {
    #[error("empty date string")]
    EmptyInput,

    #[error("unexpected character at position {position}: found '{found}'")]
    UnexpectedChar { position: usize, found: char },

    #[error("missing {expected} component")]
    MissingComponent { expected: &'static str },

    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },

    #[error("number too large at position {position}")]
    NumberTooLarge { position: usize },

    #[error(transparent)]
    Invalid(#[from] ConversionError),
}
