//! Error types for date construction and conversion.

/// Error type for all fallible date operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The date lies outside the span covered by the calendar tables.
    #[error("year {year} is outside the range covered by the calendar tables")]
    OutOfRange {
        /// Year of the rejected date, in the calendar it was given in.
        year: i32,
    },

    /// A month number (or the magnitude of a signed lunisolar month) is
    /// outside `1..=12`.
    #[error("invalid month: {month} (magnitude must be 1..=12)")]
    InvalidMonth {
        /// The month number that was provided.
        month: i32,
    },

    /// A day number is outside the valid range of its month.
    #[error("invalid day: {day} (must be 1..={max})")]
    InvalidDay {
        /// The day number that was provided.
        day: i32,
        /// Length of the month the day was checked against.
        max: u32,
    },

    /// An intercalary month was requested for a year that does not have
    /// one of that number.
    #[error("lunisolar year {year} has no leap month {month}")]
    MissingLeapMonth {
        /// The lunisolar year.
        year: i32,
        /// Magnitude of the requested intercalary month.
        month: u32,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The date is valid in itself but not covered by the tables.
    OutOfRange,
    /// A month or day field does not describe an existing date.
    InvalidField,
}

impl Error {
    /// Returns whether the error is a range error or a field error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::InvalidMonth { .. } | Error::InvalidDay { .. } | Error::MissingLeapMonth { .. } => {
                ErrorKind::InvalidField
            }
        }
    }
}
