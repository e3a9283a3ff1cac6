//! Error types for the isocal-iso8601 crate.

/// Error type for every parse entry point.
///
/// Structural mismatches ([`ParseError::InvalidFormat`]) are kept apart from
/// input that scans correctly but names an impossible date or time, so
/// callers can tell `2015-105` from `2015-01-32`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Returned when the input does not match the date, time or offset grammar.
    #[error("invalid format")]
    InvalidFormat,

    /// Returned when the text scans as a date but the date does not exist.
    #[error("invalid date")]
    InvalidDate,

    /// Returned when the text scans as a time but the time does not exist.
    #[error("invalid time")]
    InvalidTime,

    /// Returned when a UTC datetime carries no offset.
    #[error("missing offset")]
    MissingOffset,

    /// Returned when a duration does not start with `P`, `+P` or `-P`, or has
    /// nothing after the designator.
    #[error("invalid duration")]
    InvalidDuration,

    /// Returned when a duration's date part holds an unknown, repeated or
    /// out-of-order unit.
    #[error("invalid date component: {component}")]
    InvalidDateComponent {
        /// The unparsed remainder starting at the offending component.
        component: String,
    },

    /// Returned when a duration's time part holds an unknown, repeated or
    /// out-of-order unit, or a misplaced fraction.
    #[error("invalid time component: {component}")]
    InvalidTimeComponent {
        /// The unparsed remainder starting at the offending component.
        component: String,
    },
}

/// Error type for the formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Returned when the combined UTC and standard offset is a day or more.
    #[error("offset of {seconds} seconds cannot be written as +HH:MM")]
    OffsetOutOfRange {
        /// The combined offset in seconds.
        seconds: i64,
    },
}
