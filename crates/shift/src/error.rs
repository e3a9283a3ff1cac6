//! Error types for the isocal-shift crate.

use isocal_calendar::CalendarError;

/// Error type for all shift operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShiftError {
    /// Returned when a date is shifted by a clock unit, or a time by a
    /// calendar unit. This is a caller mistake and is never retried.
    #[error("cannot shift a {target} by a non-zero {unit} component")]
    UnsupportedUnitCombination {
        /// The kind of value being shifted (`date` or `time`).
        target: String,
        /// The first offending duration unit.
        unit: String,
    },

    /// Returned when combining the duration's units overflows 64 bits.
    #[error("duration is too large to apply")]
    Overflow,

    /// Returned when the shifted value falls outside the supported years.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl ShiftError {
    pub(crate) fn unsupported(target: &str, unit: &str) -> Self {
        ShiftError::UnsupportedUnitCombination {
            target: target.to_string(),
            unit: unit.to_string(),
        }
    }
}
