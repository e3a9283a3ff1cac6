//! Wall-clock time of day with display precision.

use crate::error::CalendarError;
use crate::fraction::{self, DayFraction};

/// Largest number of sub-second digits tracked.
pub const MAX_PRECISION: u8 = 6;

/// Sub-second part of a clock time.
///
/// `precision` is the number of sub-second digits that are significant for
/// display and is independent of the magnitude of `value`: `{0, 3}` renders
/// as `.000` while `{0, 0}` renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Microsecond {
    value: u32,
    precision: u8,
}

impl Microsecond {
    /// Zero microseconds, no sub-second digits.
    pub const ZERO: Self = Self {
        value: 0,
        precision: 0,
    };

    /// Creates a new `Microsecond`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if `value` exceeds 999_999 or
    /// `precision` exceeds 6.
    pub fn new(value: u32, precision: u8) -> Result<Self, CalendarError> {
        if value > 999_999 || precision > MAX_PRECISION {
            return Err(CalendarError::InvalidTime {
                hour: 0,
                minute: 0,
                second: 0,
                microsecond: value,
                precision,
            });
        }
        Ok(Self { value, precision })
    }

    pub(crate) fn new_unchecked(value: u32, precision: u8) -> Self {
        Self { value, precision }
    }

    /// Returns the microsecond value (0..=999_999).
    pub fn value(self) -> u32 {
        self.value
    }

    /// Returns the display precision (0..=6).
    pub fn precision(self) -> u8 {
        self.precision
    }

    /// Returns the same value shown with `precision` digits, capped at 6.
    pub fn with_precision(self, precision: u8) -> Self {
        Self {
            value: self.value,
            precision: precision.min(MAX_PRECISION),
        }
    }
}

/// Returns whether the fields describe a time of day (no leap seconds).
pub fn is_valid_time(hour: u8, minute: u8, second: u8, microsecond: u32, precision: u8) -> bool {
    hour <= 23 && minute <= 59 && second <= 59 && microsecond <= 999_999 && precision <= MAX_PRECISION
}

/// A validated time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: Microsecond,
}

impl ClockTime {
    /// `00:00:00` with no sub-second digits.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: Microsecond::ZERO,
    };

    /// Creates a new `ClockTime`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if any field is out of range.
    pub fn new(
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: Microsecond,
    ) -> Result<Self, CalendarError> {
        if !is_valid_time(
            hour,
            minute,
            second,
            microsecond.value,
            microsecond.precision,
        ) {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
                microsecond: microsecond.value,
                precision: microsecond.precision,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            microsecond,
        })
    }

    /// Creates a whole-second `ClockTime` with precision 0.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if any field is out of range.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        Self::new(hour, minute, second, Microsecond::ZERO)
    }

    pub(crate) fn new_unchecked(hour: u8, minute: u8, second: u8, microsecond: Microsecond) -> Self {
        Self {
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the sub-second part.
    pub fn microsecond(self) -> Microsecond {
        self.microsecond
    }

    /// Returns the same instant of the day shown with `precision` digits.
    pub fn with_precision(self, precision: u8) -> Self {
        Self {
            microsecond: self.microsecond.with_precision(precision),
            ..self
        }
    }

    /// Returns this time as a fraction of the day in microseconds.
    pub fn to_day_fraction(self) -> DayFraction {
        fraction::time_to_day_fraction(self)
    }

    /// Returns the time of day a fraction points at, with precision 6.
    pub fn from_day_fraction(fraction: DayFraction) -> Self {
        fraction::time_from_day_fraction(fraction)
    }
}
