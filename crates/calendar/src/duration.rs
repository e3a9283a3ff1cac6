//! Mixed-unit durations.

use crate::time::MAX_PRECISION;

/// Signed sub-second component of a [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DurationMicrosecond {
    value: i64,
    precision: u8,
}

impl DurationMicrosecond {
    /// Creates a sub-second component; `precision` is capped at 6.
    pub fn new(value: i64, precision: u8) -> Self {
        Self {
            value,
            precision: precision.min(MAX_PRECISION),
        }
    }

    /// Returns the signed microsecond count.
    pub fn value(self) -> i64 {
        self.value
    }

    /// Returns the display precision (0..=6).
    pub fn precision(self) -> u8 {
        self.precision
    }
}

/// A duration expressed in calendar and clock units.
///
/// Years and months have no fixed length, so a duration is kept as separate
/// fields rather than reduced to a single scalar. Use the builder methods to
/// set individual units.
///
/// # Example
///
/// ```
/// use isocal_calendar::Duration;
///
/// let duration = Duration::new().with_month(1).with_hour(30);
/// assert_eq!(duration.month(), 1);
/// assert!(duration.has_calendar_units());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    year: i64,
    month: i64,
    week: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    microsecond: DurationMicrosecond,
}

impl Duration {
    /// The empty duration.
    pub const ZERO: Self = Self {
        year: 0,
        month: 0,
        week: 0,
        day: 0,
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: DurationMicrosecond {
            value: 0,
            precision: 0,
        },
    };

    /// Creates an empty duration.
    pub fn new() -> Self {
        Self::ZERO
    }

    /// Sets the years.
    pub fn with_year(mut self, year: i64) -> Self {
        self.year = year;
        self
    }

    /// Sets the months.
    pub fn with_month(mut self, month: i64) -> Self {
        self.month = month;
        self
    }

    /// Sets the weeks.
    pub fn with_week(mut self, week: i64) -> Self {
        self.week = week;
        self
    }

    /// Sets the days.
    pub fn with_day(mut self, day: i64) -> Self {
        self.day = day;
        self
    }

    /// Sets the hours.
    pub fn with_hour(mut self, hour: i64) -> Self {
        self.hour = hour;
        self
    }

    /// Sets the minutes.
    pub fn with_minute(mut self, minute: i64) -> Self {
        self.minute = minute;
        self
    }

    /// Sets the seconds.
    pub fn with_second(mut self, second: i64) -> Self {
        self.second = second;
        self
    }

    /// Sets the microseconds and their display precision (capped at 6).
    pub fn with_microsecond(mut self, value: i64, precision: u8) -> Self {
        self.microsecond = DurationMicrosecond::new(value, precision);
        self
    }

    // --- Accessors ---

    /// Returns the years.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Returns the months.
    pub fn month(&self) -> i64 {
        self.month
    }

    /// Returns the weeks.
    pub fn week(&self) -> i64 {
        self.week
    }

    /// Returns the days.
    pub fn day(&self) -> i64 {
        self.day
    }

    /// Returns the hours.
    pub fn hour(&self) -> i64 {
        self.hour
    }

    /// Returns the minutes.
    pub fn minute(&self) -> i64 {
        self.minute
    }

    /// Returns the seconds.
    pub fn second(&self) -> i64 {
        self.second
    }

    /// Returns the sub-second component.
    pub fn microsecond(&self) -> DurationMicrosecond {
        self.microsecond
    }

    /// Returns whether every unit is zero.
    pub fn is_zero(&self) -> bool {
        !self.has_calendar_units() && !self.has_time_units()
    }

    /// Returns whether any of years, months, weeks or days is non-zero.
    pub fn has_calendar_units(&self) -> bool {
        self.year != 0 || self.month != 0 || self.week != 0 || self.day != 0
    }

    /// Returns whether any of hours, minutes, seconds or microseconds is
    /// non-zero.
    pub fn has_time_units(&self) -> bool {
        self.hour != 0 || self.minute != 0 || self.second != 0 || self.microsecond.value != 0
    }

    /// Returns the name of the first non-zero calendar unit, if any.
    pub fn first_calendar_unit(&self) -> Option<&'static str> {
        [
            ("year", self.year),
            ("month", self.month),
            ("week", self.week),
            ("day", self.day),
        ]
        .into_iter()
        .find_map(|(name, value)| (value != 0).then_some(name))
    }

    /// Returns the name of the first non-zero clock unit, if any.
    pub fn first_time_unit(&self) -> Option<&'static str> {
        [
            ("hour", self.hour),
            ("minute", self.minute),
            ("second", self.second),
            ("microsecond", self.microsecond.value),
        ]
        .into_iter()
        .find_map(|(name, value)| (value != 0).then_some(name))
    }

    /// Returns the duration with every unit negated, microseconds included.
    ///
    /// `i64::MIN` saturates to `i64::MAX`.
    pub fn negate(&self) -> Self {
        Self {
            year: self.year.saturating_neg(),
            month: self.month.saturating_neg(),
            week: self.week.saturating_neg(),
            day: self.day.saturating_neg(),
            hour: self.hour.saturating_neg(),
            minute: self.minute.saturating_neg(),
            second: self.second.saturating_neg(),
            microsecond: DurationMicrosecond {
                value: self.microsecond.value.saturating_neg(),
                precision: self.microsecond.precision,
            },
        }
    }
}

impl std::ops::Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        self.negate()
    }
}
