//! Error types for the isocal-calendar crate.

/// Error type for all fallible operations in the isocal-calendar crate.
///
/// This enum covers validation failures for calendar dates, clock times
/// and day fractions, plus the two arithmetic limits of the engine: the
/// supported ISO day-count window and the width of the integers used for
/// exact fraction arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a `(year, month, day)` triple is not a valid date, or the
    /// year lies outside -9999..=9999.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u8,
        /// The day that was provided.
        day: u8,
    },

    /// Returned when clock fields are out of range (leap seconds included).
    #[error("invalid time: {hour:02}:{minute:02}:{second:02} (microsecond {microsecond}, precision {precision})")]
    InvalidTime {
        /// The hour that was provided.
        hour: u8,
        /// The minute that was provided.
        minute: u8,
        /// The second that was provided.
        second: u8,
        /// The microsecond value that was provided.
        microsecond: u32,
        /// The sub-second precision that was provided.
        precision: u8,
    },

    /// Returned when a day fraction is not in `[0, denominator)` or its
    /// denominator is not positive.
    #[error("invalid day fraction: {numerator}/{denominator}")]
    InvalidDayFraction {
        /// The numerator that was provided.
        numerator: i64,
        /// The denominator that was provided.
        denominator: i64,
    },

    /// Returned when an ISO day count maps outside years -9999..=9999.
    #[error("iso day count {days} is outside {min}..={max}")]
    DayCountOutOfRange {
        /// The day count that was provided.
        days: i64,
        /// Smallest supported day count (-9999-01-01).
        min: i64,
        /// Largest supported day count (9999-12-31).
        max: i64,
    },

    /// Returned when exact fraction arithmetic does not fit in 64 bits.
    #[error("day fraction arithmetic overflowed")]
    FractionOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2015,
            month: 1,
            day: 32,
        };
        assert_eq!(err.to_string(), "invalid date: 2015-01-32");
    }

    #[test]
    fn error_invalid_date_negative_year() {
        let err = CalendarError::InvalidDate {
            year: -99,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid date: -99-02-30");
    }

    #[test]
    fn error_invalid_time() {
        let err = CalendarError::InvalidTime {
            hour: 23,
            minute: 59,
            second: 60,
            microsecond: 0,
            precision: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid time: 23:59:60 (microsecond 0, precision 0)"
        );
    }

    #[test]
    fn error_day_count_out_of_range() {
        let err = CalendarError::DayCountOutOfRange {
            days: 4_000_000,
            min: -3_652_059,
            max: 3_652_424,
        };
        assert_eq!(
            err.to_string(),
            "iso day count 4000000 is outside -3652059..=3652424"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidDayFraction {
            numerator: 5,
            denominator: 4,
        };
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, CalendarError::FractionOverflow);
    }
}
