//! Date and time of day without an offset.

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::fraction::{self, IsoDays};
use crate::time::ClockTime;

/// A calendar date paired with a time of day, with no UTC offset attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NaiveDateTime {
    date: CalendarDate,
    time: ClockTime,
}

impl NaiveDateTime {
    /// Pairs a date with a time.
    pub fn new(date: CalendarDate, time: ClockTime) -> Self {
        Self { date, time }
    }

    /// Returns the date part.
    pub fn date(self) -> CalendarDate {
        self.date
    }

    /// Returns the time part.
    pub fn time(self) -> ClockTime {
        self.time
    }

    /// Returns this value as a linear instant.
    pub fn to_iso_days(self) -> IsoDays {
        fraction::naive_datetime_to_iso_days(self)
    }

    /// Rebuilds a date and time from a linear instant (precision 6).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayCountOutOfRange`] outside the supported
    /// years.
    pub fn from_iso_days(iso_days: IsoDays) -> Result<Self, CalendarError> {
        fraction::naive_datetime_from_iso_days(iso_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Microsecond;

    #[test]
    fn accessors() {
        let date = CalendarDate::new(2016, 1, 3).unwrap();
        let time = ClockTime::from_hms(6, 0, 0).unwrap();
        let datetime = NaiveDateTime::new(date, time);
        assert_eq!(datetime.date(), date);
        assert_eq!(datetime.time(), time);
    }

    #[test]
    fn ord_compares_date_first() {
        let early = NaiveDateTime::new(
            CalendarDate::new(2016, 1, 3).unwrap(),
            ClockTime::from_hms(23, 0, 0).unwrap(),
        );
        let late = NaiveDateTime::new(
            CalendarDate::new(2016, 1, 4).unwrap(),
            ClockTime::from_hms(1, 0, 0).unwrap(),
        );
        assert!(early < late);
    }

    #[test]
    fn iso_days_roundtrip() {
        let datetime = NaiveDateTime::new(
            CalendarDate::new(-44, 3, 15).unwrap(),
            ClockTime::new(12, 30, 0, Microsecond::new(250_000, 6).unwrap()).unwrap(),
        );
        assert_eq!(
            NaiveDateTime::from_iso_days(datetime.to_iso_days()).unwrap(),
            datetime
        );
    }
}
