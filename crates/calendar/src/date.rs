//! Proleptic Gregorian date with year context.

use crate::error::CalendarError;
use crate::gregorian;
use crate::weekday::{DayOfWeek, Era, StartingOn, Weekday};

/// A validated date in the proleptic Gregorian calendar.
///
/// The year lies in -9999..=9999 and the day never exceeds the length of
/// its month. Dates order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the year is outside
    /// -9999..=9999, the month outside 1..=12, or the day outside the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !gregorian::is_valid_date(year, month, day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `CalendarDate` whose fields were already validated.
    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a `CalendarDate` from a day count since `0000-01-01`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayCountOutOfRange`] outside the supported
    /// years.
    pub fn from_iso_days(days: i64) -> Result<Self, CalendarError> {
        gregorian::date_from_iso_days(days)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the number of days since `0000-01-01`.
    pub fn iso_days(self) -> i64 {
        gregorian::iso_days_unchecked(self.year, self.month, self.day)
    }

    /// Returns whether this date falls in a leap year.
    pub fn in_leap_year(self) -> bool {
        gregorian::is_leap_year(self.year)
    }

    /// Returns the length of this date's month.
    pub fn days_in_month(self) -> u8 {
        gregorian::days_in_month(self.year, self.month)
    }

    /// Returns the weekday number counted from `starting_on`.
    pub fn day_of_week(self, starting_on: StartingOn) -> DayOfWeek {
        gregorian::day_of_week(self, starting_on)
    }

    /// Returns the named weekday.
    pub fn weekday(self) -> Weekday {
        self.day_of_week(StartingOn::Default).iso_weekday()
    }

    /// Returns the ordinal day of the year (1..=366).
    pub fn day_of_year(self) -> u16 {
        gregorian::day_of_year(self)
    }

    /// Returns the quarter (1..=4).
    pub fn quarter_of_year(self) -> u8 {
        gregorian::quarter_of_year(self)
    }

    /// Returns the year within its era.
    pub fn year_of_era(self) -> (u32, Era) {
        gregorian::year_of_era(self.year)
    }

    /// Returns the day within its era.
    pub fn day_of_era(self) -> (i64, Era) {
        gregorian::day_of_era(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2015, 1, 23).unwrap();
        assert_eq!(date.year(), 2015);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 23);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(2000, 0, 1).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2000,
                month: 0,
                day: 1,
            }
        );
    }

    #[test]
    fn new_leap_day() {
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert!(CalendarDate::new(-4, 2, 29).is_ok());
    }

    #[test]
    fn new_year_bounds() {
        assert!(CalendarDate::new(9999, 12, 31).is_ok());
        assert!(CalendarDate::new(-9999, 1, 1).is_ok());
        assert!(CalendarDate::new(10000, 1, 1).is_err());
    }

    #[test]
    fn iso_days_roundtrip() {
        let date = CalendarDate::new(1970, 1, 1).unwrap();
        assert_eq!(date.iso_days(), 719_528);
        assert_eq!(CalendarDate::from_iso_days(719_528).unwrap(), date);
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(
            CalendarDate::new(1970, 1, 1).unwrap().weekday(),
            Weekday::Thursday
        );
        assert_eq!(
            CalendarDate::new(2016, 2, 29).unwrap().weekday(),
            Weekday::Monday
        );
        assert_eq!(
            CalendarDate::new(0, 1, 1).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn derived_fields() {
        let date = CalendarDate::new(2024, 8, 15).unwrap();
        assert!(date.in_leap_year());
        assert_eq!(date.days_in_month(), 31);
        assert_eq!(date.day_of_year(), 228);
        assert_eq!(date.quarter_of_year(), 3);
        assert_eq!(date.year_of_era(), (2024, Era::CommonEra));
    }

    #[test]
    fn ord_chronological() {
        let bce = CalendarDate::new(-1, 12, 31).unwrap();
        let zero = CalendarDate::new(0, 1, 1).unwrap();
        let later = CalendarDate::new(0, 1, 2).unwrap();
        assert!(bce < zero);
        assert!(zero < later);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CalendarDate>();
    }
}
