//! Proleptic Gregorian calendar arithmetic over the ISO day count.
//!
//! Day 0 is `0000-01-01`. Every year, including year 0 and the negative
//! years before it, follows the Gregorian leap rule.

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::weekday::{DayOfWeek, Era, StartingOn};

/// Smallest supported year.
pub const MIN_YEAR: i32 = -9999;

/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

/// ISO day count of `-9999-01-01`.
pub const MIN_ISO_DAYS: i64 = -3_652_059;

/// ISO day count of `9999-12-31`.
pub const MAX_ISO_DAYS: i64 = 3_652_424;

/// ISO day count of `1970-01-01`.
pub const UNIX_EPOCH_ISO_DAYS: i64 = 719_528;

/// ISO day count of `0001-01-01`, the first day of the common era.
pub const COMMON_ERA_ISO_DAYS: i64 = 366;

const DAYS_PER_NONLEAP_YEAR: i64 = 365;
const DAYS_PER_LEAP_YEAR: i64 = 366;
const DAYS_PER_400_YEARS: i64 = 146_097;

/// Days elapsed before the first of each month in a non-leap year
/// (index 0 = January).
const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns whether `year` is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// Months outside 1..=12 have zero days, so no day validates against them.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Returns the number of months in `year`, which is always 12.
pub fn months_in_year(_year: i32) -> u8 {
    12
}

/// Returns whether `(year, month, day)` names a date in -9999..=9999.
pub fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year) && day >= 1 && day <= days_in_month(year, month)
}

/// Converts a date to the number of days since `0000-01-01`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the triple is not a valid date.
pub fn date_to_iso_days(year: i32, month: u8, day: u8) -> Result<i64, CalendarError> {
    if !is_valid_date(year, month, day) {
        return Err(CalendarError::InvalidDate { year, month, day });
    }
    Ok(iso_days_unchecked(year, month, day))
}

/// Converts an ISO day count back to a date.
///
/// # Errors
///
/// Returns [`CalendarError::DayCountOutOfRange`] if `days` falls outside
/// `-9999-01-01..=9999-12-31`.
pub fn date_from_iso_days(days: i64) -> Result<CalendarDate, CalendarError> {
    if !(MIN_ISO_DAYS..=MAX_ISO_DAYS).contains(&days) {
        return Err(CalendarError::DayCountOutOfRange {
            days,
            min: MIN_ISO_DAYS,
            max: MAX_ISO_DAYS,
        });
    }
    let (year, ordinal) = year_and_ordinal(days);
    // The day-count window above keeps the year within -9999..=9999.
    let year = year as i32;
    let (month, day) = month_and_day(year, ordinal as u16);
    Ok(CalendarDate::new_unchecked(year, month, day))
}

/// Returns the weekday number of a date, counting from `starting_on`.
pub fn day_of_week(date: CalendarDate, starting_on: StartingOn) -> DayOfWeek {
    DayOfWeek::new(iso_days_to_day_of_week(date.iso_days(), starting_on))
}

/// Returns the weekday number (1..=7) of an ISO day count.
pub fn iso_days_to_day_of_week(days: i64, starting_on: StartingOn) -> u8 {
    // rem_euclid keeps negative day counts in 0..7.
    (days + starting_on.day_offset()).rem_euclid(7) as u8 + 1
}

/// Returns the ordinal day of the year (1..=366).
pub fn day_of_year(date: CalendarDate) -> u16 {
    ordinal_unchecked(date.year(), date.month(), date.day())
}

/// Returns the quarter (1..=4) that contains the date.
pub fn quarter_of_year(date: CalendarDate) -> u8 {
    (date.month() - 1) / 3 + 1
}

/// Returns the year counted within its era.
///
/// Year 1 is year 1 of the common era; year 0 is year 1 before it, year -1
/// is year 2 before it, and so on.
pub fn year_of_era(year: i32) -> (u32, Era) {
    if year > 0 {
        (year.unsigned_abs(), Era::CommonEra)
    } else {
        (year.unsigned_abs() + 1, Era::BeforeCommonEra)
    }
}

/// Returns the day counted within its era.
///
/// `0001-01-01` is day 1 of the common era and `0000-12-31` is day 1 before
/// it; days before the common era count backward from the boundary.
pub fn day_of_era(date: CalendarDate) -> (i64, Era) {
    let days = date.iso_days();
    if date.year() > 0 {
        (days - COMMON_ERA_ISO_DAYS + 1, Era::CommonEra)
    } else {
        (COMMON_ERA_ISO_DAYS - days, Era::BeforeCommonEra)
    }
}

pub(crate) fn iso_days_unchecked(year: i32, month: u8, day: u8) -> i64 {
    days_before_year(i64::from(year)) + i64::from(ordinal_unchecked(year, month, day)) - 1
}

fn ordinal_unchecked(year: i32, month: u8, day: u8) -> u16 {
    let leap_day = u16::from(month > 2 && is_leap_year(year));
    DAYS_BEFORE_MONTH[usize::from(month - 1)] + leap_day + u16::from(day)
}

/// ISO day count of January 1st of `year`.
///
/// One floor-division formula covers positive, zero and negative years;
/// for year 0 it yields 0 and for year 1 it yields 366.
fn days_before_year(year: i64) -> i64 {
    let previous = year - 1;
    previous * DAYS_PER_NONLEAP_YEAR + previous.div_euclid(4) - previous.div_euclid(100)
        + previous.div_euclid(400)
        + DAYS_PER_LEAP_YEAR
}

/// Splits a day count into its year and 0-based day within that year.
///
/// The mean-year estimate is never more than one year away from the real
/// year, so a single comparison in either direction settles it.
fn year_and_ordinal(days: i64) -> (i64, i64) {
    let mut year = (days * 400).div_euclid(DAYS_PER_400_YEARS);
    let mut start = days_before_year(year);
    if days < start {
        year -= 1;
        start = days_before_year(year);
    } else {
        let next = days_before_year(year + 1);
        if days >= next {
            year += 1;
            start = next;
        }
    }
    (year, days - start)
}

/// Maps a 0-based day within `year` to `(month, day)`.
fn month_and_day(year: i32, ordinal: u16) -> (u8, u8) {
    let leap_day = u16::from(is_leap_year(year));
    if ordinal < 31 {
        return (1, ordinal as u8 + 1);
    }
    if ordinal < 59 + leap_day {
        return (2, (ordinal - 31) as u8 + 1);
    }
    // From March 1st on, shift back onto the non-leap table.
    let ordinal = ordinal - leap_day;
    let index = DAYS_BEFORE_MONTH
        .iter()
        .rposition(|&before| before <= ordinal)
        .unwrap_or(0);
    (index as u8 + 1, (ordinal - DAYS_BEFORE_MONTH[index]) as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(-4));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(-1));
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2001, 2), 28);
        assert_eq!(days_in_month(-1, 5), 31);
        assert_eq!(days_in_month(2001, 4), 30);
        assert_eq!(days_in_month(2001, 0), 0);
        assert_eq!(days_in_month(2001, 13), 0);
    }

    #[test]
    fn months_always_twelve() {
        assert_eq!(months_in_year(2024), 12);
        assert_eq!(months_in_year(-500), 12);
    }

    #[test]
    fn valid_dates() {
        assert!(is_valid_date(2016, 2, 29));
        assert!(!is_valid_date(2015, 2, 29));
        assert!(!is_valid_date(2015, 1, 0));
        assert!(!is_valid_date(2015, 13, 1));
        assert!(is_valid_date(-9999, 1, 1));
        assert!(!is_valid_date(10000, 1, 1));
        assert!(!is_valid_date(-10000, 12, 31));
    }

    #[test]
    fn anchors() {
        assert_eq!(date_to_iso_days(0, 1, 1).unwrap(), 0);
        assert_eq!(date_to_iso_days(1970, 1, 1).unwrap(), UNIX_EPOCH_ISO_DAYS);
        assert_eq!(date_to_iso_days(1, 1, 1).unwrap(), COMMON_ERA_ISO_DAYS);
        assert_eq!(date_to_iso_days(-1, 12, 31).unwrap(), -1);
        assert_eq!(date_to_iso_days(-1, 1, 1).unwrap(), -365);
        assert_eq!(date_to_iso_days(-9999, 1, 1).unwrap(), MIN_ISO_DAYS);
        assert_eq!(date_to_iso_days(9999, 12, 31).unwrap(), MAX_ISO_DAYS);
    }

    #[test]
    fn to_iso_days_rejects_invalid() {
        assert_eq!(
            date_to_iso_days(2015, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2015,
                month: 2,
                day: 29,
            }
        );
    }

    #[test]
    fn from_iso_days_anchors() {
        let epoch = date_from_iso_days(UNIX_EPOCH_ISO_DAYS).unwrap();
        assert_eq!((epoch.year(), epoch.month(), epoch.day()), (1970, 1, 1));
        let zero = date_from_iso_days(0).unwrap();
        assert_eq!((zero.year(), zero.month(), zero.day()), (0, 1, 1));
        let before = date_from_iso_days(-1).unwrap();
        assert_eq!((before.year(), before.month(), before.day()), (-1, 12, 31));
        let leap_end = date_from_iso_days(365).unwrap();
        assert_eq!((leap_end.year(), leap_end.month(), leap_end.day()), (0, 12, 31));
    }

    #[test]
    fn from_iso_days_out_of_range() {
        assert_eq!(
            date_from_iso_days(MAX_ISO_DAYS + 1).unwrap_err(),
            CalendarError::DayCountOutOfRange {
                days: MAX_ISO_DAYS + 1,
                min: MIN_ISO_DAYS,
                max: MAX_ISO_DAYS,
            }
        );
        assert!(date_from_iso_days(MIN_ISO_DAYS - 1).is_err());
    }

    #[test]
    fn roundtrip_leap_and_century_boundaries() {
        for &year in &[-401, -400, -101, -100, -5, -4, -1, 0, 1, 100, 400, 1900, 2000] {
            for month in 1..=12u8 {
                for day in 1..=days_in_month(year, month) {
                    let days = date_to_iso_days(year, month, day).unwrap();
                    let date = date_from_iso_days(days).unwrap();
                    assert_eq!(
                        (date.year(), date.month(), date.day()),
                        (year, month, day),
                        "roundtrip failed for iso day {days}"
                    );
                }
            }
        }
    }

    #[test]
    fn consecutive_days_are_consecutive() {
        let mut previous = date_from_iso_days(-800).unwrap();
        for days in -799..800 {
            let date = date_from_iso_days(days).unwrap();
            assert!(previous < date, "iso day {days} did not advance");
            previous = date;
        }
    }

    #[test]
    fn weekday_numbers() {
        // 0000-01-01 is a Saturday, 1970-01-01 a Thursday.
        assert_eq!(iso_days_to_day_of_week(0, StartingOn::Default), 6);
        assert_eq!(
            iso_days_to_day_of_week(UNIX_EPOCH_ISO_DAYS, StartingOn::Default),
            4
        );
        assert_eq!(
            iso_days_to_day_of_week(UNIX_EPOCH_ISO_DAYS, StartingOn::Sunday),
            5
        );
        assert_eq!(
            iso_days_to_day_of_week(UNIX_EPOCH_ISO_DAYS, StartingOn::Thursday),
            1
        );
        assert_eq!(iso_days_to_day_of_week(-1, StartingOn::Monday), 5);
    }

    #[test]
    fn ordinal_and_quarter() {
        let date = CalendarDate::new(2016, 3, 1).unwrap();
        assert_eq!(day_of_year(date), 61);
        assert_eq!(quarter_of_year(date), 1);
        let date = CalendarDate::new(2015, 12, 31).unwrap();
        assert_eq!(day_of_year(date), 365);
        assert_eq!(quarter_of_year(date), 4);
    }

    #[test]
    fn eras() {
        assert_eq!(year_of_era(2024), (2024, Era::CommonEra));
        assert_eq!(year_of_era(1), (1, Era::CommonEra));
        assert_eq!(year_of_era(0), (1, Era::BeforeCommonEra));
        assert_eq!(year_of_era(-1), (2, Era::BeforeCommonEra));

        let first_ce = CalendarDate::new(1, 1, 1).unwrap();
        assert_eq!(day_of_era(first_ce), (1, Era::CommonEra));
        let last_bce = CalendarDate::new(0, 12, 31).unwrap();
        assert_eq!(day_of_era(last_bce), (1, Era::BeforeCommonEra));
        let first_bce_year = CalendarDate::new(0, 1, 1).unwrap();
        assert_eq!(day_of_era(first_bce_year), (366, Era::BeforeCommonEra));
    }
}
