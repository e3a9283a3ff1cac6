//! Applying mixed-unit durations.
//!
//! Every shift runs in two phases. The calendar phase folds years and months
//! into one month delta and clamps the day to the length of the target
//! month. The sub-day phase then moves the day count by `week * 7 + day` and
//! adds hours, minutes, seconds and microseconds as an exact day fraction,
//! carrying whole days in either direction.

use isocal_calendar::{
    CalendarDate, ClockTime, Duration, IsoDays, MICROSECONDS_PER_DAY, Microsecond,
    NaiveDateTime, add_day_fraction_to_iso_days, days_in_month,
};
use tracing::trace;

use crate::error::ShiftError;

fn checked(value: Option<i64>) -> Result<i64, ShiftError> {
    value.ok_or(ShiftError::Overflow)
}

/// `year * 12 + month`.
fn month_delta(duration: &Duration) -> Result<i64, ShiftError> {
    checked(
        duration
            .year()
            .checked_mul(12)
            .and_then(|m| m.checked_add(duration.month())),
    )
}

/// `week * 7 + day`.
fn day_delta(duration: &Duration) -> Result<i64, ShiftError> {
    checked(
        duration
            .week()
            .checked_mul(7)
            .and_then(|d| d.checked_add(duration.day())),
    )
}

/// Hours, minutes, seconds and microseconds as one microsecond count.
fn microsecond_delta(duration: &Duration) -> Result<i64, ShiftError> {
    checked(
        duration
            .hour()
            .checked_mul(60)
            .and_then(|m| m.checked_add(duration.minute()))
            .and_then(|m| m.checked_mul(60))
            .and_then(|s| s.checked_add(duration.second()))
            .and_then(|s| s.checked_mul(1_000_000))
            .and_then(|us| us.checked_add(duration.microsecond().value())),
    )
}

/// The duration's precision wins only when it carries microseconds.
fn result_precision(original: Microsecond, duration: &Duration) -> u8 {
    let micro = duration.microsecond();
    if micro.value() != 0 {
        micro.precision()
    } else {
        original.precision()
    }
}

fn shift_months(date: CalendarDate, months: i64) -> Result<CalendarDate, ShiftError> {
    if months == 0 {
        return Ok(date);
    }
    let total = checked(
        (i64::from(date.year()) * 12 + i64::from(date.month()) - 1).checked_add(months),
    )?;
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| ShiftError::Overflow)?;
    // rem_euclid(12) + 1 is always 1..=12.
    let month = (total.rem_euclid(12) + 1) as u8;
    let day = date.day().min(days_in_month(year, month));
    if day != date.day() {
        trace!(year, month, from = date.day(), to = day, "clamped day to month length");
    }
    Ok(CalendarDate::new(year, month, day)?)
}

fn shift_days(date: CalendarDate, days: i64) -> Result<i64, ShiftError> {
    checked(date.iso_days().checked_add(days))
}

/// Shifts a date by a duration made only of calendar units.
///
/// Years and months are applied first with the day clamped to the target
/// month (`2016-01-31` plus one month is `2016-02-29`), then weeks and days.
///
/// # Errors
///
/// [`ShiftError::UnsupportedUnitCombination`] if any of hours, minutes,
/// seconds or microseconds is non-zero, [`ShiftError::Overflow`] if the unit
/// totals overflow and [`ShiftError::Calendar`] if the result leaves
/// `-9999..=9999`.
///
/// # Example
///
/// ```
/// use isocal_calendar::{CalendarDate, Duration};
/// use isocal_shift::shift_date;
///
/// let date = CalendarDate::new(2016, 1, 31).unwrap();
/// let shifted = shift_date(date, &Duration::new().with_month(1)).unwrap();
/// assert_eq!(shifted, CalendarDate::new(2016, 2, 29).unwrap());
/// ```
#[tracing::instrument(level = "trace", ret, err)]
pub fn shift_date(date: CalendarDate, duration: &Duration) -> Result<CalendarDate, ShiftError> {
    if let Some(unit) = duration.first_time_unit() {
        return Err(ShiftError::unsupported("date", unit));
    }
    let date = shift_months(date, month_delta(duration)?)?;
    let days = shift_days(date, day_delta(duration)?)?;
    Ok(CalendarDate::from_iso_days(days)?)
}

/// Shifts a time of day by a duration made only of clock units, wrapping
/// around midnight.
///
/// # Errors
///
/// [`ShiftError::UnsupportedUnitCombination`] if any of years, months,
/// weeks or days is non-zero and [`ShiftError::Overflow`] if the unit totals
/// overflow.
#[tracing::instrument(level = "trace", ret, err)]
pub fn shift_time(time: ClockTime, duration: &Duration) -> Result<ClockTime, ShiftError> {
    if let Some(unit) = duration.first_calendar_unit() {
        return Err(ShiftError::unsupported("time", unit));
    }
    let start = IsoDays::new(0, time.to_day_fraction());
    let shifted =
        add_day_fraction_to_iso_days(start, microsecond_delta(duration)?, MICROSECONDS_PER_DAY)?;
    let precision = result_precision(time.microsecond(), duration);
    Ok(ClockTime::from_day_fraction(shifted.fraction()).with_precision(precision))
}

/// Shifts a date and time by any duration.
///
/// Calendar units go first (with day clamping), then the day delta, then the
/// sub-day delta, which may carry across any number of days.
///
/// # Errors
///
/// [`ShiftError::Overflow`] if the unit totals overflow and
/// [`ShiftError::Calendar`] if the result leaves `-9999..=9999`.
///
/// # Example
///
/// ```
/// use isocal_calendar::{CalendarDate, ClockTime, Duration, NaiveDateTime};
/// use isocal_shift::shift_naive_datetime;
///
/// let start = NaiveDateTime::new(
///     CalendarDate::new(2016, 1, 3).unwrap(),
///     ClockTime::MIDNIGHT,
/// );
/// let shifted = shift_naive_datetime(start, &Duration::new().with_hour(30)).unwrap();
/// assert_eq!(shifted.date(), CalendarDate::new(2016, 1, 4).unwrap());
/// assert_eq!(shifted.time(), ClockTime::from_hms(6, 0, 0).unwrap());
/// ```
#[tracing::instrument(level = "trace", ret, err)]
pub fn shift_naive_datetime(
    datetime: NaiveDateTime,
    duration: &Duration,
) -> Result<NaiveDateTime, ShiftError> {
    let date = shift_months(datetime.date(), month_delta(duration)?)?;
    let days = shift_days(date, day_delta(duration)?)?;
    let start = IsoDays::new(days, datetime.time().to_day_fraction());
    let shifted =
        add_day_fraction_to_iso_days(start, microsecond_delta(duration)?, MICROSECONDS_PER_DAY)?;
    let result = NaiveDateTime::from_iso_days(shifted)?;
    let precision = result_precision(datetime.time().microsecond(), duration);
    Ok(NaiveDateTime::new(
        result.date(),
        result.time().with_precision(precision),
    ))
}
