//! Date, time, datetime and offset recognisers.
//!
//! Every entry point scans the text structurally first and only then checks
//! the scanned fields against the calendar, so a well-formed but impossible
//! value (`2015-01-32`) is reported as [`ParseError::InvalidDate`] while a
//! malformed one (`2015-105`) is [`ParseError::InvalidFormat`].

use isocal_calendar::{
    CalendarDate, ClockTime, Microsecond, NaiveDateTime, SECONDS_PER_DAY, UtcOffset,
    add_day_fraction_to_iso_days,
};
use tracing::trace;

use crate::config::Format;
use crate::error::ParseError;
use crate::scan::{Cursor, fraction_digits};

/// Date fields as scanned, not yet validated.
struct RawDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Time fields as scanned, not yet validated.
struct RawTime {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
    precision: u8,
}

impl RawDate {
    fn validate(self) -> Result<CalendarDate, ParseError> {
        CalendarDate::new(self.year, self.month, self.day).map_err(|_| ParseError::InvalidDate)
    }
}

impl RawTime {
    fn validate(self) -> Result<ClockTime, ParseError> {
        let microsecond = Microsecond::new(self.microsecond, self.precision)
            .map_err(|_| ParseError::InvalidTime)?;
        ClockTime::new(self.hour, self.minute, self.second, microsecond)
            .map_err(|_| ParseError::InvalidTime)
    }
}

fn scan_date(cursor: &mut Cursor<'_>, extended: bool) -> Result<RawDate, ParseError> {
    let negative = cursor.eat_any(b"+-") == Some(b'-');
    let magnitude = cursor.digits(4)? as i32;
    cursor.separator(b'-', extended)?;
    let month = cursor.two_digits()?;
    cursor.separator(b'-', extended)?;
    let day = cursor.two_digits()?;
    Ok(RawDate {
        year: if negative { -magnitude } else { magnitude },
        month,
        day,
    })
}

fn scan_time(cursor: &mut Cursor<'_>, extended: bool) -> Result<RawTime, ParseError> {
    let hour = cursor.two_digits()?;
    cursor.separator(b':', extended)?;
    let minute = cursor.two_digits()?;
    cursor.separator(b':', extended)?;
    let second = cursor.two_digits()?;
    let (microsecond, precision) = if cursor.eat_any(b".,").is_some() {
        fraction_digits(cursor.digit_run()).ok_or(ParseError::InvalidFormat)?
    } else {
        (0, 0)
    };
    Ok(RawTime {
        hour,
        minute,
        second,
        microsecond,
        precision,
    })
}

/// Scans an optional offset suffix.
///
/// Accepts `Z`, `±HH:MM`, `±HHMM` and `±HH` in either style. Empty input is
/// `None`, which is distinct from `Some(0)`.
fn scan_offset(cursor: &mut Cursor<'_>) -> Result<Option<UtcOffset>, ParseError> {
    if cursor.is_empty() {
        return Ok(None);
    }
    if cursor.eat(b'Z') {
        return Ok(Some(0));
    }
    if cursor.rest() == "-00:00" {
        return Err(ParseError::InvalidFormat);
    }
    let negative = match cursor.eat_any(b"+-") {
        Some(sign) => sign == b'-',
        None => return Err(ParseError::InvalidFormat),
    };
    let hour = cursor.two_digits()?;
    let minute = if cursor.eat(b':') || cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
        cursor.two_digits()?
    } else {
        0
    };
    if hour >= 24 || minute >= 60 {
        return Err(ParseError::InvalidFormat);
    }
    let seconds = i32::from(hour) * 3600 + i32::from(minute) * 60;
    Ok(Some(if negative { -seconds } else { seconds }))
}

fn scan_datetime(
    text: &str,
    format: Format,
) -> Result<(RawDate, RawTime, Option<UtcOffset>), ParseError> {
    let extended = format.is_extended();
    let mut cursor = Cursor::new(text);
    let date = scan_date(&mut cursor, extended)?;
    if cursor.eat_any(b"T ").is_none() {
        return Err(ParseError::InvalidFormat);
    }
    let time = scan_time(&mut cursor, extended)?;
    let offset = scan_offset(&mut cursor)?;
    cursor.finish()?;
    Ok((date, time, offset))
}

fn date_only(text: &str, format: Format) -> Result<CalendarDate, ParseError> {
    let mut cursor = Cursor::new(text);
    let raw = scan_date(&mut cursor, format.is_extended())?;
    cursor.finish()?;
    raw.validate()
}

fn time_only(text: &str, format: Format) -> Result<ClockTime, ParseError> {
    let mut cursor = Cursor::new(text);
    cursor.eat(b'T');
    let raw = scan_time(&mut cursor, format.is_extended())?;
    scan_offset(&mut cursor)?;
    cursor.finish()?;
    raw.validate()
}

fn traced<T>(kind: &'static str, text: &str, result: Result<T, ParseError>) -> Result<T, ParseError> {
    result.inspect_err(|err| trace!(kind, text, %err, "rejected iso-8601 input"))
}

/// Parses `[±]YYYY-MM-DD` (extended) or `[±]YYYYMMDD` (basic).
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] on a structural mismatch and
/// [`ParseError::InvalidDate`] for a date that does not exist.
///
/// # Example
///
/// ```
/// use isocal_iso8601::{Format, ParseError, parse_date};
///
/// let date = parse_date("-2015-01-23", Format::Extended).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (-2015, 1, 23));
/// assert_eq!(parse_date("2015-01-32", Format::Extended), Err(ParseError::InvalidDate));
/// ```
pub fn parse_date(text: &str, format: Format) -> Result<CalendarDate, ParseError> {
    traced("date", text, date_only(text, format))
}

/// Parses `[T]HH:MM:SS[.f][offset]` (extended) or `[T]HHMMSS[.f][offset]`
/// (basic). Any offset is checked for syntax and then dropped.
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] on a structural mismatch and
/// [`ParseError::InvalidTime`] for a time that does not exist.
pub fn parse_time(text: &str, format: Format) -> Result<ClockTime, ParseError> {
    traced("time", text, time_only(text, format))
}

/// Parses a date and a time joined by `T` or a space. Any offset is checked
/// for syntax and then dropped.
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] on a structural mismatch, then
/// [`ParseError::InvalidDate`] or [`ParseError::InvalidTime`] in that order.
pub fn parse_naive_datetime(text: &str, format: Format) -> Result<NaiveDateTime, ParseError> {
    let result = scan_datetime(text, format).and_then(|(date, time, _)| {
        let date = date.validate()?;
        Ok(NaiveDateTime::new(date, time.validate()?))
    });
    traced("naive datetime", text, result)
}

/// Parses a datetime that carries an offset and normalises it to UTC.
///
/// Returns the UTC wall clock together with the offset that was read. The
/// conversion may cross midnight in either direction; the sub-second
/// precision of the input is kept.
///
/// # Errors
///
/// As [`parse_naive_datetime`], plus [`ParseError::MissingOffset`] when the
/// text has no offset. A date pushed out of the supported years by the
/// offset is [`ParseError::InvalidDate`].
///
/// # Example
///
/// ```
/// use isocal_iso8601::{Format, parse_utc_datetime};
///
/// let (utc, offset) = parse_utc_datetime("2015-01-23 23:50:07+02:30", Format::Extended).unwrap();
/// assert_eq!(offset, 9000);
/// assert_eq!((utc.time().hour(), utc.time().minute()), (21, 20));
/// ```
pub fn parse_utc_datetime(
    text: &str,
    format: Format,
) -> Result<(NaiveDateTime, UtcOffset), ParseError> {
    let result = scan_datetime(text, format).and_then(|(date, time, offset)| {
        let date = date.validate()?;
        let time = time.validate()?;
        let offset = offset.ok_or(ParseError::MissingOffset)?;
        let local = NaiveDateTime::new(date, time);
        if offset == 0 {
            return Ok((local, 0));
        }
        let shifted = add_day_fraction_to_iso_days(
            local.to_iso_days(),
            -i64::from(offset),
            SECONDS_PER_DAY,
        )
        .map_err(|_| ParseError::InvalidDate)?;
        let utc = NaiveDateTime::from_iso_days(shifted).map_err(|_| ParseError::InvalidDate)?;
        let utc_time = utc.time().with_precision(time.microsecond().precision());
        Ok((NaiveDateTime::new(utc.date(), utc_time), offset))
    });
    traced("utc datetime", text, result)
}

/// Parses a standalone offset: `Z`, `±HH:MM`, `±HHMM` or `±HH`.
///
/// Empty input yields `Ok(None)`.
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] for anything else, including `-00:00`, an
/// hour of 24 or more, or a minute of 60 or more.
pub fn parse_offset(text: &str) -> Result<Option<UtcOffset>, ParseError> {
    let mut cursor = Cursor::new(text);
    let result = scan_offset(&mut cursor).and_then(|offset| cursor.finish().map(|()| offset));
    traced("offset", text, result)
}
