//! Fixed input/output pairs for the text grammars.

use isocal_calendar::{CalendarDate, ClockTime, Microsecond};
use isocal_iso8601::{
    Format, ParseError, date_to_string, parse_date, parse_utc_datetime, time_to_string,
};

#[test]
fn parse_date_plain() {
    let date = parse_date("2015-01-23", Format::Extended).unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2015, 1, 23));
}

#[test]
fn parse_date_day_out_of_range() {
    assert_eq!(
        parse_date("2015-01-32", Format::Extended),
        Err(ParseError::InvalidDate)
    );
}

#[test]
fn parse_date_ordinal_form_is_not_accepted() {
    assert_eq!(
        parse_date("2015-105", Format::Extended),
        Err(ParseError::InvalidFormat)
    );
}

#[test]
fn parse_date_signed_years() {
    let date = parse_date("-2015-01-23", Format::Extended).unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (-2015, 1, 23));
    let date = parse_date("+2015-01-23", Format::Extended).unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2015, 1, 23));
}

#[test]
fn parse_utc_datetime_requires_offset() {
    assert_eq!(
        parse_utc_datetime("2015-01-23 23:50:07", Format::Extended),
        Err(ParseError::MissingOffset)
    );
}

#[test]
fn parse_utc_datetime_applies_offset() {
    let (utc, offset) =
        parse_utc_datetime("2015-01-23 23:50:07+02:30", Format::Extended).unwrap();
    assert_eq!(offset, 9000);
    let date = utc.date();
    let time = utc.time();
    assert_eq!((date.year(), date.month(), date.day()), (2015, 1, 23));
    assert_eq!((time.hour(), time.minute(), time.second()), (21, 20, 7));
    assert_eq!(time.microsecond(), Microsecond::ZERO);
}

#[test]
fn date_to_string_negative_year() {
    let date = CalendarDate::new(-99, 1, 31).unwrap();
    assert_eq!(date_to_string(date, Format::Extended), "-0099-01-31");
}

#[test]
fn time_to_string_truncates_to_precision() {
    let time = ClockTime::new(2, 2, 2, Microsecond::new(2, 2).unwrap()).unwrap();
    assert_eq!(time_to_string(time, Format::Extended), "02:02:02.00");
}
