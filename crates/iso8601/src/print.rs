//! Canonical ISO-8601 rendering.

use isocal_calendar::{CalendarDate, ClockTime, NaiveDateTime, SECONDS_PER_DAY};

use crate::config::{Format, UTC_ZONE, ZoneInfo};
use crate::error::FormatError;

/// Zero-pads `value` to `width` digits, prefixing `-` for negative values.
///
/// ```
/// use isocal_iso8601::zero_pad;
///
/// assert_eq!(zero_pad(7, 2), "07");
/// assert_eq!(zero_pad(-99, 4), "-0099");
/// ```
pub fn zero_pad(value: i64, width: usize) -> String {
    if value < 0 {
        format!("-{:0width$}", value.unsigned_abs())
    } else {
        format!("{value:0width$}")
    }
}

/// Renders `YYYY-MM-DD` or `YYYYMMDD`.
pub fn date_to_string(date: CalendarDate, format: Format) -> String {
    let year = zero_pad(i64::from(date.year()), 4);
    match format {
        Format::Extended => format!("{year}-{:02}-{:02}", date.month(), date.day()),
        Format::Basic => format!("{year}{:02}{:02}", date.month(), date.day()),
    }
}

/// Renders `HH:MM:SS[.f]` or `HHMMSS[.f]`.
///
/// The fraction has exactly as many digits as the microsecond precision,
/// truncated; precision 0 renders no fraction at all.
pub fn time_to_string(time: ClockTime, format: Format) -> String {
    let mut out = match format {
        Format::Extended => format!(
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        ),
        Format::Basic => format!("{:02}{:02}{:02}", time.hour(), time.minute(), time.second()),
    };
    let microsecond = time.microsecond();
    let precision = microsecond.precision();
    if precision > 0 {
        let digits = microsecond.value() / 10u32.pow(6 - u32::from(precision));
        out.push('.');
        out.push_str(&zero_pad(i64::from(digits), usize::from(precision)));
    }
    out
}

/// Renders a date and time joined by `T`, without an offset.
pub fn naive_datetime_to_string(datetime: NaiveDateTime, format: Format) -> String {
    format!(
        "{}T{}",
        date_to_string(datetime.date(), format),
        time_to_string(datetime.time(), format)
    )
}

/// Renders an offset as `Z`, `±HH:MM` or `±HHMM`.
///
/// `Z` is used only for a zero offset in the `Etc/UTC` zone. Seconds in the
/// offset are dropped.
///
/// # Errors
///
/// [`FormatError::OffsetOutOfRange`] when `utc_offset + std_offset` is a day
/// or more in either direction.
pub fn offset_to_string(
    utc_offset: i32,
    std_offset: i32,
    time_zone: &str,
    format: Format,
) -> Result<String, FormatError> {
    let total = i64::from(utc_offset) + i64::from(std_offset);
    if total == 0 && time_zone == UTC_ZONE {
        return Ok("Z".to_string());
    }
    if total.abs() >= SECONDS_PER_DAY {
        return Err(FormatError::OffsetOutOfRange { seconds: total });
    }
    let sign = if total < 0 { '-' } else { '+' };
    let hours = total.abs() / 3600;
    let minutes = total.abs() % 3600 / 60;
    Ok(match format {
        Format::Extended => format!("{sign}{hours:02}:{minutes:02}"),
        Format::Basic => format!("{sign}{hours:02}{minutes:02}"),
    })
}

/// Renders a zoned datetime: date, `T`, time, offset and, outside
/// `Etc/UTC`, ` <abbr> <zone>`.
///
/// # Errors
///
/// [`FormatError::OffsetOutOfRange`] as for [`offset_to_string`].
///
/// # Example
///
/// ```
/// use isocal_calendar::{CalendarDate, ClockTime, NaiveDateTime};
/// use isocal_iso8601::{Format, ZoneInfo, datetime_to_string};
///
/// let dt = NaiveDateTime::new(
///     CalendarDate::new(2000, 2, 29).unwrap(),
///     ClockTime::from_hms(23, 0, 7).unwrap(),
/// );
/// let zone = ZoneInfo::new("America/Manaus", "AMT", -14_400, 0);
/// assert_eq!(
///     datetime_to_string(dt, &zone, Format::Extended).unwrap(),
///     "2000-02-29T23:00:07-04:00 AMT America/Manaus"
/// );
/// ```
pub fn datetime_to_string(
    datetime: NaiveDateTime,
    zone: &ZoneInfo,
    format: Format,
) -> Result<String, FormatError> {
    let offset = offset_to_string(
        zone.utc_offset(),
        zone.std_offset(),
        zone.time_zone(),
        format,
    )?;
    let mut out = naive_datetime_to_string(datetime, format);
    out.push_str(&offset);
    if !zone.is_utc() {
        out.push(' ');
        out.push_str(zone.zone_abbr());
        out.push(' ');
        out.push_str(zone.time_zone());
    }
    Ok(out)
}

/// Renders a UTC datetime, always suffixed with `Z`.
pub fn utc_datetime_to_string(datetime: NaiveDateTime, format: Format) -> String {
    let mut out = naive_datetime_to_string(datetime, format);
    out.push('Z');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use isocal_calendar::Microsecond;

    fn time(h: u8, m: u8, s: u8, us: u32, precision: u8) -> ClockTime {
        ClockTime::new(h, m, s, Microsecond::new(us, precision).unwrap()).unwrap()
    }

    #[test]
    fn zero_pad_widths() {
        assert_eq!(zero_pad(0, 1), "0");
        assert_eq!(zero_pad(5, 6), "000005");
        assert_eq!(zero_pad(12345, 2), "12345");
        assert_eq!(zero_pad(-1, 4), "-0001");
    }

    #[test]
    fn dates() {
        let date = CalendarDate::new(2015, 1, 23).unwrap();
        assert_eq!(date_to_string(date, Format::Extended), "2015-01-23");
        assert_eq!(date_to_string(date, Format::Basic), "20150123");
        let bce = CalendarDate::new(-9999, 12, 31).unwrap();
        assert_eq!(date_to_string(bce, Format::Basic), "-99991231");
    }

    #[test]
    fn times() {
        assert_eq!(time_to_string(time(23, 50, 7, 0, 0), Format::Extended), "23:50:07");
        assert_eq!(time_to_string(time(23, 50, 7, 0, 3), Format::Extended), "23:50:07.000");
        assert_eq!(time_to_string(time(23, 50, 7, 123_456, 6), Format::Basic), "235007.123456");
    }

    #[test]
    fn fraction_is_truncated() {
        assert_eq!(time_to_string(time(0, 0, 0, 999_999, 1), Format::Extended), "00:00:00.9");
        assert_eq!(time_to_string(time(0, 0, 0, 120_000, 2), Format::Extended), "00:00:00.12");
        assert_eq!(time_to_string(time(0, 0, 0, 999_999, 0), Format::Extended), "00:00:00");
    }

    #[test]
    fn offsets() {
        assert_eq!(offset_to_string(0, 0, UTC_ZONE, Format::Extended).unwrap(), "Z");
        assert_eq!(offset_to_string(0, 0, "Europe/London", Format::Extended).unwrap(), "+00:00");
        assert_eq!(offset_to_string(3600, 3600, "Europe/Berlin", Format::Basic).unwrap(), "+0200");
        assert_eq!(offset_to_string(-9000, 0, "X", Format::Extended).unwrap(), "-02:30");
        assert_eq!(offset_to_string(19_800, 0, "Asia/Kolkata", Format::Extended).unwrap(), "+05:30");
    }

    #[test]
    fn offset_out_of_range() {
        assert_eq!(
            offset_to_string(86_400, 0, "X", Format::Extended),
            Err(FormatError::OffsetOutOfRange { seconds: 86_400 })
        );
        assert!(offset_to_string(-86_399, 0, "X", Format::Extended).is_ok());
    }

    #[test]
    fn zoned_datetimes() {
        let dt = NaiveDateTime::new(CalendarDate::new(2015, 1, 23).unwrap(), time(23, 50, 7, 0, 0));
        assert_eq!(
            datetime_to_string(dt, &ZoneInfo::utc(), Format::Extended).unwrap(),
            "2015-01-23T23:50:07Z"
        );
        let berlin = ZoneInfo::new("Europe/Berlin", "CET", 3600, 0);
        assert_eq!(
            datetime_to_string(dt, &berlin, Format::Basic).unwrap(),
            "20150123T235007+0100 CET Europe/Berlin"
        );
        assert_eq!(utc_datetime_to_string(dt, Format::Basic), "20150123T235007Z");
        assert_eq!(naive_datetime_to_string(dt, Format::Extended), "2015-01-23T23:50:07");
    }
}
