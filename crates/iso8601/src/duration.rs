//! ISO-8601 duration text: `P[nY][nM][nW][nD][T[nH][nM][n[.f]S]]`.

use isocal_calendar::{Duration, DurationMicrosecond};
use tracing::trace;

use crate::error::ParseError;
use crate::scan::{Cursor, fraction_digits};

#[derive(Debug, Clone, Copy)]
enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    fn apply(self, duration: Duration, value: i64) -> Duration {
        match self {
            Unit::Year => duration.with_year(value),
            Unit::Month => duration.with_month(value),
            Unit::Week => duration.with_week(value),
            Unit::Day => duration.with_day(value),
            Unit::Hour => duration.with_hour(value),
            Unit::Minute => duration.with_minute(value),
            Unit::Second => duration.with_second(value),
        }
    }
}

/// Units allowed before `T`, in the order they must appear.
const DATE_UNITS: [(u8, Unit); 4] = [
    (b'Y', Unit::Year),
    (b'M', Unit::Month),
    (b'W', Unit::Week),
    (b'D', Unit::Day),
];

/// Units allowed after `T`, in the order they must appear.
const TIME_UNITS: [(u8, Unit); 3] = [(b'H', Unit::Hour), (b'M', Unit::Minute), (b'S', Unit::Second)];

/// Reads an optionally signed integer.
fn signed_integer(cursor: &mut Cursor<'_>) -> Option<i64> {
    let start = cursor.rest();
    cursor.eat_any(b"+-");
    if cursor.digit_run().is_empty() {
        return None;
    }
    let len = start.len() - cursor.rest().len();
    start.get(..len)?.parse().ok()
}

/// Consumes the unit letter after a number if it is still allowed, and
/// returns the unit together with the units that may follow it.
fn take_unit<'u>(
    cursor: &mut Cursor<'_>,
    allowed: &'u [(u8, Unit)],
) -> Option<(Unit, &'u [(u8, Unit)])> {
    let letter = cursor.peek()?;
    let index = allowed.iter().position(|&(l, _)| l == letter)?;
    cursor.eat(letter);
    Some((allowed[index].1, &allowed[index + 1..]))
}

fn date_component(rest: &str) -> ParseError {
    ParseError::InvalidDateComponent {
        component: rest.to_string(),
    }
}

fn time_component(rest: &str) -> ParseError {
    ParseError::InvalidTimeComponent {
        component: rest.to_string(),
    }
}

fn duration(text: &str) -> Result<Duration, ParseError> {
    let (negative, body) = if let Some(body) = text.strip_prefix("-P") {
        (true, body)
    } else if let Some(body) = text.strip_prefix("+P").or_else(|| text.strip_prefix('P')) {
        (false, body)
    } else {
        return Err(ParseError::InvalidDuration);
    };
    if body.is_empty() {
        return Err(ParseError::InvalidDuration);
    }

    let mut parsed = Duration::new();
    let mut cursor = Cursor::new(body);

    let mut allowed: &[(u8, Unit)] = &DATE_UNITS;
    while !cursor.is_empty() {
        let rest = cursor.rest();
        if rest.len() > 1 && cursor.eat(b'T') {
            break;
        }
        let value = signed_integer(&mut cursor).ok_or_else(|| date_component(rest))?;
        let (unit, remaining) =
            take_unit(&mut cursor, allowed).ok_or_else(|| date_component(rest))?;
        parsed = unit.apply(parsed, value);
        allowed = remaining;
    }

    let mut allowed: &[(u8, Unit)] = &TIME_UNITS;
    while !cursor.is_empty() {
        let rest = cursor.rest();
        let value = signed_integer(&mut cursor).ok_or_else(|| time_component(rest))?;
        if cursor.eat_any(b".,").is_some() {
            // A fractional part is only valid on seconds, as the last component.
            let (micro, precision) =
                fraction_digits(cursor.digit_run()).ok_or_else(|| time_component(rest))?;
            let seconds_allowed = allowed.iter().any(|&(l, _)| l == b'S');
            if !seconds_allowed || !cursor.eat(b'S') || !cursor.is_empty() {
                return Err(time_component(rest));
            }
            let micro = i64::from(micro);
            let micro = if rest.starts_with('-') { -micro } else { micro };
            parsed = parsed
                .with_second(value)
                .with_microsecond(micro, precision);
            break;
        }
        let (unit, remaining) =
            take_unit(&mut cursor, allowed).ok_or_else(|| time_component(rest))?;
        parsed = unit.apply(parsed, value);
        allowed = remaining;
    }

    Ok(if negative { parsed.negate() } else { parsed })
}

/// Parses an ISO-8601 duration.
///
/// The designator may be `P`, `+P` or `-P`; `-P` negates every component.
/// Each number may also carry its own sign (`P-1Y2M`). Units appear at most
/// once and in the order `Y M W D`, then `T` and `H M S`. Only the seconds
/// may carry a fraction, and then must be the last component.
///
/// # Errors
///
/// [`ParseError::InvalidDuration`] for a missing designator or an empty body,
/// [`ParseError::InvalidDateComponent`] or
/// [`ParseError::InvalidTimeComponent`] for a bad component.
///
/// # Example
///
/// ```
/// use isocal_iso8601::parse_duration;
///
/// let d = parse_duration("P1Y2MT3H4.5S").unwrap();
/// assert_eq!((d.year(), d.month(), d.hour(), d.second()), (1, 2, 3, 4));
/// assert_eq!(d.microsecond().value(), 500_000);
/// ```
pub fn parse_duration(text: &str) -> Result<Duration, ParseError> {
    duration(text).inspect_err(|err| trace!(text, %err, "rejected iso-8601 duration"))
}

fn push_component(out: &mut String, value: i64, unit: char) {
    if value != 0 {
        out.push_str(&value.to_string());
        out.push(unit);
    }
}

fn seconds_component(second: i64, micro: DurationMicrosecond) -> Option<String> {
    if second == 0 && micro.value() == 0 {
        return None;
    }
    let precision = micro.precision();
    if precision == 0 {
        return Some(format!("{second}S"));
    }
    let total = i128::from(second) * 1_000_000 + i128::from(micro.value());
    let sign = if total < 0 { "-" } else { "" };
    let magnitude = total.unsigned_abs();
    let digits = (magnitude % 1_000_000) / 10u128.pow(6 - u32::from(precision));
    Some(format!(
        "{sign}{}.{digits:0width$}S",
        magnitude / 1_000_000,
        width = usize::from(precision)
    ))
}

/// Renders a duration as ISO-8601 text.
///
/// Zero components are left out and an all-zero duration is `PT0S`. Seconds
/// and microseconds are combined into one signed decimal carrying as many
/// fraction digits as the microsecond precision asks for.
///
/// # Example
///
/// ```
/// use isocal_calendar::Duration;
/// use isocal_iso8601::duration_to_string;
///
/// let d = Duration::new().with_week(2).with_hour(30);
/// assert_eq!(duration_to_string(&d), "P2WT30H");
/// assert_eq!(duration_to_string(&Duration::ZERO), "PT0S");
/// ```
pub fn duration_to_string(duration: &Duration) -> String {
    let mut out = String::from("P");
    push_component(&mut out, duration.year(), 'Y');
    push_component(&mut out, duration.month(), 'M');
    push_component(&mut out, duration.week(), 'W');
    push_component(&mut out, duration.day(), 'D');

    let mut time = String::new();
    push_component(&mut time, duration.hour(), 'H');
    push_component(&mut time, duration.minute(), 'M');
    if let Some(seconds) = seconds_component(duration.second(), duration.microsecond()) {
        time.push_str(&seconds);
    }

    if !time.is_empty() {
        out.push('T');
        out.push_str(&time);
    }
    if out.len() == 1 {
        return "PT0S".to_string();
    }
    out
}
