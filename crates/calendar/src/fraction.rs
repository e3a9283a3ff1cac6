//! Exact day fractions and the `(days, fraction)` linear instant.
//!
//! All sub-day arithmetic in the engine funnels through
//! [`add_day_fraction_to_iso_days`]. Fractions of different denominators are
//! combined over their least common multiple in 128-bit intermediates, so no
//! precision is lost and no floating point is involved.

use crate::date::CalendarDate;
use crate::datetime::NaiveDateTime;
use crate::error::CalendarError;
use crate::gregorian;
use crate::time::{ClockTime, MAX_PRECISION, Microsecond};

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Microseconds in one calendar day; the denominator clock times use.
pub const MICROSECONDS_PER_DAY: i64 = 86_400_000_000;

const MICROSECONDS_PER_SECOND: i64 = 1_000_000;
const MICROSECONDS_PER_MINUTE: i64 = 60 * MICROSECONDS_PER_SECOND;
const MICROSECONDS_PER_HOUR: i64 = 60 * MICROSECONDS_PER_MINUTE;

/// `numerator / denominator` of one calendar day, kept in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayFraction {
    numerator: i64,
    denominator: i64,
}

impl DayFraction {
    /// Creates a new `DayFraction`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayFraction`] unless
    /// `denominator > 0` and `0 <= numerator < denominator`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, CalendarError> {
        if denominator <= 0 || numerator < 0 || numerator >= denominator {
            return Err(CalendarError::InvalidDayFraction {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the numerator.
    pub fn numerator(self) -> i64 {
        self.numerator
    }

    /// Returns the denominator.
    pub fn denominator(self) -> i64 {
        self.denominator
    }
}

/// A linear instant: whole days since `0000-01-01` plus a day fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoDays {
    days: i64,
    fraction: DayFraction,
}

impl IsoDays {
    /// Pairs a day count with a fraction of the following day.
    pub fn new(days: i64, fraction: DayFraction) -> Self {
        Self { days, fraction }
    }

    /// Returns the whole-day count.
    pub fn days(self) -> i64 {
        self.days
    }

    /// Returns the fraction of the day.
    pub fn fraction(self) -> DayFraction {
        self.fraction
    }
}

/// Converts a clock time to a fraction of the day over
/// [`MICROSECONDS_PER_DAY`].
pub fn time_to_day_fraction(time: ClockTime) -> DayFraction {
    let seconds =
        i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60 + i64::from(time.second());
    DayFraction {
        numerator: seconds * MICROSECONDS_PER_SECOND + i64::from(time.microsecond().value()),
        denominator: MICROSECONDS_PER_DAY,
    }
}

/// Converts a fraction of the day to a clock time with precision 6.
///
/// A fraction over any denominator other than [`MICROSECONDS_PER_DAY`] is
/// rescaled first, truncating below one microsecond.
pub fn time_from_day_fraction(fraction: DayFraction) -> ClockTime {
    let total = microseconds_in_day(fraction);
    let hour = total / MICROSECONDS_PER_HOUR;
    let rest = total % MICROSECONDS_PER_HOUR;
    let minute = rest / MICROSECONDS_PER_MINUTE;
    let rest = rest % MICROSECONDS_PER_MINUTE;
    let second = rest / MICROSECONDS_PER_SECOND;
    let microsecond = rest % MICROSECONDS_PER_SECOND;
    ClockTime::new_unchecked(
        hour as u8,
        minute as u8,
        second as u8,
        Microsecond::new_unchecked(microsecond as u32, MAX_PRECISION),
    )
}

fn microseconds_in_day(fraction: DayFraction) -> i64 {
    if fraction.denominator == MICROSECONDS_PER_DAY {
        return fraction.numerator;
    }
    // numerator < denominator, so the quotient is below MICROSECONDS_PER_DAY.
    (i128::from(fraction.numerator) * i128::from(MICROSECONDS_PER_DAY)
        / i128::from(fraction.denominator)) as i64
}

/// Adds `add / add_denominator` of a day to a linear instant.
///
/// Equal denominators add directly. Otherwise both sides are brought to the
/// least common multiple of the denominators. The sum is then normalised:
/// whole days carry into the day count (in either direction) and the
/// remaining fraction lands in `[0, denominator)`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayFraction`] if `add_denominator` is not
/// positive, and [`CalendarError::FractionOverflow`] if the exact result
/// does not fit in 64 bits.
pub fn add_day_fraction_to_iso_days(
    iso_days: IsoDays,
    add: i64,
    add_denominator: i64,
) -> Result<IsoDays, CalendarError> {
    if add_denominator <= 0 {
        return Err(CalendarError::InvalidDayFraction {
            numerator: add,
            denominator: add_denominator,
        });
    }
    let IsoDays { days, fraction } = iso_days;
    let (numerator, denominator) = if add_denominator == fraction.denominator {
        (
            i128::from(fraction.numerator) + i128::from(add),
            i128::from(add_denominator),
        )
    } else {
        let gcd = i128::from(gcd(fraction.denominator, add_denominator));
        let scaled = i128::from(fraction.numerator)
            .checked_mul(i128::from(add_denominator))
            .and_then(|n| n.checked_add(i128::from(add).checked_mul(i128::from(fraction.denominator))?))
            .ok_or(CalendarError::FractionOverflow)?;
        (
            scaled / gcd,
            i128::from(fraction.denominator) * i128::from(add_denominator) / gcd,
        )
    };
    normalize(days, numerator, denominator)
}

fn normalize(days: i64, numerator: i128, denominator: i128) -> Result<IsoDays, CalendarError> {
    let day_delta = numerator.div_euclid(denominator);
    let numerator = numerator.rem_euclid(denominator);
    let days = i128::from(days) + day_delta;
    let to_i64 = |v: i128| i64::try_from(v).map_err(|_| CalendarError::FractionOverflow);
    Ok(IsoDays {
        days: to_i64(days)?,
        fraction: DayFraction {
            numerator: to_i64(numerator)?,
            denominator: to_i64(denominator)?,
        },
    })
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

/// Returns the instant at the start of the same day.
pub fn iso_days_to_beginning_of_day(iso_days: IsoDays) -> IsoDays {
    IsoDays {
        days: iso_days.days,
        fraction: DayFraction {
            numerator: 0,
            denominator: iso_days.fraction.denominator,
        },
    }
}

/// Returns the last representable instant of the same day.
pub fn iso_days_to_end_of_day(iso_days: IsoDays) -> IsoDays {
    let denominator = iso_days.fraction.denominator;
    IsoDays {
        days: iso_days.days,
        fraction: DayFraction {
            numerator: denominator - 1,
            denominator,
        },
    }
}

/// Returns where the ISO day rolls over relative to midnight UTC: at
/// midnight itself.
pub fn day_rollover_relative_to_midnight_utc() -> DayFraction {
    DayFraction {
        numerator: 0,
        denominator: 1,
    }
}

/// Converts a date and time into a linear instant.
pub fn naive_datetime_to_iso_days(datetime: NaiveDateTime) -> IsoDays {
    IsoDays {
        days: datetime.date().iso_days(),
        fraction: time_to_day_fraction(datetime.time()),
    }
}

/// Converts a linear instant back into a date and time (precision 6).
///
/// # Errors
///
/// Returns [`CalendarError::DayCountOutOfRange`] if the day count maps
/// outside the supported years.
pub fn naive_datetime_from_iso_days(iso_days: IsoDays) -> Result<NaiveDateTime, CalendarError> {
    let date: CalendarDate = gregorian::date_from_iso_days(iso_days.days)?;
    Ok(NaiveDateTime::new(date, time_from_day_fraction(iso_days.fraction)))
}
