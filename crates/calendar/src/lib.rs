//! # isocal-calendar
//!
//! Proleptic Gregorian calendar math and exact day-fraction arithmetic.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarDate"] -->|".iso_days()"| B["ISO day count (i64)"]
//!     B -->|"date_from_iso_days()"| A
//!     C["ClockTime"] -->|"time_to_day_fraction()"| D["DayFraction"]
//!     D -->|"time_from_day_fraction()"| C
//!     B --> E["IsoDays (days, fraction)"]
//!     D --> E
//!     E -->|"add_day_fraction_to_iso_days()"| E
//!     A -->|"day_of_week() / day_of_era()"| F["derived fields"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use isocal_calendar::{CalendarDate, ClockTime, Era, Weekday, date_to_iso_days};
//!
//! // Linear day count, anchored at 0000-01-01
//! assert_eq!(date_to_iso_days(1970, 1, 1).unwrap(), 719_528);
//!
//! let date = CalendarDate::new(-1, 12, 31).unwrap();
//! assert_eq!(date.weekday(), Weekday::Friday);
//! assert_eq!(date.year_of_era(), (2, Era::BeforeCommonEra));
//!
//! let noon = ClockTime::from_hms(12, 0, 0).unwrap();
//! assert_eq!(noon.to_day_fraction().numerator(), 43_200_000_000);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap years, month lengths, ISO day counts, weekdays, eras |
//! | `date` | Validated calendar date |
//! | `time` | Validated clock time with sub-second precision |
//! | `datetime` | Date and time without offset |
//! | `fraction` | Exact day fractions and the `(days, fraction)` instant |
//! | `duration` | Mixed-unit duration record |
//! | `weekday` | Weekday numbering and eras |
//! | `error` | Error types |

mod date;
mod datetime;
mod duration;
mod error;
mod fraction;
mod gregorian;
mod time;
mod weekday;

pub use date::CalendarDate;
pub use datetime::NaiveDateTime;
pub use duration::{Duration, DurationMicrosecond};
pub use error::CalendarError;
pub use fraction::{
    DayFraction, IsoDays, MICROSECONDS_PER_DAY, SECONDS_PER_DAY, add_day_fraction_to_iso_days,
    day_rollover_relative_to_midnight_utc, iso_days_to_beginning_of_day, iso_days_to_end_of_day,
    naive_datetime_from_iso_days, naive_datetime_to_iso_days, time_from_day_fraction,
    time_to_day_fraction,
};
pub use gregorian::{
    COMMON_ERA_ISO_DAYS, MAX_ISO_DAYS, MAX_YEAR, MIN_ISO_DAYS, MIN_YEAR, UNIX_EPOCH_ISO_DAYS,
    date_from_iso_days, date_to_iso_days, day_of_era, day_of_week, day_of_year, days_in_month,
    is_leap_year, is_valid_date, iso_days_to_day_of_week, months_in_year, quarter_of_year,
    year_of_era,
};
pub use time::{ClockTime, MAX_PRECISION, Microsecond, is_valid_time};
pub use weekday::{DayOfWeek, Era, StartingOn, Weekday};

/// Signed offset from UTC in seconds.
pub type UtcOffset = i32;
