//! # isocal-shift
//!
//! Calendar-aware arithmetic: apply a mixed-unit [`Duration`] to a date, a
//! time of day, or both.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     A["Duration"] --> B["calendar phase: year * 12 + month"]
//!     B -->|"clamp day"| C["day phase: week * 7 + day"]
//!     C --> D["sub-day phase: add_day_fraction_to_iso_days()"]
//!     D --> E["CalendarDate / ClockTime / NaiveDateTime"]
//! ```
//!
//! Dates only accept calendar units and times only accept clock units;
//! mixing them is reported as [`ShiftError::UnsupportedUnitCombination`].
//! Units that are present but zero never trigger that error.
//!
//! ## Quick Start
//!
//! ```
//! use isocal_calendar::{CalendarDate, ClockTime, Duration};
//! use isocal_shift::{ShiftError, shift_date, shift_time};
//!
//! let date = CalendarDate::new(2015, 1, 31).unwrap();
//! let later = shift_date(date, &Duration::new().with_month(1).with_week(1)).unwrap();
//! assert_eq!(later, CalendarDate::new(2015, 3, 7).unwrap());
//!
//! let time = ClockTime::from_hms(23, 0, 0).unwrap();
//! assert!(matches!(
//!     shift_time(time, &Duration::new().with_day(1)),
//!     Err(ShiftError::UnsupportedUnitCombination { .. })
//! ));
//! ```
//!
//! [`Duration`]: isocal_calendar::Duration

mod error;
mod shift;

pub use error::ShiftError;
pub use shift::{shift_date, shift_naive_datetime, shift_time};
