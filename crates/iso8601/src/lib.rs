//! # isocal-iso8601
//!
//! ISO-8601 text for the isocal calendar engine: dates, times, datetimes,
//! offsets and durations in basic and extended style.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["text"] -->|"parse_*()"| B["scanner"]
//!     B -->|"structural fields"| C["calendar validation"]
//!     C --> D["CalendarDate / ClockTime / NaiveDateTime / Duration"]
//!     D -->|"*_to_string()"| E["canonical text"]
//!     F["ZoneInfo"] --> E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use isocal_iso8601::{Format, date_to_string, parse_date, parse_time, time_to_string};
//!
//! let date = parse_date("-0099-01-31", Format::Extended).unwrap();
//! assert_eq!(date_to_string(date, Format::Basic), "-00990131");
//!
//! // Precision survives the round trip independently of the value.
//! let time = parse_time("23:50:07.000", Format::Extended).unwrap();
//! assert_eq!(time_to_string(time, Format::Extended), "23:50:07.000");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `parse` | Date, time, datetime and offset parsing |
//! | `duration` | Duration parsing and rendering |
//! | `print` | Date, time, datetime and offset rendering |
//! | `config` | `Format` and resolved `ZoneInfo` |
//! | `scan` | Byte cursor shared by the grammars |
//! | `error` | Error types |

mod config;
mod duration;
mod error;
mod parse;
mod print;
mod scan;

pub use config::{Format, UTC_ZONE, ZoneInfo};
pub use duration::{duration_to_string, parse_duration};
pub use error::{FormatError, ParseError};
pub use parse::{parse_date, parse_naive_datetime, parse_offset, parse_time, parse_utc_datetime};
pub use print::{
    date_to_string, datetime_to_string, naive_datetime_to_string, offset_to_string,
    time_to_string, utc_datetime_to_string, zero_pad,
};
