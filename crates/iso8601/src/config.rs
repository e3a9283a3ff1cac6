//! Formatting options and resolved zone data.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// ISO-8601 textual style.
///
/// `Extended` separates fields with `-` and `:`; `Basic` omits the
/// separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `YYYYMMDD`, `HHMMSS`, `+HHMM`.
    Basic,
    /// `YYYY-MM-DD`, `HH:MM:SS`, `+HH:MM`.
    #[default]
    Extended,
}

impl Format {
    pub(crate) fn is_extended(self) -> bool {
        self == Format::Extended
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Format::Basic),
            "extended" => Ok(Format::Extended),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Basic => f.write_str("basic"),
            Format::Extended => f.write_str("extended"),
        }
    }
}

/// Name of the zone rendered as `Z` when its offset is zero.
pub const UTC_ZONE: &str = "Etc/UTC";

/// A zone already resolved to offsets for the instant being formatted.
///
/// Looking a zone name up in a time-zone database happens elsewhere; the
/// formatter only consumes the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneInfo {
    time_zone: String,
    zone_abbr: String,
    utc_offset: i32,
    std_offset: i32,
}

impl ZoneInfo {
    /// Creates a resolved zone.
    ///
    /// # Arguments
    ///
    /// * `time_zone` - Zone name, e.g. `Europe/Berlin`.
    /// * `zone_abbr` - Abbreviation, e.g. `CET`.
    /// * `utc_offset` - Standard offset from UTC in seconds.
    /// * `std_offset` - Daylight-saving adjustment in seconds.
    pub fn new(
        time_zone: impl Into<String>,
        zone_abbr: impl Into<String>,
        utc_offset: i32,
        std_offset: i32,
    ) -> Self {
        Self {
            time_zone: time_zone.into(),
            zone_abbr: zone_abbr.into(),
            utc_offset,
            std_offset,
        }
    }

    /// `Etc/UTC` with zero offsets.
    pub fn utc() -> Self {
        Self::new(UTC_ZONE, "UTC", 0, 0)
    }

    /// Returns the zone name.
    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    /// Returns the zone abbreviation.
    pub fn zone_abbr(&self) -> &str {
        &self.zone_abbr
    }

    /// Returns the standard offset in seconds.
    pub fn utc_offset(&self) -> i32 {
        self.utc_offset
    }

    /// Returns the daylight-saving adjustment in seconds.
    pub fn std_offset(&self) -> i32 {
        self.std_offset
    }

    /// Returns the combined offset in seconds.
    pub fn total_offset(&self) -> i64 {
        i64::from(self.utc_offset) + i64::from(self.std_offset)
    }

    /// Returns whether this is the `Etc/UTC` zone.
    pub fn is_utc(&self) -> bool {
        self.time_zone == UTC_ZONE
    }
}

impl Default for ZoneInfo {
    fn default() -> Self {
        Self::utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_default_is_extended() {
        assert_eq!(Format::default(), Format::Extended);
    }

    #[test]
    fn format_from_str() {
        assert_eq!("basic".parse::<Format>().unwrap(), Format::Basic);
        assert_eq!("Extended".parse::<Format>().unwrap(), Format::Extended);
        assert_eq!(
            "compact".parse::<Format>().unwrap_err(),
            "unknown format 'compact'"
        );
    }

    #[test]
    fn format_display_roundtrips() {
        for format in [Format::Basic, Format::Extended] {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn zone_accessors() {
        let zone = ZoneInfo::new("Europe/Berlin", "CEST", 3600, 3600);
        assert_eq!(zone.time_zone(), "Europe/Berlin");
        assert_eq!(zone.zone_abbr(), "CEST");
        assert_eq!(zone.total_offset(), 7200);
        assert!(!zone.is_utc());
        assert!(ZoneInfo::default().is_utc());
    }
}
