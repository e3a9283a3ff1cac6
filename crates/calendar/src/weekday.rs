//! Weekday numbering and era markers.

use std::fmt;
use std::str::FromStr;

/// The weekday that day-of-week numbering starts from.
///
/// `Default` numbers weeks the ISO way, Monday = 1 through Sunday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StartingOn {
    /// ISO numbering, identical to `Monday`.
    #[default]
    Default,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl StartingOn {
    /// Offset added to an ISO day count before reducing modulo 7.
    ///
    /// Day 0 (`0000-01-01`) is a Saturday, which fixes every constant here.
    pub(crate) fn day_offset(self) -> i64 {
        match self {
            StartingOn::Default | StartingOn::Monday => 5,
            StartingOn::Tuesday => 4,
            StartingOn::Wednesday => 3,
            StartingOn::Thursday => 2,
            StartingOn::Friday => 1,
            StartingOn::Saturday => 0,
            StartingOn::Sunday => 6,
        }
    }
}

impl FromStr for StartingOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(StartingOn::Default),
            "monday" => Ok(StartingOn::Monday),
            "tuesday" => Ok(StartingOn::Tuesday),
            "wednesday" => Ok(StartingOn::Wednesday),
            "thursday" => Ok(StartingOn::Thursday),
            "friday" => Ok(StartingOn::Friday),
            "saturday" => Ok(StartingOn::Saturday),
            "sunday" => Ok(StartingOn::Sunday),
            other => Err(format!("unknown starting weekday: {other:?}")),
        }
    }
}

/// A day-of-week number together with the bounds of its numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfWeek {
    number: u8,
}

impl DayOfWeek {
    pub(crate) fn new(number: u8) -> Self {
        Self { number }
    }

    /// Returns the weekday number (1..=7).
    pub fn number(self) -> u8 {
        self.number
    }

    /// Returns the first weekday number, always 1.
    pub fn first(self) -> u8 {
        1
    }

    /// Returns the last weekday number, always 7.
    pub fn last(self) -> u8 {
        7
    }

    /// Interprets this number under ISO (Monday-first) numbering.
    pub fn iso_weekday(self) -> Weekday {
        Weekday::from_iso_number(self.number)
    }
}

/// A named day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Maps 1..=7 to Monday..=Sunday; out-of-range numbers wrap modulo 7.
    pub fn from_iso_number(number: u8) -> Self {
        match (u16::from(number) + 6) % 7 {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// The two ISO eras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Era {
    /// Year 0 and earlier.
    BeforeCommonEra = 0,
    /// Year 1 and later.
    CommonEra = 1,
}

impl Era {
    /// Returns the era number: 0 before the common era, 1 within it.
    pub fn number(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_monday() {
        assert_eq!(
            StartingOn::Default.day_offset(),
            StartingOn::Monday.day_offset()
        );
        assert_eq!(StartingOn::default(), StartingOn::Default);
    }

    #[test]
    fn offsets_are_distinct_for_named_days() {
        let named = [
            StartingOn::Monday,
            StartingOn::Tuesday,
            StartingOn::Wednesday,
            StartingOn::Thursday,
            StartingOn::Friday,
            StartingOn::Saturday,
            StartingOn::Sunday,
        ];
        let mut offsets: Vec<i64> = named.iter().map(|s| s.day_offset()).collect();
        offsets.sort_unstable();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn parse_starting_on() {
        assert_eq!("Sunday".parse::<StartingOn>().unwrap(), StartingOn::Sunday);
        assert_eq!("default".parse::<StartingOn>().unwrap(), StartingOn::Default);
        assert!("someday".parse::<StartingOn>().is_err());
    }

    #[test]
    fn weekday_from_number() {
        assert_eq!(Weekday::from_iso_number(1), Weekday::Monday);
        assert_eq!(Weekday::from_iso_number(7), Weekday::Sunday);
        assert_eq!(Weekday::from_iso_number(8), Weekday::Monday);
        assert_eq!(Weekday::from_iso_number(0), Weekday::Sunday);
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
    }

    #[test]
    fn day_of_week_bounds() {
        let dow = DayOfWeek::new(3);
        assert_eq!(dow.number(), 3);
        assert_eq!((dow.first(), dow.last()), (1, 7));
        assert_eq!(dow.iso_weekday(), Weekday::Wednesday);
    }

    #[test]
    fn era_numbers() {
        assert_eq!(Era::BeforeCommonEra.number(), 0);
        assert_eq!(Era::CommonEra.number(), 1);
    }
}
