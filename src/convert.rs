//! Pure conversion functions: TOML config strings -> crate API types.

use anyhow::{Result, bail};

use isocal_calendar::{SECONDS_PER_DAY, StartingOn};
use isocal_iso8601::{Format, ZoneInfo};

use crate::config::{IsocalConfig, ZoneToml};

/// Parses a text style name into a [`Format`].
pub fn parse_format(s: &str) -> Result<Format> {
    match s.to_lowercase().as_str() {
        "basic" => Ok(Format::Basic),
        "extended" => Ok(Format::Extended),
        other => bail!("unknown format: {other:?}"),
    }
}

/// Parses a weekday name (or `default`) into a [`StartingOn`].
pub fn parse_week_start(s: &str) -> Result<StartingOn> {
    match s.parse::<StartingOn>() {
        Ok(starting_on) => Ok(starting_on),
        Err(_) => bail!("unknown week start: {s:?}"),
    }
}

/// Picks the CLI override if given, otherwise the configured format.
pub fn resolve_format(flag: Option<&str>, config: &IsocalConfig) -> Result<Format> {
    match flag {
        Some(name) => parse_format(name),
        None => Ok(config.format),
    }
}

/// Builds a [`ZoneInfo`] from the TOML zone table.
pub fn build_zone(zone: &ZoneToml) -> Result<ZoneInfo> {
    let total = i64::from(zone.utc_offset) + i64::from(zone.std_offset);
    if total.abs() >= SECONDS_PER_DAY {
        bail!(
            "zone {:?} offset of {total} seconds must be less than a day",
            zone.name
        );
    }
    Ok(ZoneInfo::new(
        &zone.name,
        &zone.abbreviation,
        zone.utc_offset,
        zone.std_offset,
    ))
}
