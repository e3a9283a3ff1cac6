use std::path::Path;

use anyhow::{Context, Result};
use isocal_iso8601::Format;
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "isocal.toml";

/// Top-level isocal configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsocalConfig {
    /// Text style: `basic` or `extended`.
    #[serde(default)]
    pub format: Format,

    /// First day of the week for weekday numbering.
    #[serde(default = "default_week_start")]
    pub week_start: String,

    /// Zone used to render local datetimes.
    #[serde(default)]
    pub zone: ZoneToml,
}

impl Default for IsocalConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            week_start: default_week_start(),
            zone: ZoneToml::default(),
        }
    }
}

impl IsocalConfig {
    /// Loads the config from `path`, or from `isocal.toml` if it exists, or
    /// falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Path::new(DEFAULT_CONFIG_PATH),
            None => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&toml_str).context("failed to parse TOML config")?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

fn default_week_start() -> String {
    "default".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneToml {
    #[serde(default = "default_zone_name")]
    pub name: String,
    #[serde(default = "default_zone_abbreviation")]
    pub abbreviation: String,
    #[serde(default)]
    pub utc_offset: i32,
    #[serde(default)]
    pub std_offset: i32,
}

impl Default for ZoneToml {
    fn default() -> Self {
        Self {
            name: default_zone_name(),
            abbreviation: default_zone_abbreviation(),
            utc_offset: 0,
            std_offset: 0,
        }
    }
}

fn default_zone_name() -> String {
    "Etc/UTC".to_string()
}
fn default_zone_abbreviation() -> String {
    "UTC".to_string()
}
