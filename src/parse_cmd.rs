//! Parse command: read ISO-8601 text and print its canonical form.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use isocal_calendar::Duration;
use isocal_iso8601::{
    date_to_string, datetime_to_string, duration_to_string, naive_datetime_to_string,
    parse_date, parse_duration, parse_naive_datetime, parse_time, parse_utc_datetime,
    time_to_string, utc_datetime_to_string,
};
use isocal_shift::shift_naive_datetime;

use crate::cli::{ParseArgs, ParseKind};
use crate::config::IsocalConfig;
use crate::convert;

/// Run the parse command.
pub fn run(args: ParseArgs, config: &IsocalConfig) -> Result<()> {
    let _cmd = info_span!("parse", kind = ?args.kind).entered();
    let format = convert::resolve_format(args.format.as_deref(), config)?;
    let text = args.text.as_str();

    match args.kind {
        ParseKind::Date => {
            let date = parse_date(text, format)
                .with_context(|| format!("failed to parse date {text:?}"))?;
            println!("{}", date_to_string(date, format));
        }
        ParseKind::Time => {
            let time = parse_time(text, format)
                .with_context(|| format!("failed to parse time {text:?}"))?;
            println!("{}", time_to_string(time, format));
        }
        ParseKind::NaiveDatetime => {
            let datetime = parse_naive_datetime(text, format)
                .with_context(|| format!("failed to parse datetime {text:?}"))?;
            println!("{}", naive_datetime_to_string(datetime, format));
        }
        ParseKind::UtcDatetime => {
            let (utc, offset) = parse_utc_datetime(text, format)
                .with_context(|| format!("failed to parse UTC datetime {text:?}"))?;
            debug!(offset, "normalised to UTC");
            let zone = convert::build_zone(&config.zone)?;
            let to_local = Duration::new().with_second(zone.total_offset());
            let local = shift_naive_datetime(utc, &to_local)
                .context("failed to convert to the configured zone")?;
            println!("utc:    {}", utc_datetime_to_string(utc, format));
            println!("offset: {offset}");
            println!("local:  {}", datetime_to_string(local, &zone, format)?);
        }
        ParseKind::Duration => {
            let duration = parse_duration(text)
                .with_context(|| format!("failed to parse duration {text:?}"))?;
            println!("{}", duration_to_string(&duration));
        }
    }
    Ok(())
}
