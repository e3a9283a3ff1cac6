//! Shift command: apply an ISO-8601 duration to a parsed value.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use isocal_iso8601::{
    date_to_string, duration_to_string, naive_datetime_to_string, parse_date, parse_duration,
    parse_naive_datetime, parse_time, time_to_string,
};
use isocal_shift::{shift_date, shift_naive_datetime, shift_time};

use crate::cli::{ShiftArgs, ShiftKind};
use crate::config::IsocalConfig;
use crate::convert;

/// Run the shift command.
pub fn run(args: ShiftArgs, config: &IsocalConfig) -> Result<()> {
    let _cmd = info_span!("shift", kind = ?args.kind).entered();
    let format = convert::resolve_format(args.format.as_deref(), config)?;
    let value = args.value.as_str();
    let duration = parse_duration(&args.duration)
        .with_context(|| format!("failed to parse duration {:?}", args.duration))?;
    debug!(duration = %duration_to_string(&duration), "applying");

    let rendered = match args.kind {
        ShiftKind::Date => {
            let date = parse_date(value, format)
                .with_context(|| format!("failed to parse date {value:?}"))?;
            let shifted = shift_date(date, &duration).context("failed to shift date")?;
            date_to_string(shifted, format)
        }
        ShiftKind::Time => {
            let time = parse_time(value, format)
                .with_context(|| format!("failed to parse time {value:?}"))?;
            let shifted = shift_time(time, &duration).context("failed to shift time")?;
            time_to_string(shifted, format)
        }
        ShiftKind::NaiveDatetime => {
            let datetime = parse_naive_datetime(value, format)
                .with_context(|| format!("failed to parse datetime {value:?}"))?;
            let shifted =
                shift_naive_datetime(datetime, &duration).context("failed to shift datetime")?;
            naive_datetime_to_string(shifted, format)
        }
    };
    println!("{rendered}");
    Ok(())
}
