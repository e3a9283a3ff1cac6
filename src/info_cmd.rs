//! Info command: calendar facts about a single date.

use anyhow::{Context, Result};
use tracing::info_span;

use isocal_calendar::{Era, UNIX_EPOCH_ISO_DAYS};
use isocal_iso8601::{date_to_string, parse_date};

use crate::cli::InfoArgs;
use crate::config::IsocalConfig;
use crate::convert;

fn era_label(era: Era) -> &'static str {
    match era {
        Era::BeforeCommonEra => "BCE",
        Era::CommonEra => "CE",
    }
}

/// Run the info command.
pub fn run(args: InfoArgs, config: &IsocalConfig) -> Result<()> {
    let _cmd = info_span!("info").entered();
    let format = convert::resolve_format(args.format.as_deref(), config)?;
    let week_start =
        convert::parse_week_start(args.week_start.as_deref().unwrap_or(&config.week_start))?;
    let date = parse_date(&args.date, format)
        .with_context(|| format!("failed to parse date {:?}", args.date))?;

    let day_of_week = date.day_of_week(week_start);
    let (year_of_era, era) = date.year_of_era();
    let (day_of_era, _) = date.day_of_era();

    println!("date:         {}", date_to_string(date, format));
    println!("iso days:     {}", date.iso_days());
    println!("unix days:    {}", date.iso_days() - UNIX_EPOCH_ISO_DAYS);
    println!(
        "weekday:      {} ({} of {}..={})",
        date.weekday(),
        day_of_week.number(),
        day_of_week.first(),
        day_of_week.last()
    );
    println!("day of year:  {}", date.day_of_year());
    println!("quarter:      {}", date.quarter_of_year());
    println!("leap year:    {}", date.in_leap_year());
    println!("month length: {}", date.days_in_month());
    println!("year of era:  {year_of_era} {}", era_label(era));
    println!("day of era:   {day_of_era} {}", era_label(era));
    Ok(())
}
