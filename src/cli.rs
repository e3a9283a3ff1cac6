use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// isocal ISO-8601 calendar toolkit.
#[derive(Parser)]
#[command(
    name = "isocal",
    version,
    about = "Parse, format and shift proleptic Gregorian ISO-8601 values"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./isocal.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse ISO-8601 text and print its canonical form.
    Parse(ParseArgs),
    /// Shift a date, time or datetime by an ISO-8601 duration.
    Shift(ShiftArgs),
    /// Print calendar facts about a date.
    Info(InfoArgs),
}

/// Kind of value a `parse` call expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParseKind {
    Date,
    Time,
    NaiveDatetime,
    UtcDatetime,
    Duration,
}

/// Kind of value a `shift` call operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShiftKind {
    Date,
    Time,
    NaiveDatetime,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// What the text holds.
    #[arg(value_enum)]
    pub kind: ParseKind,

    /// Text to parse.
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Override the configured style (basic or extended).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// What the value holds.
    #[arg(value_enum)]
    pub kind: ShiftKind,

    /// Value to shift, as ISO-8601 text.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Duration to apply, e.g. P1M or -PT30H.
    #[arg(allow_hyphen_values = true)]
    pub duration: String,

    /// Override the configured style (basic or extended).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Date to describe, as ISO-8601 text.
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Override the configured first day of the week.
    #[arg(short, long = "week-start")]
    pub week_start: Option<String>,

    /// Override the configured style (basic or extended).
    #[arg(short, long)]
    pub format: Option<String>,
}
