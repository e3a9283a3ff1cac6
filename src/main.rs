mod cli;
mod config;
mod convert;
mod info_cmd;
mod logging;
mod parse_cmd;
mod shift_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::IsocalConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = IsocalConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Parse(args) => parse_cmd::run(args, &config),
        Command::Shift(args) => shift_cmd::run(args, &config),
        Command::Info(args) => info_cmd::run(args, &config),
    }
}
