mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::FloresConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = FloresConfig::load(cli.config.as_deref())?;
    let offset = config.clock.utc_offset(&cli.clock)?;
    let output = commands::Output { json: cli.json };

    match cli.command {
        Command::Today => commands::today(&offset, output),
        Command::FromGregorian { date } => commands::from_gregorian(&date, output),
        Command::ToGregorian { year, month, day } => {
            commands::to_gregorian(year, month, day, output)
        }
        Command::Months { year } => commands::months(year, output),
        Command::Watch { ticks } => {
            commands::watch(&offset, config.clock.tick_millis, ticks, output)
        }
    }
}
