use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Flores Solis calendar tool.
#[derive(Parser)]
#[command(
    name = "flores",
    version,
    about = "Convert between Gregorian and Flores Solis dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./flores.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub clock: ClockArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for the `[clock]` config section.
#[derive(clap::Args, Debug, Default)]
pub struct ClockArgs {
    /// UTC offset in hours, in quarter-hour steps (-12 to 14).
    #[arg(long = "utc-offset", global = true, allow_negative_numbers = true)]
    pub utc_offset: Option<f64>,

    /// Extra seconds added on top of the UTC offset.
    #[arg(long = "extra-seconds", global = true, allow_negative_numbers = true)]
    pub extra_seconds: Option<i64>,

    /// Add one hour for daylight saving time.
    #[arg(long, global = true)]
    pub dst: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show today's Flores Solis date.
    Today,
    /// Convert a Gregorian date (YYYY-MM-DD or MM/DD/YYYY).
    FromGregorian {
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Convert a Flores Solis date (month index 0-11).
    ToGregorian {
        #[arg(allow_negative_numbers = true)]
        year: i64,
        month: u8,
        day: u8,
    },
    /// List the months of a Flores Solis year.
    Months {
        #[arg(allow_negative_numbers = true)]
        year: i64,
    },
    /// Follow the clock, printing the date whenever it changes.
    Watch {
        /// Stop after this many ticks.
        #[arg(long)]
        ticks: Option<u64>,
    },
}
