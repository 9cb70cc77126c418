use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gregorian / Jalaali calendar converter.
#[derive(Parser)]
#[command(
    name = "jalaali",
    version,
    about = "Convert dates between the Gregorian and Jalaali calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./jalaali.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override output format from config ("text" or "json").
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to Jalaali.
    #[command(allow_negative_numbers = true)]
    ToJalaali(GregorianArgs),
    /// Convert a Jalaali date to Gregorian.
    #[command(allow_negative_numbers = true)]
    ToGregorian(JalaaliArgs),
    /// Print today's local date in the Jalaali calendar.
    Today,
    /// Build the Gregorian moment of a Jalaali date and time of day.
    #[command(allow_negative_numbers = true)]
    DateObject(DateObjectArgs),
    /// Print the Julian Day Number of a Jalaali date.
    #[command(allow_negative_numbers = true)]
    Jdn(JalaaliArgs),
    /// Check whether a Jalaali date exists.
    #[command(allow_negative_numbers = true)]
    IsValid(JalaaliArgs),
    /// Check whether a Jalaali year is a leap year.
    #[command(allow_negative_numbers = true)]
    IsLeap(YearArgs),
    /// Print the number of days in a Jalaali month.
    #[command(allow_negative_numbers = true)]
    MonthLength(MonthArgs),
}

/// A Gregorian year, month and day.
#[derive(clap::Args)]
pub struct GregorianArgs {
    pub year: i32,
    /// Month (1..=12).
    pub month: i32,
    pub day: i32,
}

/// A Jalaali year, month and day.
#[derive(clap::Args)]
pub struct JalaaliArgs {
    pub year: i32,
    /// Month (1..=12).
    pub month: i32,
    pub day: i32,
}

/// Arguments for the `date-object` subcommand.
#[derive(clap::Args)]
pub struct DateObjectArgs {
    #[command(flatten)]
    pub date: JalaaliArgs,

    /// Hour; values past 23 roll into the next day.
    #[arg(long, default_value_t = 0)]
    pub hour: i32,

    #[arg(long, default_value_t = 0)]
    pub minute: i32,

    #[arg(long, default_value_t = 0)]
    pub second: i32,

    #[arg(long, default_value_t = 0)]
    pub millisecond: i32,
}

/// A Jalaali year.
#[derive(clap::Args)]
pub struct YearArgs {
    pub year: i32,
}

/// A Jalaali year and month.
#[derive(clap::Args)]
pub struct MonthArgs {
    pub year: i32,
    /// Month (1..=12).
    pub month: i32,
}
