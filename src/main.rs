mod cli;
mod config;
mod convert;
mod date_cmd;
mod logging;
mod output;
mod query_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = config::load(cli.config.as_deref())?;
    let settings = convert::build_settings(&config, cli.format.as_deref())?;

    match cli.command {
        Command::ToJalaali(args) => date_cmd::to_jalaali(&args, &settings),
        Command::ToGregorian(args) => date_cmd::to_gregorian(&args, &settings),
        Command::Today => date_cmd::today(&settings),
        Command::DateObject(args) => date_cmd::date_object(&args, &settings),
        Command::Jdn(args) => date_cmd::jdn(&args, &settings),
        Command::IsValid(args) => query_cmd::is_valid(&args, &settings),
        Command::IsLeap(args) => query_cmd::is_leap(&args, &settings),
        Command::MonthLength(args) => query_cmd::month_length(&args, &settings),
    }
}
