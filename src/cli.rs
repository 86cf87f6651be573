use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gregorian and Chinese lunisolar calendar converter.
#[derive(Parser)]
#[command(
    name = "nongli",
    version,
    about = "Convert between the Gregorian and Chinese lunisolar calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Load calendar tables from a TOML file instead of the built-in ones.
    #[arg(long, global = true)]
    pub tables: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Describe the lunisolar date of a Gregorian date.
    Solar(SolarArgs),
    /// Find the Gregorian date of a lunisolar date and describe it.
    Lunar(LunarArgs),
}

/// Arguments for the `solar` subcommand.
#[derive(clap::Args)]
pub struct SolarArgs {
    /// Gregorian date as YYYY-MM-DD.
    #[arg(value_parser = parse_date)]
    pub date: (i32, i32, i32),
}

/// Arguments for the `lunar` subcommand.
#[derive(clap::Args)]
pub struct LunarArgs {
    /// Lunisolar year.
    pub year: i32,

    /// Month 1..=12; negative for the intercalary month of that number.
    #[arg(allow_negative_numbers = true)]
    pub month: i32,

    /// Day of the month.
    pub day: i32,
}

fn parse_date(s: &str) -> Result<(i32, i32, i32), String> {
    let mut parts = s.splitn(3, '-').map(str::parse::<i32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(y)), Some(Ok(m)), Some(Ok(d))) => Ok((y, m, d)),
        _ => Err(format!("expected YYYY-MM-DD, got {s:?}")),
    }
}
