mod cli;
mod logging;

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use nongli::chinese::{Converter, Tables};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let custom = cli.tables.as_deref().map(load_tables).transpose()?;
    let converter = match &custom {
        Some(tables) => Converter::new(tables),
        None => Converter::builtin(),
    };

    match cli.command {
        Command::Solar(args) => {
            let (y, m, d) = args.date;
            let lunar = converter
                .from_solar(y, m, d)
                .with_context(|| format!("cannot convert solar date {y:04}-{m:02}-{d:02}"))?;
            println!("{}", lunar.full_string());
        }
        Command::Lunar(args) => {
            let lunar = converter
                .from_lunar(args.year, args.month, args.day)
                .with_context(|| {
                    format!(
                        "cannot convert lunisolar date {} month {} day {}",
                        args.year, args.month, args.day
                    )
                })?;
            info!(solar = %lunar.solar(), leap = lunar.month().is_leap(), "lunisolar date resolved");
            println!("{} {}", lunar.solar(), lunar.full_string());
        }
    }
    Ok(())
}

fn load_tables(path: &Path) -> Result<Tables> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read tables: {}", path.display()))?;
    let tables = Tables::from_toml(&text)
        .with_context(|| format!("invalid tables: {}", path.display()))?;
    info!(path = %path.display(), "calendar tables loaded");
    Ok(tables)
}
