//! cityinfo-cli: Command-line interface for cityinfo-core
//!
//! This binary inspects the world clock city database from your terminal.
//! It prints the record count, dumps or walks all cities, looks a city up by
//! position and finds the city closest to a point of the clock's map.
//!
//! Usage examples
//! --------------
//!
//! - Count records
//!   $ cityinfo-cli count
//!
//! - Dump all cities of a custom database
//!   $ cityinfo-cli --db ./wdb all
//!
//! - First ten cities
//!   $ cityinfo-cli each --limit 10
//!
//! - City at position 42
//!   $ cityinfo-cli get 42
//!
//! - Closest city to the middle of the map
//!   $ cityinfo-cli closest 0.5 0.5
//!
//! Every city is printed on one line:
//! `name code country zone locale lat lng x y id`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use cityinfo_core::prelude::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let db = open_db(&args)?;

    match args.command {
        Commands::Count => {
            let stats = db.stats()?;
            println!("Records: {}", stats.records);
        }

        Commands::All => {
            for city in db.all()? {
                print_city(Some(&city));
            }
        }

        Commands::Each { limit: Some(0) } => {}

        Commands::Each { limit } => {
            let mut seen = 0usize;
            db.for_each(|city| {
                print_city(Some(city));
                seen += 1;
                limit.map_or(true, |n| seen < n)
            })?;
        }

        Commands::Get { id } => match db.by_id(id)? {
            Some(city) => print_city(Some(&city)),
            None => eprintln!("No city at position {id}"),
        },

        Commands::Closest { x, y } => match db.find_closest(x, y)? {
            Some(city) => print_city(Some(&city)),
            None => eprintln!("No city found near ({x}, {y})"),
        },

        Commands::Grid { step } => {
            if !(step > 0.0 && step <= 1.0) {
                bail!("grid step must be in (0, 1], got {step}");
            }
            let steps = (1.0 / step).ceil() as usize;
            for i in 0..steps {
                for j in 0..steps {
                    let (x, y) = (i as f64 * step, j as f64 * step);
                    let city = db.find_closest(x, y)?;
                    print_city(city.as_ref());
                }
            }
        }
    }

    Ok(())
}

fn open_db(args: &CliArgs) -> anyhow::Result<CityDb> {
    let mut config = match &args.config {
        Some(path) => DbConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => DbConfig::default(),
    };
    if let Some(db) = &args.db {
        config.path = db.clone();
    }
    log::debug!("using database {}", config.path.display());

    let mut builder = CityDb::builder().config(config);
    if let Some(path) = &args.settings {
        let settings = MapSettings::from_json_file(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        builder = builder.settings(settings);
    }
    if let Some(path) = &args.catalog {
        let catalog = MapCatalog::from_json_file(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        builder = builder.catalog(catalog);
    }

    Ok(builder.build())
}

/// Print a city the way the clock's test driver always did.
fn print_city(city: Option<&City>) {
    println!(
        "{} {} {} {} {} {:.6} {:.6} {:.6} {:.6} {}",
        city.name().unwrap_or("(null)"),
        city.code().unwrap_or("(null)"),
        city.country().unwrap_or("(null)"),
        city.zone().unwrap_or("(null)"),
        city.locale().unwrap_or("(null)"),
        city.lat(),
        city.lng(),
        city.x(),
        city.y(),
        city.id(),
    );
}
