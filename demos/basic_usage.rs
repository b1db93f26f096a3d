//! Basic usage example for cityinfo-rs
//!
//! This example demonstrates how to:
//! - Open the city database (the shipped sample, or `CITYINFO_DB`)
//! - Dump every city, walk them with early exit and look them up by position
//! - Pick name variants through settings
//! - Find the closest city on a grid over the clock's map

use cityinfo_core::prelude::*;

fn dump(city: Option<&City>) {
    println!(
        "{} {} {} {} {} {:.4} {:.4} {:.4} {:.4} {}",
        city.name().unwrap_or("-"),
        city.code().unwrap_or("-"),
        city.country().unwrap_or("-"),
        city.zone().unwrap_or("-"),
        city.locale().unwrap_or("-"),
        city.lat(),
        city.lng(),
        city.x(),
        city.y(),
        city.id(),
    );
}

fn main() -> Result<()> {
    println!("=== cityinfo-rs Basic Usage Example ===\n");

    let config = match std::env::var_os("CITYINFO_DB") {
        Some(path) => DbConfig::new(path),
        None => DbConfig::sample(),
    };
    println!("Using {}\n", config.path.display());

    let settings = MapSettings::new()
        .with("clock/uk_name", 1)
        .with("clock/mumbai_name", 0);
    let db = CityDb::builder()
        .config(config)
        .settings(settings)
        .build();

    // Example 1: All cities
    println!("--- Example 1: All cities ---");
    let cities = db.all()?;
    for city in &cities {
        dump(Some(city));
    }
    println!("Total: {}\n", cities.len());

    // Example 2: Walk until a condition holds
    println!("--- Example 2: First three cities ---");
    let mut seen = 0;
    db.for_each(|city| {
        dump(Some(city));
        seen += 1;
        seen < 3
    })?;
    println!();

    // Example 3: Positional lookup until the first miss
    println!("--- Example 3: Lookup by position ---");
    let mut id = 0;
    while let Some(city) = db.by_id(id)? {
        println!("{id}: {}", city.name());
        id += 1;
    }
    println!("Position {id} is past the end\n");

    // Example 4: Closest city on a grid
    println!("--- Example 4: Closest city grid ---");
    for i in 0..10 {
        for j in 0..10 {
            let (x, y) = (f64::from(i) / 10.0, f64::from(j) / 10.0);
            let city = db.find_closest(x, y)?;
            print!("({x:.1},{y:.1}) ");
            dump(city.as_ref());
        }
    }

    Ok(())
}
