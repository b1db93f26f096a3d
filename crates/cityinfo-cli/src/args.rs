use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for cityinfo-cli
#[derive(Debug, Parser)]
#[command(
    name = "cityinfo",
    version,
    about = "CLI for querying the world clock city database"
)]
pub struct CliArgs {
    /// Path to the city database (default: /usr/share/clock/wdb)
    #[arg(short = 'd', long = "db", env = "CITYINFO_DB", global = true)]
    pub db: Option<PathBuf>,

    /// JSON configuration file (database path, catalog domains)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// JSON object of integer settings used to pick name variants
    #[arg(short = 's', long = "settings", global = true)]
    pub settings: Option<PathBuf>,

    /// JSON translation catalog: { "domain": { "key": "translation" } }
    #[arg(long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the number of records
    Count,

    /// Dump every city
    All,

    /// Visit cities in order, optionally stopping after a number of them
    Each {
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Lookup a city by its position in the database
    Get {
        #[arg(allow_hyphen_values = true)]
        id: i32,
    },

    /// Find the city closest to a map position
    Closest {
        /// Horizontal map position in [0, 1]
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Vertical map position in [0, 1]
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },

    /// Closest city for every point of a grid over the map
    Grid {
        /// Grid spacing
        #[arg(long = "step", default_value_t = 0.1)]
        step: f64,
    },
}
