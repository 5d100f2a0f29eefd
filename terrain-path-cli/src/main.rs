use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Terrain elevation profiles for flight paths
#[derive(Parser)]
#[command(name = "terrain-path")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing .hgt files (defaults to the working directory)
    #[arg(short, long, env = "TERRAIN_PATH_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Log each tile run to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the terrain elevation under each point of a flight path
    Path {
        /// Input CSV file with one point per row
        #[arg(short, long, conflicts_with = "point")]
        input: Option<PathBuf>,

        /// A path point as LAT,LON (repeatable, in flight order)
        #[arg(short, long, allow_hyphen_values = true, value_parser = commands::path::parse_point)]
        point: Vec<(f64, f64)>,

        /// Column name for latitude (CSV only)
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude (CSV only)
        #[arg(long, default_value = "lon")]
        lon_col: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show which tile, file and sample a coordinate maps to
    Info {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// List tile files in the data directory
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results
    let default_filter = if cli.verbose {
        "terrain_path=debug"
    } else {
        "terrain_path=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Path {
            input,
            point,
            lat_col,
            lon_col,
            json,
        } => commands::path::run(cli.data_dir, input, point, &lat_col, &lon_col, json),
        Commands::Info { lat, lon } => commands::info::run(cli.data_dir, lat, lon),
        Commands::List => commands::list::run(cli.data_dir),
    }
}
