use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use terrain_path::{Coordinate, ElevationPath, VOID_VALUE};

/// Victoria Harbour to Burrard Inlet, used when no points are given.
const DEMO_FLIGHT: [(f64, f64); 10] = [
    (48.424236, -123.383191), // Victoria Harbour
    (48.431202, -123.355085), // Victoria downtown
    (48.493261, -123.344507), // Mount Douglas
    (48.530120, -123.397746), // Elk Lake
    (48.612521, -123.443495), // Mount Newton
    (48.630709, -123.509374), // Saanich Inlet
    (49.263011, -123.248966), // UBC
    (49.281924, -123.119978), // Downtown Vancouver
    (49.277937, -122.918611), // Simon Fraser University
    (49.284007, -122.835490), // Burrard Inlet
];

#[derive(Serialize)]
struct PathPoint {
    #[serde(flatten)]
    coordinate: Coordinate,
    elevation: i16,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    void: bool,
}

pub fn run(
    data_dir: Option<PathBuf>,
    input: Option<PathBuf>,
    points: Vec<(f64, f64)>,
    lat_col: &str,
    lon_col: &str,
    json: bool,
) -> Result<()> {
    let builder = ElevationPath::new(super::resolver(data_dir)?);

    let raw = match input {
        Some(input) => read_csv(&input, lat_col, lon_col)?,
        None if points.is_empty() => DEMO_FLIGHT.to_vec(),
        None => points,
    };
    let coords = to_coordinates(&raw)?;
    tracing::info!(
        points = coords.len(),
        data_dir = %builder.resolver().data_dir().display(),
        "Computing elevation path"
    );

    let elevations = builder
        .elevations(&coords)
        .context("Failed to compute elevation path")?;

    if json {
        let response: Vec<PathPoint> = coords
            .into_iter()
            .zip(elevations)
            .map(|(coordinate, elevation)| PathPoint {
                coordinate,
                elevation,
                void: elevation == VOID_VALUE,
            })
            .collect();
        println!("{}", serde_json::to_string(&response)?);
    } else {
        for (coord, elevation) in coords.iter().zip(&elevations) {
            println!(
                "Elevation at lat-long {}, {} is: {}",
                coord.lat(),
                coord.lon(),
                elevation
            );
        }
    }

    Ok(())
}

/// Parse a `LAT,LON` command-line point.
pub fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{}'", s))?;
    let lat = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lon = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    Ok((lat, lon))
}

fn to_coordinates(raw: &[(f64, f64)]) -> Result<Vec<Coordinate>> {
    raw.iter()
        .enumerate()
        .map(|(i, &(lat, lon))| {
            Coordinate::new(lat, lon).with_context(|| format!("Invalid path point #{}", i + 1))
        })
        .collect()
}

fn read_csv(input: &Path, lat_col: &str, lon_col: &str) -> Result<Vec<(f64, f64)>> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file {}", input.display()))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    let mut points = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let lat: f64 = record
            .get(lat_idx)
            .context("Missing latitude")?
            .trim()
            .parse()
            .with_context(|| format!("Invalid latitude on row {}", i + 1))?;
        let lon: f64 = record
            .get(lon_idx)
            .context("Missing longitude")?
            .trim()
            .parse()
            .with_context(|| format!("Invalid longitude on row {}", i + 1))?;
        points.push((lat, lon));
    }

    Ok(points)
}
