use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use terrain_path::filename::filename_to_tile;
use terrain_path::offset::TILE_FILE_SIZE;

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let resolver = super::resolver(data_dir)?;
    let dir = resolver.data_dir();

    if !dir.exists() {
        anyhow::bail!("Data directory does not exist: {}", dir.display());
    }

    // Collect tile files, any extension case
    let mut tiles: Vec<_> = fs::read_dir(dir)
        .context("Failed to read data directory")?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_hgt = entry
                .path()
                .extension()
                .map(|e| e.eq_ignore_ascii_case("hgt"))
                .unwrap_or(false);
            let tile = filename_to_tile(&name)?;
            is_hgt.then_some((name, tile, entry.path()))
        })
        .collect();

    if tiles.is_empty() {
        println!("No .hgt files found in: {}", dir.display());
        return Ok(());
    }

    tiles.sort_by(|a, b| a.0.cmp(&b.0));

    let mut valid_count = 0;
    let mut malformed_count = 0;

    println!("{:<14} {:>9} {:>20}", "FILE", "STATUS", "COVERAGE");
    println!("{}", "-".repeat(45));

    for (name, tile, path) in &tiles {
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let status = if size == TILE_FILE_SIZE {
            valid_count += 1;
            "SRTM3"
        } else {
            malformed_count += 1;
            "MALFORMED"
        };

        let lat_prefix = if tile.lat >= 0 { "N" } else { "S" };
        let lon_prefix = if tile.lon >= 0 { "E" } else { "W" };
        let coverage = format!(
            "{}{:02}, {}{:03} +1°",
            lat_prefix,
            tile.lat.abs(),
            lon_prefix,
            tile.lon.abs()
        );

        println!("{:<14} {:>9} {:>20}", name, status, coverage);
    }

    println!();
    println!(
        "Total: {} tiles ({} valid, {} malformed)",
        tiles.len(),
        valid_count,
        malformed_count
    );

    Ok(())
}
