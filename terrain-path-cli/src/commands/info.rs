use anyhow::{Context, Result};
use std::path::PathBuf;
use terrain_path::offset::{sample_index, TILE_FILE_SIZE};
use terrain_path::{Coordinate, TerrainError, TileReader, VOID_VALUE};

pub fn run(data_dir: Option<PathBuf>, lat: f64, lon: f64) -> Result<()> {
    let resolver = super::resolver(data_dir)?;
    let coord = Coordinate::new(lat, lon).context("Invalid coordinate")?;
    let tile = coord.tile();
    let index = sample_index(&coord);

    println!("Coordinate: {}", coord);
    println!("Tile: {}", tile);
    println!(
        "Coverage: {}{}-{}{}, {}{}-{}{}",
        if tile.lat >= 0 { "N" } else { "S" },
        tile.lat.abs(),
        if tile.lat + 1 >= 0 { "N" } else { "S" },
        (tile.lat + 1).abs(),
        if tile.lon >= 0 { "E" } else { "W" },
        tile.lon.abs(),
        if tile.lon + 1 >= 0 { "E" } else { "W" },
        (tile.lon + 1).abs()
    );
    println!("Directory: {}", resolver.data_dir().display());
    println!("Candidates: {}", resolver.candidates(tile).join(", "));
    println!();
    println!("Sample row: {}", index.row);
    println!("Sample column: {}", index.col);
    println!("Byte offset: {}", index.offset());
    println!();

    let path = match resolver.resolve(tile) {
        Ok(path) => path,
        Err(e @ TerrainError::TileFileNotFound { .. }) => {
            println!("Tile file: not found");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    println!("Tile file: {}", path.display());

    let size = std::fs::metadata(&path)?.len();
    println!(
        "File size: {} bytes ({})",
        size,
        if size == TILE_FILE_SIZE {
            "ok"
        } else {
            "unexpected"
        }
    );

    let mut reader = TileReader::open(&path).context("Failed to open tile")?;
    let elevation = reader
        .read_elevation(&coord)
        .context("Failed to read elevation")?;

    if elevation == VOID_VALUE {
        println!("Elevation: void");
    } else {
        println!("Elevation: {}m", elevation);
    }

    Ok(())
}
