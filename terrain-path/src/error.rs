//! Error types for the terrain-path library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building an elevation path.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// IO error when opening, seeking or reading a tile file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Latitude or longitude is outside the valid range.
    #[error("Invalid coordinate: lat={lat}, lon={lon} (valid: lat ±90°, lon ±180°)")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Neither naming convention resolved to an existing tile file.
    #[error(
        "Tile file not found: require a file named either {primary} or {fallback} in directory {}",
        .dir.display()
    )]
    TileFileNotFound {
        primary: String,
        fallback: String,
        dir: PathBuf,
    },

    /// Tile file exists but does not have the exact SRTM3 size.
    #[error(
        "Malformed tile file {}: {actual} bytes (expected {expected})",
        .path.display()
    )]
    MalformedTileFile {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}

/// Result type alias using [`TerrainError`].
pub type Result<T> = std::result::Result<T, TerrainError>;
