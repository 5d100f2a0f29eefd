//! # terrain-path - Flight Path Terrain Elevations
//!
//! Converts an ordered sequence of coordinates (a flight path) into the
//! ground elevation under each point, read from SRTM3 `.hgt` tile files.
//!
//! ## Features
//!
//! - **Few file opens**: consecutive points in the same tile share one open
//! - **Random access**: each sample is read with a single seek, no full-tile load
//! - **Two naming conventions**: `N48W124.HGT` and `N048W124.HGT`
//! - **Offline**: works with local `.hgt` files only
//!
//! ## Quick Start
//!
//! ```ignore
//! use terrain_path::{Coordinate, ElevationPath, TileResolver};
//!
//! let flight = [
//!     Coordinate::new(48.424236, -123.383191)?,
//!     Coordinate::new(48.431202, -123.355085)?,
//! ];
//!
//! let builder = ElevationPath::new(TileResolver::new("/data/srtm"));
//! for (coord, elevation) in flight.iter().zip(builder.elevations(&flight)?) {
//!     println!("{}: {}m", coord, elevation);
//! }
//! ```
//!
//! ## SRTM3 Data Format
//!
//! - 1201×1201 samples, 3 arc-second (~90m) resolution
//! - Rows run north to south, columns west to east
//! - Each sample is a 16-bit big-endian signed integer in meters, no header
//!
//! The special value -32768 indicates void (no data); it is returned as-is.

pub mod coord;
pub mod error;
pub mod filename;
pub mod offset;
pub mod path;
pub mod resolver;
pub mod tile;

// Re-export main types at crate root for convenience
pub use coord::{Coordinate, TileId};
pub use error::{Result, TerrainError};
pub use path::{elevation_path, ElevationPath};
pub use resolver::TileResolver;
pub use tile::{TileReader, VOID_VALUE};
