//! Mapping coordinates to sample positions inside a tile file.
//!
//! An SRTM3 tile is a 1201 × 1201 grid with one sample every 3 arc-seconds.
//! Row 0 is the tile's northern edge and column 0 its western edge, so
//! latitude has to be inverted to find the row.

use crate::coord::Coordinate;

/// Number of samples per row/column of an SRTM3 tile
pub const SAMPLES_PER_SIDE: u64 = 1201;

/// Arc-seconds in one degree
pub const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// Arc-seconds between adjacent samples
pub const ARCSECONDS_PER_SAMPLE: f64 = 3.0;

/// Bytes per stored sample (16-bit big-endian)
pub const BYTES_PER_SAMPLE: u64 = 2;

/// File size of an SRTM3 tile: 1201 × 1201 × 2 bytes
pub const TILE_FILE_SIZE: u64 = SAMPLES_PER_SIDE * SAMPLES_PER_SIDE * BYTES_PER_SAMPLE; // 2,884,802 bytes

/// Grid position of a sample inside its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleIndex {
    /// Row index (0 = north edge)
    pub row: u64,
    /// Column index (0 = west edge)
    pub col: u64,
}

impl SampleIndex {
    /// Byte offset of this sample from the start of the tile file.
    pub fn offset(&self) -> u64 {
        (self.row * SAMPLES_PER_SIDE + self.col) * BYTES_PER_SAMPLE
    }
}

/// Locate the sample nearest to `coord` within its tile.
///
/// Positions are snapped to the grid with round-half-to-even, so a
/// coordinate exactly between two samples picks the even-numbered one.
/// Fractions are `value - floor(value)`, so latitude 90.0 and longitude
/// 180.0 have a zero fraction and read the bottom row / first column of
/// tiles 89 / 179.
///
/// # Examples
///
/// ```
/// use terrain_path::{offset::sample_index, Coordinate};
///
/// // Southwest corner: bottom row, first column
/// let sw = Coordinate::new(48.0, -124.0).unwrap();
/// let idx = sample_index(&sw);
/// assert_eq!((idx.row, idx.col), (1200, 0));
/// ```
pub fn sample_index(coord: &Coordinate) -> SampleIndex {
    let lat_steps = grid_steps(coord.lat() - coord.lat().floor());
    let lon_steps = grid_steps(coord.lon() - coord.lon().floor());

    SampleIndex {
        row: SAMPLES_PER_SIDE - 1 - lat_steps,
        col: lon_steps,
    }
}

/// Byte offset of the sample for `coord` within its tile file.
///
/// ```
/// use terrain_path::{offset::sample_offset, Coordinate};
///
/// let c = Coordinate::new(48.424236, -123.383191).unwrap();
/// assert_eq!(sample_offset(&c), ((692 - 1) * 1201 + 740) * 2);
/// ```
pub fn sample_offset(coord: &Coordinate) -> u64 {
    sample_index(coord).offset()
}

/// Whole sample steps from the tile's south or west edge for a fraction of
/// a degree in `[0, 1)`.
fn grid_steps(fraction: f64) -> u64 {
    let arcseconds = fraction * ARCSECONDS_PER_DEGREE;
    (arcseconds / ARCSECONDS_PER_SAMPLE).round_ties_even() as u64
}
