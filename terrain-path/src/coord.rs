//! Geographic coordinates and the tiles they fall in.

use std::fmt;

use crate::error::{Result, TerrainError};

/// A validated point on the surface of the earth, in decimal degrees.
///
/// The only way to build one is [`Coordinate::new`], so every value in
/// circulation is inside `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range (or NaN) values.
    ///
    /// # Examples
    ///
    /// ```
    /// use terrain_path::Coordinate;
    ///
    /// let victoria = Coordinate::new(48.424236, -123.383191).unwrap();
    /// assert_eq!(victoria.lat(), 48.424236);
    ///
    /// assert!(Coordinate::new(90.5, 0.0).is_err());
    /// assert!(Coordinate::new(0.0, -180.5).is_err());
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(TerrainError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// The tile this coordinate's elevation sample lives in.
    pub fn tile(&self) -> TileId {
        TileId::of(self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// Identifies a 1°×1° tile by its southwest corner.
///
/// Two coordinates belong to the same tile file exactly when their
/// `TileId`s are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    /// Southwest corner latitude (integer degrees)
    pub lat: i32,
    /// Southwest corner longitude (integer degrees)
    pub lon: i32,
}

impl TileId {
    /// Create a tile id from its southwest corner.
    pub fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    /// Derive the tile for a coordinate.
    ///
    /// Latitude 90.0 and longitude 180.0 have no tile of their own; they
    /// belong to the tiles at 89 and 179.
    ///
    /// ```
    /// use terrain_path::{Coordinate, TileId};
    ///
    /// let c = Coordinate::new(48.424236, -123.383191).unwrap();
    /// assert_eq!(TileId::of(&c), TileId::new(48, -124));
    ///
    /// let pole = Coordinate::new(90.0, 180.0).unwrap();
    /// assert_eq!(TileId::of(&pole), TileId::new(89, 179));
    /// ```
    pub fn of(coord: &Coordinate) -> Self {
        let lat = if coord.lat == 90.0 {
            89
        } else {
            coord.lat.floor() as i32
        };
        let lon = if coord.lon == 180.0 {
            179
        } else {
            coord.lon.floor() as i32
        };
        Self { lat, lon }
    }

    /// Whether `coord` falls in this tile.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        Self::of(coord) == *self
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:02}{}{:03}",
            if self.lat >= 0 { 'N' } else { 'S' },
            self.lat.abs(),
            if self.lon >= 0 { 'E' } else { 'W' },
            self.lon.abs()
        )
    }
}
