//! Elevation profiles for ordered coordinate paths.
//!
//! A flight path usually spends many consecutive points inside the same
//! tile. [`ElevationPath`] splits the path into runs of consecutive same-tile
//! coordinates and opens each run's tile file once, reading every sample of
//! the run before moving on. Only one tile file is open at a time and nothing
//! is kept between calls.
//!
//! # Example
//!
//! ```ignore
//! use terrain_path::{Coordinate, ElevationPath, TileResolver};
//!
//! let path = [
//!     Coordinate::new(48.424236, -123.383191)?, // Victoria Harbour
//!     Coordinate::new(49.263011, -123.248966)?, // UBC
//! ];
//! let builder = ElevationPath::new(TileResolver::new("/data/srtm"));
//! let elevations = builder.elevations(&path)?;
//! assert_eq!(elevations.len(), path.len());
//! ```

use std::iter::FusedIterator;

use crate::coord::{Coordinate, TileId};
use crate::error::Result;
use crate::resolver::TileResolver;
use crate::tile::TileReader;

/// Iterator over maximal runs of consecutive coordinates sharing a tile.
///
/// Created by [`tile_runs`].
#[derive(Debug, Clone)]
pub struct TileRuns<'a> {
    remaining: &'a [Coordinate],
}

/// Split `coords` into runs of consecutive coordinates in the same tile.
///
/// Runs are yielded in input order together with their tile. A tile that is
/// left and re-entered later starts a new run.
///
/// ```
/// use terrain_path::{path::tile_runs, Coordinate, TileId};
///
/// let coords = [
///     Coordinate::new(48.1, -123.5).unwrap(),
///     Coordinate::new(48.2, -123.4).unwrap(),
///     Coordinate::new(49.3, -123.2).unwrap(),
///     Coordinate::new(48.3, -123.3).unwrap(),
/// ];
/// let runs: Vec<_> = tile_runs(&coords).map(|(tile, run)| (tile, run.len())).collect();
/// assert_eq!(
///     runs,
///     [
///         (TileId::new(48, -124), 2),
///         (TileId::new(49, -124), 1),
///         (TileId::new(48, -124), 1),
///     ]
/// );
/// ```
pub fn tile_runs(coords: &[Coordinate]) -> TileRuns<'_> {
    TileRuns { remaining: coords }
}

impl<'a> Iterator for TileRuns<'a> {
    type Item = (TileId, &'a [Coordinate]);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.remaining.first()?;
        let tile = first.tile();

        let len = self
            .remaining
            .iter()
            .position(|c| c.tile() != tile)
            .unwrap_or(self.remaining.len());

        let (run, rest) = self.remaining.split_at(len);
        self.remaining = rest;
        Some((tile, run))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.remaining.len()))
        }
    }
}

impl FusedIterator for TileRuns<'_> {}

/// Builds elevation profiles from tile files found by a [`TileResolver`].
#[derive(Debug, Clone)]
pub struct ElevationPath {
    resolver: TileResolver,
}

impl ElevationPath {
    /// Create a builder reading tiles through `resolver`.
    pub fn new(resolver: TileResolver) -> Self {
        Self { resolver }
    }

    /// The resolver used to locate tile files.
    pub fn resolver(&self) -> &TileResolver {
        &self.resolver
    }

    /// Get the elevation under every coordinate of `coords`.
    ///
    /// Returns one elevation per input coordinate, in input order. An empty
    /// path returns an empty profile without touching the file system.
    ///
    /// # Errors
    ///
    /// Fails on the first run whose tile cannot be resolved, opened or read;
    /// no partial profile is returned.
    pub fn elevations(&self, coords: &[Coordinate]) -> Result<Vec<i16>> {
        let mut elevations = Vec::with_capacity(coords.len());

        for (tile, run) in tile_runs(coords) {
            let path = self.resolver.resolve(tile)?;
            tracing::debug!(
                tile = %tile,
                file = %path.display(),
                points = run.len(),
                "Reading run"
            );

            let mut reader = TileReader::open(&path)?;
            for coord in run {
                elevations.push(reader.read_elevation(coord)?);
            }
        }

        Ok(elevations)
    }
}

/// Get the elevation profile of `coords` using tiles found by `resolver`.
///
/// Shorthand for [`ElevationPath::elevations`].
pub fn elevation_path(coords: &[Coordinate], resolver: &TileResolver) -> Result<Vec<i16>> {
    ElevationPath::new(resolver.clone()).elevations(coords)
}
