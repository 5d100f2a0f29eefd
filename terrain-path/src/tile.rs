//! SRTM3 tile file reading.
//!
//! This module provides [`TileReader`], a scoped handle on one `.hgt` file
//! that decodes individual elevation samples by seeking to them.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::coord::Coordinate;
use crate::error::{Result, TerrainError};
use crate::offset::{sample_offset, BYTES_PER_SAMPLE, TILE_FILE_SIZE};

/// Value indicating no data (void) in SRTM files
pub const VOID_VALUE: i16 = -32768;

/// An open SRTM3 tile file.
///
/// The file is closed when the reader is dropped, so a reader should live
/// only as long as the run of coordinates it serves.
///
/// # Example
///
/// ```ignore
/// use terrain_path::{Coordinate, TileReader};
///
/// let mut tile = TileReader::open("N48W124.HGT")?;
/// let elevation = tile.read_elevation(&Coordinate::new(48.424236, -123.383191)?)?;
/// println!("Elevation: {}m", elevation);
/// ```
#[derive(Debug)]
pub struct TileReader {
    file: File,
    path: PathBuf,
}

impl TileReader {
    /// Open a tile file and check that it is exactly SRTM3-sized.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or its size read
    /// - The file is not exactly 2,884,802 bytes
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;

        let size = file.metadata()?.len();
        if size != TILE_FILE_SIZE {
            return Err(TerrainError::MalformedTileFile {
                path,
                expected: TILE_FILE_SIZE,
                actual: size,
            });
        }

        Ok(Self { file, path })
    }

    /// Read the elevation sample for `coord`.
    ///
    /// The caller is responsible for only asking for coordinates in this
    /// tile; the sample is located from the coordinate alone.
    ///
    /// # Returns
    ///
    /// The elevation in meters, or [`VOID_VALUE`] (-32768) if the tile has no
    /// data there.
    pub fn read_elevation(&mut self, coord: &Coordinate) -> Result<i16> {
        let offset = sample_offset(coord);
        self.file.seek(SeekFrom::Start(offset))?;

        let mut sample = [0u8; BYTES_PER_SAMPLE as usize];
        self.file.read_exact(&mut sample)?;

        // Stored big-endian on disk whatever the host order
        let elevation = i16::from_be_bytes(sample);
        tracing::trace!(coord = %coord, offset, elevation, "Read sample");
        Ok(elevation)
    }

    /// Read the elevation samples for `coords`, in order.
    pub fn read_elevations(&mut self, coords: &[Coordinate]) -> Result<Vec<i16>> {
        coords.iter().map(|c| self.read_elevation(c)).collect()
    }

    /// Path this reader was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open `path`, read one sample per coordinate, and close it again.
pub fn read_elevations<P: AsRef<Path>>(path: P, coords: &[Coordinate]) -> Result<Vec<i16>> {
    TileReader::open(path)?.read_elevations(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::SAMPLES_PER_SIDE;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn put(data: &mut [u8], row: u64, col: u64, elevation: i16) {
        let offset = ((row * SAMPLES_PER_SIDE + col) * 2) as usize;
        data[offset..offset + 2].copy_from_slice(&elevation.to_be_bytes());
    }

    /// Create a test SRTM3 file with known elevation values
    fn create_test_tile_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();

        let mut data = vec![0u8; TILE_FILE_SIZE as usize];
        put(&mut data, 0, 0, 1000); // northwest corner
        put(&mut data, 600, 600, 500); // center
        put(&mut data, 1200, 1200, 100); // southeast corner
        put(&mut data, 1200, 0, -12); // southwest corner, below sea level
        put(&mut data, 300, 900, VOID_VALUE);

        file.write_all(&data).unwrap();
        file
    }

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_open_valid_size() {
        let file = create_test_tile_file();
        let tile = TileReader::open(file.path()).unwrap();
        assert_eq!(tile.path(), file.path());
    }

    #[test]
    fn test_invalid_file_size() {
        for size in [0usize, 1000, TILE_FILE_SIZE as usize - 1, TILE_FILE_SIZE as usize + 1] {
            let mut file = NamedTempFile::new().unwrap();
            file.write_all(&vec![0u8; size]).unwrap();

            match TileReader::open(file.path()) {
                Err(TerrainError::MalformedTileFile {
                    path,
                    expected,
                    actual,
                }) => {
                    assert_eq!(path, file.path());
                    assert_eq!(expected, 2_884_802);
                    assert_eq!(actual, size as u64);
                }
                other => panic!("Expected MalformedTileFile for {size} bytes, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = TileReader::open(dir.path().join("N48W124.HGT"));
        assert!(matches!(result, Err(TerrainError::Io(_))));
    }

    #[test]
    fn test_read_corners_and_center() {
        let file = create_test_tile_file();
        let mut tile = TileReader::open(file.path()).unwrap();

        assert_eq!(tile.read_elevation(&coord(35.99999, 138.0)).unwrap(), 1000);
        assert_eq!(tile.read_elevation(&coord(35.5, 138.5)).unwrap(), 500);
        assert_eq!(tile.read_elevation(&coord(35.0, 138.99999)).unwrap(), 100);
        assert_eq!(tile.read_elevation(&coord(35.0, 138.0)).unwrap(), -12);
    }

    #[test]
    fn test_void_passes_through() {
        let file = create_test_tile_file();
        let mut tile = TileReader::open(file.path()).unwrap();
        assert_eq!(
            tile.read_elevation(&coord(35.75, 138.75)).unwrap(),
            VOID_VALUE
        );
    }

    #[test]
    fn test_read_out_of_order() {
        let file = create_test_tile_file();
        let coords = [
            coord(35.0, 138.99999),
            coord(35.99999, 138.0),
            coord(35.5, 138.5),
            coord(35.99999, 138.0),
        ];
        let elevations = read_elevations(file.path(), &coords).unwrap();
        assert_eq!(elevations, vec![100, 1000, 500, 1000]);
    }

    #[test]
    fn test_read_empty() {
        let file = create_test_tile_file();
        assert!(read_elevations(file.path(), &[]).unwrap().is_empty());
    }
}
