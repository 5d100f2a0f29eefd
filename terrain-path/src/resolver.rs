//! Locating tile files on disk.
//!
//! [`TileResolver`] maps a [`TileId`] to an existing `.hgt` file inside a
//! single search directory, trying the 2-digit latitude name first and the
//! 3-digit latitude name second.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::coord::TileId;
use crate::error::{Result, TerrainError};
use crate::filename::{tile_filename, widened_filename};

/// Environment variable naming the tile search directory.
pub const DATA_DIR_ENV: &str = "TERRAIN_PATH_DATA_DIR";

/// Resolves tiles to files inside one search directory.
///
/// # Example
///
/// ```ignore
/// use terrain_path::{TileId, TileResolver};
///
/// let resolver = TileResolver::new("/data/srtm");
/// let path = resolver.resolve(TileId::new(48, -124))?;
/// ```
#[derive(Debug, Clone)]
pub struct TileResolver {
    /// Directory containing .hgt files.
    data_dir: PathBuf,
}

impl TileResolver {
    /// Create a resolver searching `data_dir`.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a resolver searching the process working directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Create a resolver from the `TERRAIN_PATH_DATA_DIR` environment
    /// variable, falling back to the working directory when it is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var_os(DATA_DIR_ENV))
    }

    fn from_env_value(value: Option<OsString>) -> Result<Self> {
        match value {
            Some(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => Self::current_dir(),
        }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Filenames probed for `tile`, in order.
    ///
    /// ```
    /// use terrain_path::{TileId, TileResolver};
    ///
    /// let resolver = TileResolver::new(".");
    /// assert_eq!(
    ///     resolver.candidates(TileId::new(48, -124)),
    ///     ["N48W124.HGT", "N48W124.hgt", "N048W124.HGT", "N048W124.hgt"]
    /// );
    /// ```
    pub fn candidates(&self, tile: TileId) -> [String; 4] {
        let primary = tile_filename(tile);
        let fallback = widened_filename(&primary);
        let primary_lower = lowercase_extension(&primary);
        let fallback_lower = lowercase_extension(&fallback);
        [primary, primary_lower, fallback, fallback_lower]
    }

    /// Find the file holding `tile`.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::TileFileNotFound`] naming both filename
    /// conventions and the search directory if no candidate exists.
    pub fn resolve(&self, tile: TileId) -> Result<PathBuf> {
        let candidates = self.candidates(tile);
        for (i, name) in candidates.iter().enumerate() {
            let path = self.data_dir.join(name);
            if path.is_file() {
                if i >= 2 {
                    tracing::debug!(
                        tile = %tile,
                        file = %name,
                        "Using 3-digit latitude tile filename"
                    );
                }
                return Ok(path);
            }
        }

        let [primary, _, fallback, _] = candidates;
        Err(TerrainError::TileFileNotFound {
            primary,
            fallback,
            dir: self.data_dir.clone(),
        })
    }
}

fn lowercase_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{}.{}", stem, ext.to_ascii_lowercase()),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_resolve_standard_name() {
        let tmp = TempDir::new().unwrap();
        let expected = touch(tmp.path(), "N48W124.HGT");

        let resolver = TileResolver::new(tmp.path());
        assert_eq!(resolver.resolve(TileId::new(48, -124)).unwrap(), expected);
    }

    #[test]
    fn test_resolve_lowercase_extension() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "N48W124.hgt");

        let resolver = TileResolver::new(tmp.path());
        let path = resolver.resolve(TileId::new(48, -124)).unwrap();
        assert!(path.is_file());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .eq_ignore_ascii_case("N48W124.HGT"));
    }

    #[test]
    fn test_resolve_widened_fallback() {
        let tmp = TempDir::new().unwrap();
        let expected = touch(tmp.path(), "N048W124.HGT");

        let resolver = TileResolver::new(tmp.path());
        let path = resolver.resolve(TileId::new(48, -124)).unwrap();
        assert!(path.is_file());
        assert_eq!(
            path.file_name().unwrap().to_string_lossy().to_ascii_uppercase(),
            expected.file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn test_resolve_prefers_standard_name() {
        let tmp = TempDir::new().unwrap();
        let standard = touch(tmp.path(), "N48W124.HGT");
        touch(tmp.path(), "N048W124.HGT");

        let resolver = TileResolver::new(tmp.path());
        assert_eq!(resolver.resolve(TileId::new(48, -124)).unwrap(), standard);
    }

    #[test]
    fn test_resolve_ignores_directories() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("N48W124.HGT")).unwrap();

        let resolver = TileResolver::new(tmp.path());
        assert!(resolver.resolve(TileId::new(48, -124)).is_err());
    }

    #[test]
    fn test_resolve_missing() {
        let tmp = TempDir::new().unwrap();
        let resolver = TileResolver::new(tmp.path());

        match resolver.resolve(TileId::new(48, -124)) {
            Err(TerrainError::TileFileNotFound {
                primary,
                fallback,
                dir,
            }) => {
                assert_eq!(primary, "N48W124.HGT");
                assert_eq!(fallback, "N048W124.HGT");
                assert_eq!(dir, tmp.path());
            }
            other => panic!("Expected TileFileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_candidates_southern_eastern() {
        let resolver = TileResolver::new(".");
        assert_eq!(
            resolver.candidates(TileId::new(-13, 5)),
            ["S13E005.HGT", "S13E005.hgt", "S013E005.HGT", "S013E005.hgt"]
        );
    }

    #[test]
    fn test_from_env_value() {
        let resolver = TileResolver::from_env_value(Some("/data/srtm".into())).unwrap();
        assert_eq!(resolver.data_dir(), Path::new("/data/srtm"));

        let cwd = std::env::current_dir().unwrap();
        let resolver = TileResolver::from_env_value(None).unwrap();
        assert_eq!(resolver.data_dir(), cwd);

        // Empty counts as unset
        let resolver = TileResolver::from_env_value(Some(OsString::new())).unwrap();
        assert_eq!(resolver.data_dir(), cwd);
    }

    #[test]
    fn test_data_dir() {
        let resolver = TileResolver::new("/data/srtm");
        assert_eq!(resolver.data_dir(), Path::new("/data/srtm"));
    }
}
