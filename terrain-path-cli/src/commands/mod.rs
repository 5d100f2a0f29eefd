pub mod info;
pub mod list;
pub mod path;

use anyhow::{Context, Result};
use std::path::PathBuf;
use terrain_path::TileResolver;

/// Resolver for `--data-dir`, falling back to the environment and then the
/// working directory.
fn resolver(data_dir: Option<PathBuf>) -> Result<TileResolver> {
    match data_dir {
        Some(dir) => Ok(TileResolver::new(dir)),
        None => TileResolver::from_env().context("Failed to determine the tile directory"),
    }
}
