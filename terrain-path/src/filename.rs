//! SRTM tile filename utilities.
//!
//! This module converts between [`TileId`]s and `.hgt` filenames.
//!
//! # Filename Format
//!
//! Tiles follow the naming convention `{N|S}{lat}{E|W}{lon}.HGT`:
//!
//! - Latitude: 2 digits with N/S prefix (e.g., N48, S12)
//! - Longitude: 3 digits with E/W prefix (e.g., W124, E005)
//!
//! Some tile sets pad the latitude to 3 digits (`N048W124.HGT`). Both forms
//! name the **southwest corner** of the 1° × 1° tile.

use crate::coord::TileId;

/// Extension used when building tile filenames.
pub const HGT_EXTENSION: &str = ".HGT";

/// Build the standard 7-character tile filename.
///
/// # Examples
///
/// ```
/// use terrain_path::{filename::tile_filename, TileId};
///
/// assert_eq!(tile_filename(TileId::new(48, -124)), "N48W124.HGT");
/// assert_eq!(tile_filename(TileId::new(-13, -78)), "S13W078.HGT");
/// assert_eq!(tile_filename(TileId::new(0, -1)), "N00W001.HGT");
/// ```
pub fn tile_filename(tile: TileId) -> String {
    format!("{}{}", tile, HGT_EXTENSION)
}

/// Widen the latitude field of a 7-character filename to 3 digits.
///
/// ```
/// use terrain_path::filename::widened_filename;
///
/// assert_eq!(widened_filename("N48W124.HGT"), "N048W124.HGT");
/// ```
pub fn widened_filename(filename: &str) -> String {
    let mut widened = String::with_capacity(filename.len() + 1);
    let mut chars = filename.chars();
    if let Some(hemisphere) = chars.next() {
        widened.push(hemisphere);
        widened.push('0');
    }
    widened.extend(chars);
    widened
}

/// Parse a tile filename (either width) back into its [`TileId`].
///
/// Accepts names with or without a directory prefix and extension, in any
/// letter case. Returns `None` if the name is not a tile filename.
///
/// # Examples
///
/// ```
/// use terrain_path::{filename::filename_to_tile, TileId};
///
/// assert_eq!(filename_to_tile("N48W124.HGT"), Some(TileId::new(48, -124)));
/// assert_eq!(filename_to_tile("/data/n048w124.hgt"), Some(TileId::new(48, -124)));
/// assert_eq!(filename_to_tile("S12E077"), Some(TileId::new(-12, 77)));
/// assert_eq!(filename_to_tile("invalid"), None);
/// ```
pub fn filename_to_tile(filename: &str) -> Option<TileId> {
    // Extract just the filename if a path is given
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    if !name.is_ascii() {
        return None;
    }

    // Remove .hgt extension if present, in any case
    let stem_len = name.len().saturating_sub(HGT_EXTENSION.len());
    let name = if name[stem_len..].eq_ignore_ascii_case(HGT_EXTENSION) {
        &name[..stem_len]
    } else {
        name
    };

    // N00E000 or N000E000
    let lat_digits = match name.len() {
        7 => 2,
        8 => 3,
        _ => return None,
    };

    let bytes = name.as_bytes();
    let lat_sign = match bytes[0].to_ascii_uppercase() {
        b'N' => 1,
        b'S' => -1,
        _ => return None,
    };
    let lon_pos = 1 + lat_digits;
    let lon_sign = match bytes[lon_pos].to_ascii_uppercase() {
        b'E' => 1,
        b'W' => -1,
        _ => return None,
    };

    let lat = parse_digits(&name[1..lon_pos])?;
    let lon = parse_digits(&name[lon_pos + 1..])?;

    if lat > 90 || lon > 180 {
        return None;
    }

    Some(TileId::new(lat * lat_sign, lon * lon_sign))
}

fn parse_digits(field: &str) -> Option<i32> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
