//! Terrain atlas layout and UV-variant selection.
//!
//! The terrain atlas is a grid of one row per material, seven columns per
//! row: four ordinary top variants, one rare top variant, one side tile and
//! one bottom tile. Variant choice is a pure draw against the caller's RNG,
//! decided in the job-collection pass and only *consumed* during geometry
//! emission.

use rand::Rng;

use crate::material::MaterialId;

/// Tile columns per material row.
pub const ATLAS_COLUMNS: u32 = 7;
/// Material rows in the terrain atlas.
pub const ATLAS_ROWS: u32 = MaterialId::ALL.len() as u32;
/// Ordinary top-face variants occupy columns `0..ORDINARY_VARIANTS`.
pub const ORDINARY_VARIANTS: u32 = 4;
/// Column of the rare top-face variant.
pub const RARE_COLUMN: u32 = 4;
/// Probability of drawing the rare variant for a top face.
pub const RARE_CHANCE: f64 = 0.01;
/// Fixed column for side faces.
pub const SIDE_COLUMN: u32 = 5;
/// Fixed column for bottom faces.
pub const BOTTOM_COLUMN: u32 = 6;

/// Directional decal tiles in the grass-fringe strip.
pub const DECAL_TILES: u32 = 8;

/// Draws the atlas column for a top face.
///
/// Roughly 1% of top faces get the rare variant; the rest pick uniformly
/// among the four ordinary variants so large flats don't visibly tile.
pub fn top_variant(rng: &mut impl Rng) -> u32 {
    if rng.random_bool(RARE_CHANCE) {
        RARE_COLUMN
    } else {
        rng.random_range(0..ORDINARY_VARIANTS)
    }
}

/// Corner UVs of a terrain tile, in quad corner order
/// `(u, v), (u+1, v), (u+1, v+1), (u, v+1)`.
pub fn tile_uvs(row: u32, column: u32) -> [[f32; 2]; 4] {
    debug_assert!(row < ATLAS_ROWS && column < ATLAS_COLUMNS);
    let u0 = column as f32 / ATLAS_COLUMNS as f32;
    let u1 = (column + 1) as f32 / ATLAS_COLUMNS as f32;
    let v0 = row as f32 / ATLAS_ROWS as f32;
    let v1 = (row + 1) as f32 / ATLAS_ROWS as f32;
    [[u0, v0], [u1, v0], [u1, v1], [u0, v1]]
}

/// Corner UVs of a directional decal tile in the 8-tile fringe strip.
///
/// The overlay surface binds its own strip texture, so tiles span the full
/// vertical range.
pub fn decal_uvs(tile: u32) -> [[f32; 2]; 4] {
    debug_assert!(tile < DECAL_TILES);
    let u0 = tile as f32 / DECAL_TILES as f32;
    let u1 = (tile + 1) as f32 / DECAL_TILES as f32;
    [[u0, 0.0], [u1, 0.0], [u1, 1.0], [u0, 1.0]]
}
