//! Plateau heightfield synthesis.
//!
//! Sculpts terrain by splatting elliptical plateaus with soft falloff rims,
//! then runs two classification passes: steep-edge flagging along cliff feet
//! and stone-seed disk splats that bias material choice and mark columns for
//! resource placement. All randomness comes from the caller's RNG, so the
//! same parameters and seed reproduce the field bit for bit.

use rand::Rng;

use crate::heightfield::HeightField;

/// Parameters for heightfield synthesis.
#[derive(Clone, Debug)]
pub struct TerrainParams {
    /// Grid width in columns.
    pub width: u32,
    /// Grid depth in columns.
    pub depth: u32,
    /// Starting height of every column.
    pub base_height: u32,
    /// Number of plateau placement attempts.
    pub plateau_count: u32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            width: 64,
            depth: 64,
            base_height: 2,
            plateau_count: 24,
        }
    }
}

/// Fraction of placement attempts anchored by a random walk from an earlier
/// plateau center, biasing plateaus into connected landmasses.
const WALK_ANCHOR_CHANCE: f64 = 0.4;
/// Maximum per-axis step of the anchor random walk.
const WALK_STEP: i32 = 3;
/// Plateau footprint range per axis, in columns.
const FOOTPRINT_MIN: u32 = 3;
const FOOTPRINT_MAX: u32 = 12;
/// Plateau height increment range, in voxels.
const INCREMENT_MIN: u32 = 2;
const INCREMENT_MAX: u32 = 4;
/// Anchors closer than this to the border are discarded.
const BORDER_MARGIN: i32 = 2;
/// Normalized radius where the falloff rim ends.
const RIM_END: f64 = 1.1;
/// Per-neighbor flag probability in the steep-edge pass.
const STEEP_EDGE_CHANCE: f64 = 0.9;
/// Stone seeds per column of footprint area.
const STONE_SEED_RATE: f64 = 0.004;
/// Per-cell fill probability inside a stone-seed disk.
const STONE_FILL_CHANCE: f64 = 0.8;

/// Synthesizes a [`HeightField`] from the given parameters and RNG.
///
/// Total for any `width`/`depth` ≥ 1; there is no failure mode. Plateau
/// attempts that land within [`BORDER_MARGIN`] cells of the border are
/// discarded (the attempt is consumed, nothing is raised).
pub fn generate(params: &TerrainParams, rng: &mut impl Rng) -> HeightField {
    let mut field = HeightField::filled(params.width, params.depth, params.base_height);

    place_plateaus(&mut field, params, rng);
    flag_steep_edges(&mut field, params.base_height, rng);
    splat_stone_seeds(&mut field, rng);

    field
}

/// Splats `plateau_count` elliptical plateaus onto the field.
fn place_plateaus(field: &mut HeightField, params: &TerrainParams, rng: &mut impl Rng) {
    let width = params.width as i32;
    let depth = params.depth as i32;
    let mut centers: Vec<(i32, i32)> = Vec::new();

    for _ in 0..params.plateau_count {
        // 60% uniform anchor, 40% a short random walk from an earlier center.
        let anchor = if !centers.is_empty() && rng.random_bool(WALK_ANCHOR_CHANCE) {
            let (cx, cz) = centers[rng.random_range(0..centers.len())];
            (
                (cx + rng.random_range(-WALK_STEP..=WALK_STEP)).clamp(0, width - 1),
                (cz + rng.random_range(-WALK_STEP..=WALK_STEP)).clamp(0, depth - 1),
            )
        } else {
            (
                rng.random_range(0..width),
                rng.random_range(0..depth),
            )
        };

        let footprint_x = rng.random_range(FOOTPRINT_MIN..=FOOTPRINT_MAX);
        let footprint_z = rng.random_range(FOOTPRINT_MIN..=FOOTPRINT_MAX);
        let increment = rng.random_range(INCREMENT_MIN..=INCREMENT_MAX);

        let (ax, az) = anchor;
        if ax < BORDER_MARGIN
            || az < BORDER_MARGIN
            || ax >= width - BORDER_MARGIN
            || az >= depth - BORDER_MARGIN
        {
            continue;
        }

        raise_plateau(field, anchor, footprint_x, footprint_z, increment);
        centers.push(anchor);
    }
}

/// Raises one elliptical plateau around `anchor`.
///
/// Cells at normalized radius < 1 get the full increment; the rim out to
/// [`RIM_END`] gets a quadratically fading share. The candidate height is the
/// pre-raise anchor height plus the raise, merged with the existing cell via
/// `max` — overlapping plateaus merge and stack, never lower terrain.
fn raise_plateau(
    field: &mut HeightField,
    anchor: (i32, i32),
    footprint_x: u32,
    footprint_z: u32,
    increment: u32,
) {
    let (ax, az) = anchor;
    let anchor_height = field.height_at(ax, az);
    let radius_x = footprint_x as f64 / 2.0;
    let radius_z = footprint_z as f64 / 2.0;
    let extent_x = (radius_x * RIM_END).ceil() as i32;
    let extent_z = (radius_z * RIM_END).ceil() as i32;

    for dz in -extent_z..=extent_z {
        for dx in -extent_x..=extent_x {
            let x = ax + dx;
            let z = az + dz;
            if x < 0 || z < 0 || x >= field.width() as i32 || z >= field.depth() as i32 {
                continue;
            }

            let nx = dx as f64 / radius_x;
            let nz = dz as f64 / radius_z;
            let radius = (nx * nx + nz * nz).sqrt();

            let raise = if radius < 1.0 {
                increment
            } else if radius <= RIM_END {
                let fade = 1.0 - (radius - 1.0) / (RIM_END - 1.0);
                (increment as f64 * fade * fade).round() as u32
            } else {
                continue;
            };

            let candidate = anchor_height + raise;
            if candidate > field.height_at(x, z) {
                field.set_height(x as u32, z as u32, candidate);
            }
        }
    }
}

/// Flags raised cells that sit at the foot of a cliff.
///
/// Every cell above base height runs one independent trial per 4-connected
/// neighbor that is at least 2 voxels higher; any success flags the cell.
/// Probabilistic by product intent: the misses leave ragged cliff edges.
fn flag_steep_edges(field: &mut HeightField, base_height: u32, rng: &mut impl Rng) {
    const NEIGHBORS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    let mut flagged: Vec<(u32, u32)> = Vec::new();

    for (x, z) in field.columns() {
        let height = field.height_at(x as i32, z as i32);
        if height <= base_height {
            continue;
        }
        for (dx, dz) in NEIGHBORS {
            let neighbor = field.height_at(x as i32 + dx, z as i32 + dz);
            if neighbor >= height + 2 && rng.random_bool(STEEP_EDGE_CHANCE) {
                flagged.push((x, z));
            }
        }
    }

    for (x, z) in flagged {
        field.mark_steep_edge(x, z);
    }
}

/// Scatters stone-seed disks over the field, independent of height.
fn splat_stone_seeds(field: &mut HeightField, rng: &mut impl Rng) {
    let area = (field.width() * field.depth()) as f64;
    let seed_count = (area * STONE_SEED_RATE).round() as u32;

    for _ in 0..seed_count {
        let cx = rng.random_range(0..field.width() as i32);
        let cz = rng.random_range(0..field.depth() as i32);
        let radius = rng.random_range(1..=4i32);

        for dz in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dz * dz > radius * radius {
                    continue;
                }
                let x = cx + dx;
                let z = cz + dz;
                if x < 0 || z < 0 || x >= field.width() as i32 || z >= field.depth() as i32 {
                    continue;
                }
                if rng.random_bool(STONE_FILL_CHANCE) {
                    field.mark_stone_seed(x as u32, z as u32);
                }
            }
        }
    }
}
