//! Per-voxel material classification, derived on demand from the heightfield.
//!
//! Materials are never stored as a 3D array: the rule below is evaluated per
//! visible face, keeping chunk memory proportional to the footprint.

use delve_terrain::HeightField;

/// Material assigned to a solid voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MaterialId {
    /// Grassy top layer.
    Grass = 0,
    /// Exposed soil: cliff feet and the shallow sub-surface shell.
    Dirt = 1,
    /// Deep rock, and stone-seeded tops sheltered from lower neighbors.
    Stone = 2,
}

impl MaterialId {
    /// All materials, indexable by [`MaterialId::index`].
    pub const ALL: [MaterialId; 3] = [Self::Grass, Self::Dirt, Self::Stone];

    /// Dense index (0–2), also the material's terrain-atlas row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The material's row in the terrain atlas.
    pub fn atlas_row(self) -> u32 {
        self as u32
    }
}

/// Depth below the column top (exclusive) where soil gives way to rock.
const SOIL_SHELL: u32 = 5;

/// Classifies the solid voxel at `(x, y, z)`.
///
/// Rule, with `h = y` and `H` the column height:
/// - topmost voxel on a steep-edge column → [`MaterialId::Dirt`];
/// - topmost voxel on a stone-seed column with no side exposed to a lower
///   neighbor → [`MaterialId::Stone`];
/// - topmost voxel otherwise → [`MaterialId::Grass`];
/// - `h < H − 5` → [`MaterialId::Stone`]; else [`MaterialId::Dirt`].
///
/// The caller guarantees the voxel is solid (`y < H`).
pub fn voxel_material(field: &HeightField, x: u32, z: u32, y: u32) -> MaterialId {
    let height = field.height_at(x as i32, z as i32);
    debug_assert!(y < height, "voxel_material queried above column top");

    if y + 1 == height {
        if field.is_steep_edge(x, z) {
            return MaterialId::Dirt;
        }
        if field.is_stone_seed(x, z) && !top_is_side_exposed(field, x, z) {
            return MaterialId::Stone;
        }
        return MaterialId::Grass;
    }

    if height - y > SOIL_SHELL {
        MaterialId::Stone
    } else {
        MaterialId::Dirt
    }
}

/// Classifies the topmost voxel of a column, or `None` for height 0.
pub fn top_material(field: &HeightField, x: u32, z: u32) -> Option<MaterialId> {
    let height = field.height_at(x as i32, z as i32);
    if height == 0 {
        return None;
    }
    Some(voxel_material(field, x, z, height - 1))
}

/// Whether any side of the column's top voxel faces a lower neighbor.
fn top_is_side_exposed(field: &HeightField, x: u32, z: u32) -> bool {
    let height = field.height_at(x as i32, z as i32);
    [(1, 0), (-1, 0), (0, 1), (0, -1)]
        .iter()
        .any(|&(dx, dz)| field.height_at(x as i32 + dx, z as i32 + dz) < height)
}
