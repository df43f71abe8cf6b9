//! Grass-fringe decal overlay.
//!
//! Wherever a dirt or stone top sits next to a grass-topped column, a
//! slightly raised alpha-blended quad with a directional fringe tile is laid
//! over the base face. This approximates a continuous material blend without
//! a blend shader: one extra batch, drawn after the opaque surfaces.

use delve_terrain::HeightField;

use crate::ambient_occlusion::face_shades;
use crate::atlas::decal_uvs;
use crate::face::FaceDirection;
use crate::material::{MaterialId, top_material};
use crate::surface::BatchedSurface;

/// Lift above the base top face, enough to defeat z-fighting.
pub const DECAL_LIFT: f32 = 0.02;

/// The 8 neighbor probes in priority order: straight edges first, then
/// diagonals. The third element is the fringe tile matching that direction.
const PROBES: [(i32, i32, u32); 8] = [
    (0, -1, 0), // N
    (1, 0, 1),  // E
    (0, 1, 2),  // S
    (-1, 0, 3), // W
    (1, -1, 4), // NE
    (1, 1, 5),  // SE
    (-1, 1, 6), // SW
    (-1, -1, 7), // NW
];

/// Picks the fringe tile for a column, or `None` when no decal applies.
///
/// A decal applies to dirt/stone tops with at least one grass-topped
/// 8-connected neighbor; straight edges are prioritized over diagonals.
/// Off-grid neighbors never count as grass.
pub fn decal_tile(field: &HeightField, x: u32, z: u32) -> Option<u32> {
    match top_material(field, x, z) {
        Some(MaterialId::Dirt) | Some(MaterialId::Stone) => {}
        _ => return None,
    }

    for (dx, dz, tile) in PROBES {
        let nx = x as i32 + dx;
        let nz = z as i32 + dz;
        if nx < 0 || nz < 0 || nx >= field.width() as i32 || nz >= field.depth() as i32 {
            continue;
        }
        if top_material(field, nx as u32, nz as u32) == Some(MaterialId::Grass) {
            return Some(tile);
        }
    }

    None
}

/// Builds the overlay batch for a heightfield.
pub fn build_overlay(field: &HeightField) -> BatchedSurface {
    let mut batch = BatchedSurface::new();

    for (x, z) in field.columns() {
        let Some(tile) = decal_tile(field, x, z) else {
            continue;
        };

        let height = field.height_at(x as i32, z as i32);
        let y = height as f32 + DECAL_LIFT;
        let (fx, fz) = (x as f32, z as f32);
        let corners = [
            [fx, y, fz],
            [fx + 1.0, y, fz],
            [fx + 1.0, y, fz + 1.0],
            [fx, y, fz + 1.0],
        ];
        // The decal reuses the base face's baked shading so the blend stays
        // seamless under the same lighting.
        let shades = face_shades(field, x, z, height - 1, FaceDirection::PosY);
        batch.push_raw_quad(
            corners,
            FaceDirection::PosY.normal(),
            decal_uvs(tile),
            shades,
            [0.0; 4],
        );
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat field with one steep-edge (dirt-topped) column at the center.
    fn dirt_spot_field() -> HeightField {
        let mut field = HeightField::filled(3, 3, 2);
        field.mark_steep_edge(1, 1);
        field
    }

    #[test]
    fn test_dirt_next_to_grass_gets_a_decal() {
        let field = dirt_spot_field();
        // North neighbor (1, 0) is grass; the N tile wins.
        assert_eq!(decal_tile(&field, 1, 1), Some(0));
        assert_eq!(build_overlay(&field).quad_count(), 1);
    }

    #[test]
    fn test_grass_top_never_gets_a_decal() {
        let field = dirt_spot_field();
        assert_eq!(decal_tile(&field, 0, 0), None, "grass tops carry no fringe");
    }

    #[test]
    fn test_straight_edge_beats_diagonal() {
        // Surround the dirt column so only the east edge and the NW corner
        // of its neighbors are grass: the straight edge must win.
        let mut field = HeightField::filled(3, 3, 2);
        for (x, z) in field.columns().collect::<Vec<_>>() {
            if (x, z) != (2, 1) && (x, z) != (0, 0) {
                field.mark_steep_edge(x, z);
            }
        }
        // Column (1,1) is dirt; E neighbor (2,1) grass, NW neighbor (0,0) grass.
        assert_eq!(decal_tile(&field, 1, 1), Some(1), "E edge outranks NW corner");
    }

    #[test]
    fn test_diagonal_only_uses_corner_tile() {
        let mut field = HeightField::filled(3, 3, 2);
        for (x, z) in field.columns().collect::<Vec<_>>() {
            if (x, z) != (0, 0) {
                field.mark_steep_edge(x, z);
            }
        }
        assert_eq!(decal_tile(&field, 1, 1), Some(7), "only NW corner is grass");
    }

    #[test]
    fn test_all_dirt_field_has_no_overlay() {
        let mut field = HeightField::filled(4, 4, 2);
        for (x, z) in field.columns().collect::<Vec<_>>() {
            field.mark_steep_edge(x, z);
        }
        assert!(build_overlay(&field).is_empty());
    }

    #[test]
    fn test_decal_sits_above_the_top_face() {
        let field = dirt_spot_field();
        let batch = build_overlay(&field);
        for vertex in &batch.vertices {
            assert!(vertex.position[1] > 2.0, "decal must be lifted off the face");
            assert!(vertex.position[1] < 2.1);
        }
    }

    #[test]
    fn test_off_grid_neighbors_are_not_grass() {
        // A lone dirt column has no in-range neighbors at all.
        let mut field = HeightField::filled(1, 1, 2);
        field.mark_steep_edge(0, 0);
        assert_eq!(decal_tile(&field, 0, 0), None);
    }
}
