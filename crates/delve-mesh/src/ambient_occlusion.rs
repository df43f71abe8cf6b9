//! Baked per-vertex ambient occlusion.
//!
//! Each face corner checks the two edge-adjacent voxels plus the diagonal
//! voxel sharing that corner, one step out along the face normal. The result
//! is written once into the vertex `shade` multiplier at build time, never
//! recomputed per frame.

use delve_terrain::HeightField;

use crate::face::FaceDirection;

/// Neighbor offsets for a single face corner, relative to the voxel position.
#[derive(Clone, Copy, Debug)]
struct CornerOffsets {
    side1: (i32, i32, i32),
    side2: (i32, i32, i32),
    corner: (i32, i32, i32),
}

/// Shade multiplier for one face corner.
///
/// Both edge neighbors solid pins the corner to 0.25 (the diagonal is
/// irrelevant behind a closed wedge); otherwise each solid neighbor costs
/// 0.3: 1.0, 0.7 or 0.4.
pub fn corner_shade(side1: bool, side2: bool, corner: bool) -> f32 {
    if side1 && side2 {
        return 0.25;
    }
    let count = side1 as u32 + side2 as u32 + corner as u32;
    1.0 - 0.3 * count as f32
}

/// The 4 corner offset sets for a face, in quad corner order
/// `(u, v), (u+1, v), (u+1, v+1), (u, v+1)` of the face's UV space.
fn face_corner_offsets(direction: FaceDirection) -> [CornerOffsets; 4] {
    match direction {
        FaceDirection::PosY => [
            CornerOffsets { side1: (-1, 1, 0), side2: (0, 1, -1), corner: (-1, 1, -1) },
            CornerOffsets { side1: (1, 1, 0), side2: (0, 1, -1), corner: (1, 1, -1) },
            CornerOffsets { side1: (1, 1, 0), side2: (0, 1, 1), corner: (1, 1, 1) },
            CornerOffsets { side1: (-1, 1, 0), side2: (0, 1, 1), corner: (-1, 1, 1) },
        ],
        FaceDirection::NegY => [
            CornerOffsets { side1: (-1, -1, 0), side2: (0, -1, -1), corner: (-1, -1, -1) },
            CornerOffsets { side1: (1, -1, 0), side2: (0, -1, -1), corner: (1, -1, -1) },
            CornerOffsets { side1: (1, -1, 0), side2: (0, -1, 1), corner: (1, -1, 1) },
            CornerOffsets { side1: (-1, -1, 0), side2: (0, -1, 1), corner: (-1, -1, 1) },
        ],
        FaceDirection::PosX => [
            CornerOffsets { side1: (1, 0, -1), side2: (1, -1, 0), corner: (1, -1, -1) },
            CornerOffsets { side1: (1, 0, 1), side2: (1, -1, 0), corner: (1, -1, 1) },
            CornerOffsets { side1: (1, 0, 1), side2: (1, 1, 0), corner: (1, 1, 1) },
            CornerOffsets { side1: (1, 0, -1), side2: (1, 1, 0), corner: (1, 1, -1) },
        ],
        FaceDirection::NegX => [
            CornerOffsets { side1: (-1, 0, -1), side2: (-1, -1, 0), corner: (-1, -1, -1) },
            CornerOffsets { side1: (-1, 0, 1), side2: (-1, -1, 0), corner: (-1, -1, 1) },
            CornerOffsets { side1: (-1, 0, 1), side2: (-1, 1, 0), corner: (-1, 1, 1) },
            CornerOffsets { side1: (-1, 0, -1), side2: (-1, 1, 0), corner: (-1, 1, -1) },
        ],
        FaceDirection::PosZ => [
            CornerOffsets { side1: (-1, 0, 1), side2: (0, -1, 1), corner: (-1, -1, 1) },
            CornerOffsets { side1: (1, 0, 1), side2: (0, -1, 1), corner: (1, -1, 1) },
            CornerOffsets { side1: (1, 0, 1), side2: (0, 1, 1), corner: (1, 1, 1) },
            CornerOffsets { side1: (-1, 0, 1), side2: (0, 1, 1), corner: (-1, 1, 1) },
        ],
        FaceDirection::NegZ => [
            CornerOffsets { side1: (-1, 0, -1), side2: (0, -1, -1), corner: (-1, -1, -1) },
            CornerOffsets { side1: (1, 0, -1), side2: (0, -1, -1), corner: (1, -1, -1) },
            CornerOffsets { side1: (1, 0, -1), side2: (0, 1, -1), corner: (1, 1, -1) },
            CornerOffsets { side1: (-1, 0, -1), side2: (0, 1, -1), corner: (-1, 1, -1) },
        ],
    }
}

/// Computes the 4 corner shades for the face of the voxel at `(x, y, z)`.
///
/// Corner order matches the quad corner order used by surface emission.
pub fn face_shades(
    field: &HeightField,
    x: u32,
    z: u32,
    y: u32,
    direction: FaceDirection,
) -> [f32; 4] {
    let offsets = face_corner_offsets(direction);
    let (x, y, z) = (x as i32, y as i32, z as i32);
    let mut shades = [1.0_f32; 4];

    for (i, o) in offsets.iter().enumerate() {
        let s1 = field.is_solid(x + o.side1.0, z + o.side1.2, y + o.side1.1);
        let s2 = field.is_solid(x + o.side2.0, z + o.side2.2, y + o.side2.1);
        let c = field.is_solid(x + o.corner.0, z + o.corner.2, y + o.corner.1);
        shades[i] = corner_shade(s1, s2, c);
    }

    shades
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_fully_exposed() {
        assert_eq!(corner_shade(false, false, false), 1.0);
    }

    #[test]
    fn test_shade_single_neighbors() {
        assert_eq!(corner_shade(true, false, false), 0.7);
        assert_eq!(corner_shade(false, true, false), 0.7);
        assert_eq!(corner_shade(false, false, true), 0.7);
    }

    #[test]
    fn test_shade_side_plus_corner() {
        assert_eq!(corner_shade(true, false, true), 0.4);
        assert_eq!(corner_shade(false, true, true), 0.4);
    }

    #[test]
    fn test_shade_closed_wedge_ignores_corner() {
        assert_eq!(corner_shade(true, true, false), 0.25);
        assert_eq!(corner_shade(true, true, true), 0.25);
    }

    #[test]
    fn test_shade_symmetric_in_sides() {
        for c in [false, true] {
            assert_eq!(corner_shade(true, false, c), corner_shade(false, true, c));
        }
    }

    #[test]
    fn test_flat_interior_top_face_fully_lit() {
        let field = HeightField::filled(5, 5, 3);
        let shades = face_shades(&field, 2, 2, 2, FaceDirection::PosY);
        assert_eq!(shades, [1.0; 4], "nothing pokes above a flat field");
    }

    #[test]
    fn test_wall_darkens_adjacent_top_corners() {
        let mut field = HeightField::filled(5, 5, 3);
        // Wall one voxel higher along x = 3.
        for z in 0..5 {
            field.set_height(3, z, 4);
        }
        let shades = face_shades(&field, 2, 2, 2, FaceDirection::PosY);
        // Corners 1 and 2 sit against the wall (side1 = +X at y+1).
        assert_eq!(shades[0], 1.0);
        assert_eq!(shades[3], 1.0);
        assert!(shades[1] < 1.0 && shades[2] < 1.0, "wall side must darken");
    }

    #[test]
    fn test_inside_corner_pins_to_quarter() {
        let mut field = HeightField::filled(5, 5, 3);
        for z in 0..5 {
            field.set_height(3, z, 4);
        }
        for x in 0..5 {
            field.set_height(x, 3, 4);
        }
        let shades = face_shades(&field, 2, 2, 2, FaceDirection::PosY);
        // Corner 2 is (u+1, v+1): both edge neighbors solid.
        assert_eq!(shades[2], 0.25);
    }

    #[test]
    fn test_border_top_corners_assume_solid_neighbors() {
        // Out-of-range solidity reads solid only at or above y = 0; the top
        // face of a height-1 border column samples at y = 1, where the
        // off-grid "terrain" continues and darkens the outward corners.
        let field = HeightField::filled(2, 2, 2);
        let shades = face_shades(&field, 0, 0, 1, FaceDirection::PosY);
        assert!(shades[0] < 1.0, "outward corner at the seam: {shades:?}");
        assert!(shades[1] < 1.0 && shades[3] < 1.0);
        assert_eq!(shades[2], 1.0, "the inward corner sees only in-range air");
    }
}
