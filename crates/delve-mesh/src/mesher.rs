//! Surface meshing: per-face job collection followed by geometry emission.
//!
//! Meshing runs in two passes. The first walks every column and decides
//! which faces exist, what material they carry, and which atlas variant they
//! draw — the only pass that touches the RNG. The second turns the job list
//! into per-material batched geometry with baked occlusion. Face existence
//! is an O(1) neighbor-height comparison, no raycasting.

use delve_terrain::HeightField;
use rand::Rng;

use crate::ambient_occlusion::face_shades;
use crate::atlas::{self, BOTTOM_COLUMN, SIDE_COLUMN};
use crate::face::FaceDirection;
use crate::material::{MaterialId, voxel_material};
use crate::overlay::build_overlay;
use crate::surface::BatchedSurface;

/// One face to be emitted: position, orientation, material and atlas column.
///
/// Pure data, so variant selection is testable independently of emission.
#[derive(Clone, Copy, Debug)]
pub struct FaceJob {
    /// Column x.
    pub x: u32,
    /// Column z.
    pub z: u32,
    /// Voxel level.
    pub y: u32,
    /// Face orientation.
    pub direction: FaceDirection,
    /// Material of the owning voxel.
    pub material: MaterialId,
    /// Atlas column the face samples.
    pub variant: u32,
}

/// The mesher's output: one batch per material plus the decal overlay —
/// exactly four renderable objects per chunk regardless of voxel count.
pub struct MeshedChunk {
    surfaces: [BatchedSurface; 3],
    overlay: BatchedSurface,
}

impl MeshedChunk {
    /// The batch for one material.
    pub fn surface(&self, material: MaterialId) -> &BatchedSurface {
        &self.surfaces[material.index()]
    }

    /// The alpha-blended grass-fringe overlay batch.
    pub fn overlay(&self) -> &BatchedSurface {
        &self.overlay
    }

    /// Iterates the three material batches in [`MaterialId::ALL`] order.
    pub fn surfaces(&self) -> impl Iterator<Item = (MaterialId, &BatchedSurface)> {
        MaterialId::ALL.iter().map(|&m| (m, self.surface(m)))
    }

    /// Total face quads across the material batches (overlay excluded).
    pub fn face_count(&self) -> usize {
        self.surfaces.iter().map(BatchedSurface::quad_count).sum()
    }

    /// Face quads with the given orientation, across all materials.
    pub fn count_faces(&self, direction: FaceDirection) -> usize {
        self.surfaces
            .iter()
            .map(|s| s.count_quads_for_direction(direction))
            .sum()
    }
}

/// Pass one: collect every visible face of the heightfield.
///
/// A side face toward a neighbor exists for each level the neighbor column
/// fails to cover (`neighbor_height ≤ level`); top faces exist exactly at
/// the column top, bottom faces exactly at level 0. Only top faces draw a
/// random variant; sides and bottoms use fixed atlas columns.
pub fn collect_face_jobs(field: &HeightField, rng: &mut impl Rng) -> Vec<FaceJob> {
    let mut jobs = Vec::new();

    for (x, z) in field.columns() {
        let height = field.height_at(x as i32, z as i32);
        if height == 0 {
            continue;
        }

        let top = height - 1;
        jobs.push(FaceJob {
            x,
            z,
            y: top,
            direction: FaceDirection::PosY,
            material: voxel_material(field, x, z, top),
            variant: atlas::top_variant(rng),
        });
        jobs.push(FaceJob {
            x,
            z,
            y: 0,
            direction: FaceDirection::NegY,
            material: voxel_material(field, x, z, 0),
            variant: BOTTOM_COLUMN,
        });

        for direction in FaceDirection::SIDES {
            let (dx, dz) = direction.column_offset();
            let neighbor = field.height_at(x as i32 + dx, z as i32 + dz);
            for y in neighbor..height {
                jobs.push(FaceJob {
                    x,
                    z,
                    y,
                    direction,
                    material: voxel_material(field, x, z, y),
                    variant: SIDE_COLUMN,
                });
            }
        }
    }

    jobs
}

/// Pass two: emit batched geometry for a job list.
pub fn emit_surfaces(field: &HeightField, jobs: &[FaceJob]) -> [BatchedSurface; 3] {
    let mut surfaces = [
        BatchedSurface::new(),
        BatchedSurface::new(),
        BatchedSurface::new(),
    ];

    for job in jobs {
        let corners = face_corners(job.x, job.y, job.z, job.direction);
        let uvs = atlas::tile_uvs(job.material.atlas_row(), job.variant);
        let shades = face_shades(field, job.x, job.z, job.y, job.direction);
        surfaces[job.material.index()].push_face_quad(job.direction, corners, uvs, shades);
    }

    surfaces
}

/// Builds the full render output for a heightfield.
///
/// A pure function of the field apart from UV-variant draws; an empty field
/// yields valid empty batches.
pub fn build(field: &HeightField, rng: &mut impl Rng) -> MeshedChunk {
    let jobs = collect_face_jobs(field, rng);
    let surfaces = emit_surfaces(field, &jobs);
    let overlay = build_overlay(field);
    MeshedChunk { surfaces, overlay }
}

/// The 4 corner positions of a unit face, in quad corner order of the
/// face's UV space. Positive faces sit on the far side of the voxel.
fn face_corners(x: u32, y: u32, z: u32, direction: FaceDirection) -> [[f32; 3]; 4] {
    let (layer_axis, u_axis, v_axis) = direction.sweep_axes();
    let coords = [x as f32, y as f32, z as f32];
    let layer = if direction.is_positive() {
        coords[layer_axis] + 1.0
    } else {
        coords[layer_axis]
    };
    let (u, v) = (coords[u_axis], coords[v_axis]);

    let corners_uv = [(u, v), (u + 1.0, v), (u + 1.0, v + 1.0), (u, v + 1.0)];
    corners_uv.map(|(cu, cv)| {
        let mut pos = [0.0_f32; 3];
        pos[layer_axis] = layer;
        pos[u_axis] = cu;
        pos[v_axis] = cv;
        pos
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::ambient_occlusion::face_shades;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_border_safety_single_column() {
        // A 1x1 field of height 1: one top, one bottom, four sides.
        let field = HeightField::filled(1, 1, 1);
        let meshed = build(&field, &mut rng());

        assert_eq!(meshed.face_count(), 6);
        assert_eq!(meshed.count_faces(FaceDirection::PosY), 1);
        assert_eq!(meshed.count_faces(FaceDirection::NegY), 1);
        for dir in FaceDirection::SIDES {
            assert_eq!(meshed.count_faces(dir), 1, "missing side face {dir:?}");
        }
        assert!(meshed.overlay().is_empty(), "no fringe on a lone column");
    }

    #[test]
    fn test_isolated_column_face_counts() {
        // Height-5 column surrounded by height-0 columns: 20 side faces,
        // 1 top, 1 bottom, every corner shade exactly 1.0.
        let mut field = HeightField::filled(5, 5, 0);
        field.set_height(2, 2, 5);
        let meshed = build(&field, &mut rng());

        assert_eq!(meshed.count_faces(FaceDirection::PosY), 1);
        assert_eq!(meshed.count_faces(FaceDirection::NegY), 1);
        let side_total: usize = FaceDirection::SIDES
            .iter()
            .map(|&d| meshed.count_faces(d))
            .sum();
        assert_eq!(side_total, 20);
        assert_eq!(meshed.face_count(), 22);

        for (_, batch) in meshed.surfaces() {
            for vertex in &batch.vertices {
                assert_eq!(
                    vertex.shade, 1.0,
                    "an isolated column has nothing to occlude it"
                );
            }
        }
    }

    #[test]
    fn test_empty_field_yields_empty_batches() {
        let field = HeightField::filled(4, 4, 0);
        let meshed = build(&field, &mut rng());
        assert_eq!(meshed.face_count(), 0);
        assert!(meshed.overlay().is_empty());
        for (_, batch) in meshed.surfaces() {
            assert!(batch.is_empty());
        }
    }

    #[test]
    fn test_flat_field_hides_interior_sides() {
        let field = HeightField::filled(4, 4, 2);
        let meshed = build(&field, &mut rng());

        assert_eq!(meshed.count_faces(FaceDirection::PosY), 16);
        assert_eq!(meshed.count_faces(FaceDirection::NegY), 16);
        // Only the outward sides of the 12 border columns emit, 2 levels
        // each: 4 sides * 4 columns * 2 levels.
        let side_total: usize = FaceDirection::SIDES
            .iter()
            .map(|&d| meshed.count_faces(d))
            .sum();
        assert_eq!(side_total, 32);
    }

    #[test]
    fn test_raising_a_column_moves_its_top_face() {
        let flat = HeightField::filled(4, 4, 2);
        let mut raised = HeightField::filled(4, 4, 2);
        raised.set_height(1, 1, 3);

        let jobs_flat = collect_face_jobs(&flat, &mut rng());
        let jobs_raised = collect_face_jobs(&raised, &mut rng());

        let top_at = |jobs: &[FaceJob]| {
            jobs.iter()
                .find(|j| j.direction == FaceDirection::PosY && j.x == 1 && j.z == 1)
                .map(|j| j.y)
        };
        assert_eq!(top_at(&jobs_flat), Some(1), "old top voxel capped at y=1");
        assert_eq!(top_at(&jobs_raised), Some(2), "new top voxel capped at y=2");

        let tops = |jobs: &[FaceJob]| {
            jobs.iter()
                .filter(|j| j.direction == FaceDirection::PosY)
                .count()
        };
        assert_eq!(tops(&jobs_flat), tops(&jobs_raised), "one top per column");
        // The raised voxel exposes exactly its four new side faces.
        assert_eq!(jobs_raised.len(), jobs_flat.len() + 4);
    }

    #[test]
    fn test_side_faces_use_fixed_tiles_tops_vary() {
        let mut field = HeightField::filled(3, 3, 1);
        field.set_height(1, 1, 4);
        let jobs = collect_face_jobs(&field, &mut rng());

        for job in &jobs {
            match job.direction {
                FaceDirection::PosY => assert!(job.variant <= atlas::RARE_COLUMN),
                FaceDirection::NegY => assert_eq!(job.variant, BOTTOM_COLUMN),
                _ => assert_eq!(job.variant, SIDE_COLUMN),
            }
        }
    }

    #[test]
    fn test_face_counts_independent_of_variant_rng() {
        let field = HeightField::filled(6, 6, 3);
        let meshed_a = build(&field, &mut ChaCha8Rng::seed_from_u64(1));
        let meshed_b = build(&field, &mut ChaCha8Rng::seed_from_u64(2));

        assert_eq!(meshed_a.face_count(), meshed_b.face_count());
        for dir in FaceDirection::ALL {
            assert_eq!(meshed_a.count_faces(dir), meshed_b.count_faces(dir));
        }
    }

    #[test]
    fn test_ao_four_fold_symmetry() {
        // A heightmap symmetric under 90° rotation must bake symmetric
        // occlusion. Rotating the grid permutes each face's corners, so
        // compare sorted shade sets of matching top faces.
        let n = 7u32;
        let mut field = HeightField::filled(n, n, 2);
        // A plus-shaped pedestal is 4-fold symmetric around the center.
        field.set_height(3, 3, 5);
        field.set_height(2, 3, 4);
        field.set_height(4, 3, 4);
        field.set_height(3, 2, 4);
        field.set_height(3, 4, 4);

        let shades_of = |x: u32, z: u32| {
            let h = field.height_at(x as i32, z as i32);
            let mut s = face_shades(&field, x, z, h - 1, FaceDirection::PosY);
            s.sort_by(|a, b| a.partial_cmp(b).unwrap());
            s
        };

        for x in 0..n {
            for z in 0..n {
                let (rx, rz) = (n - 1 - z, x);
                assert_eq!(
                    shades_of(x, z),
                    shades_of(rx, rz),
                    "rotation moved ({x},{z}) to ({rx},{rz}) with different shades"
                );
            }
        }
    }
}
