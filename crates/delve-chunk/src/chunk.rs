//! The chunk pipeline: synthesis, meshing, collider extraction and ground
//! cover run back-to-back over one deterministic RNG.

use std::time::Instant;

use tracing::debug;

use delve_collider::{ColliderVolume, extract_colliders};
use delve_mesh::{BatchedSurface, MaterialId, MeshedChunk};
use delve_terrain::{HeightField, chunk_rng};

use crate::params::{ChunkConfigError, ChunkParams};

/// One fully generated chunk.
///
/// Owns every stage output; the renderer, collision and gameplay
/// collaborators borrow from it read-only, and dropping the chunk releases
/// all outputs together.
pub struct Chunk {
    field: HeightField,
    mesh: MeshedChunk,
    flora: BatchedSurface,
    colliders: Vec<ColliderVolume>,
    voxel_size: f32,
}

impl Chunk {
    /// Generates a chunk at the given grid coordinate.
    ///
    /// Validates the parameters up front, then runs the four stages
    /// synchronously; the result is complete or absent, never partial. The
    /// same `(params, world_seed, chunk_x, chunk_z)` inputs reproduce the
    /// chunk bit for bit, on any thread.
    pub fn generate(
        params: &ChunkParams,
        world_seed: u64,
        chunk_x: i32,
        chunk_z: i32,
    ) -> Result<Chunk, ChunkConfigError> {
        params.validate()?;
        let mut rng = chunk_rng(world_seed, chunk_x, chunk_z);

        let start = Instant::now();
        let field = delve_terrain::generate(&params.terrain_params(), &mut rng);
        debug!(chunk_x, chunk_z, elapsed = ?start.elapsed(), "synthesized heightfield");

        let start = Instant::now();
        let mesh = delve_mesh::build(&field, &mut rng);
        debug!(
            chunk_x,
            chunk_z,
            faces = mesh.face_count(),
            elapsed = ?start.elapsed(),
            "meshed surfaces"
        );

        let start = Instant::now();
        let colliders = extract_colliders(&field);
        debug!(
            chunk_x,
            chunk_z,
            volumes = colliders.len(),
            elapsed = ?start.elapsed(),
            "extracted colliders"
        );

        let start = Instant::now();
        let flora = delve_flora::build(&field, params.ground_cover_density, &mut rng);
        debug!(
            chunk_x,
            chunk_z,
            cards = flora.quad_count(),
            elapsed = ?start.elapsed(),
            "scattered ground cover"
        );

        Ok(Chunk {
            field,
            mesh,
            flora,
            colliders,
            voxel_size: params.voxel_size,
        })
    }

    /// The source heightfield.
    pub fn heightfield(&self) -> &HeightField {
        &self.field
    }

    /// The batched render surface for one material.
    pub fn surface(&self, material: MaterialId) -> &BatchedSurface {
        self.mesh.surface(material)
    }

    /// Iterates the per-material render surfaces.
    pub fn surfaces(&self) -> impl Iterator<Item = (MaterialId, &BatchedSurface)> {
        self.mesh.surfaces()
    }

    /// The alpha-blended grass-fringe overlay surface.
    pub fn overlay(&self) -> &BatchedSurface {
        self.mesh.overlay()
    }

    /// The batched ground-cover billboards.
    pub fn flora(&self) -> &BatchedSurface {
        &self.flora
    }

    /// The box volumes for the collision collaborator.
    pub fn colliders(&self) -> &[ColliderVolume] {
        &self.colliders
    }

    /// Columns eligible for resource-node placement.
    pub fn stone_seed_columns(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.field.stone_seed_columns()
    }

    /// World-space edge length of one voxel; positions and extents in every
    /// output are in column units and scale by this factor.
    pub fn world_scale(&self) -> f32 {
        self.voxel_size
    }
}
