//! Heightfield surface meshing: material classification, baked occlusion, atlas variants, and decal overlays.

mod ambient_occlusion;
mod atlas;
mod face;
mod material;
mod mesher;
mod overlay;
mod surface;

pub use ambient_occlusion::{corner_shade, face_shades};
pub use atlas::{
    ATLAS_COLUMNS, ATLAS_ROWS, BOTTOM_COLUMN, DECAL_TILES, ORDINARY_VARIANTS, RARE_CHANCE,
    RARE_COLUMN, SIDE_COLUMN, decal_uvs, tile_uvs, top_variant,
};
pub use face::FaceDirection;
pub use material::{MaterialId, top_material, voxel_material};
pub use mesher::{FaceJob, MeshedChunk, build, collect_face_jobs, emit_surfaces};
pub use overlay::{DECAL_LIFT, build_overlay, decal_tile};
pub use surface::{BatchedSurface, QuadInfo, SurfaceVertex};
