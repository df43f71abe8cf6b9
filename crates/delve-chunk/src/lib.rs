//! Chunk lifecycle: validated parameters and the generate-once pipeline
//! tying synthesis, meshing, collider extraction and ground cover together.

mod chunk;
mod params;

pub use chunk::Chunk;
pub use params::{ChunkConfigError, ChunkParams};
