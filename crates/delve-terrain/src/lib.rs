//! Procedural heightfield synthesis: plateau splats, steep-edge flagging, and stone-seed placement.

mod generator;
mod heightfield;
mod seed;

pub use generator::{TerrainParams, generate};
pub use heightfield::HeightField;
pub use seed::{chunk_rng, derive_chunk_seed};
