//! Deterministic per-chunk seed derivation.
//!
//! Each chunk derives its own RNG from the world seed and its grid
//! coordinate, so independent chunks can be generated concurrently on worker
//! tasks and still reproduce bit for bit.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derives a u64 seed for a chunk from the world seed and chunk coordinate.
///
/// Uses SipHash (via std's `DefaultHasher`) to combine the inputs into a
/// well-distributed u64.
pub fn derive_chunk_seed(world_seed: u64, chunk_x: i32, chunk_z: i32) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    chunk_x.hash(&mut hasher);
    chunk_z.hash(&mut hasher);
    hasher.finish()
}

/// Derives a deterministic RNG for a specific chunk.
///
/// The returned RNG produces an identical sequence for the same
/// `(world_seed, chunk_x, chunk_z)` triple, regardless of thread or platform.
pub fn chunk_rng(world_seed: u64, chunk_x: i32, chunk_z: i32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_chunk_seed(world_seed, chunk_x, chunk_z))
}
