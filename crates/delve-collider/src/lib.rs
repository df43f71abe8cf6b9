//! Greedy box-collider extraction from column heightfields.

mod extract;
mod volume;

pub use extract::extract_colliders;
pub use volume::ColliderVolume;
