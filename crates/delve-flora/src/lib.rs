//! Ground-cover billboard instancing over terrain heightfields.

mod instancer;

pub use instancer::{FLORA_VARIANTS, MAX_JITTER, build, flora_uvs};
