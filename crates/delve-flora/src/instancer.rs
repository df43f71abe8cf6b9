//! Billboard ground-cover scattering over the heightfield.
//!
//! Each instance is a billboard cross: two perpendicular quads tilted 45
//! degrees about the vertical axis, planted on the column top with a small
//! horizontal jitter. The instancer bakes the column's top-face occlusion
//! into the vertex shade and tags every vertex with its height above the
//! instance base; wind displacement itself happens in the renderer.

use std::f32::consts::FRAC_1_SQRT_2;

use delve_mesh::{BatchedSurface, FaceDirection, face_shades};
use delve_terrain::HeightField;
use glam::Vec3;
use rand::Rng;

/// Tile variants in the ground-cover atlas strip.
pub const FLORA_VARIANTS: u32 = 16;
/// Maximum horizontal offset from the column centre, in column units.
pub const MAX_JITTER: f32 = 0.3;

/// Half-width of one billboard card.
const CARD_HALF_WIDTH: f32 = 0.5;
/// Card height above the instance base.
const CARD_HEIGHT: f32 = 1.0;

/// Card plane axes, tilted 45 degrees about vertical and perpendicular to
/// each other.
const CARD_AXES: [Vec3; 2] = [
    Vec3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    Vec3::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
];

/// Corner UVs of a variant in the 16-tile ground-cover strip, in quad
/// corner order bottom-left, bottom-right, top-right, top-left.
pub fn flora_uvs(variant: u32) -> [[f32; 2]; 4] {
    debug_assert!(variant < FLORA_VARIANTS);
    let u0 = variant as f32 / FLORA_VARIANTS as f32;
    let u1 = (variant + 1) as f32 / FLORA_VARIANTS as f32;
    [[u0, 1.0], [u1, 1.0], [u1, 0.0], [u0, 0.0]]
}

/// Scatters ground cover over the field into one batched surface.
///
/// Every column outside the steep-edge set rolls against `density`; winners
/// get one billboard cross at the column top. Columns are visited in
/// row-major order, so the same field, density and RNG state always produce
/// the same batch.
pub fn build(field: &HeightField, density: f64, rng: &mut impl Rng) -> BatchedSurface {
    debug_assert!((0.0..=1.0).contains(&density));

    let mut batch = BatchedSurface::new();
    for (x, z) in field.columns() {
        if field.is_steep_edge(x, z) {
            continue;
        }
        if !rng.random_bool(density) {
            continue;
        }

        let height = field.height_at(x as i32, z as i32);
        let jitter_x = rng.random_range(-MAX_JITTER..=MAX_JITTER);
        let jitter_z = rng.random_range(-MAX_JITTER..=MAX_JITTER);
        let variant = rng.random_range(0..FLORA_VARIANTS);

        let base = Vec3::new(
            x as f32 + 0.5 + jitter_x,
            height as f32,
            z as f32 + 0.5 + jitter_z,
        );
        let shade = top_shade(field, x, z, height);
        push_cross(&mut batch, base, variant, shade);
    }
    batch
}

/// Averaged occlusion of the column's top face, 1.0 for zero-height columns.
fn top_shade(field: &HeightField, x: u32, z: u32, height: u32) -> f32 {
    if height == 0 {
        return 1.0;
    }
    let shades = face_shades(field, x, z, height - 1, FaceDirection::PosY);
    shades.iter().sum::<f32>() / 4.0
}

fn push_cross(batch: &mut BatchedSurface, base: Vec3, variant: u32, shade: f32) {
    let uvs = flora_uvs(variant);
    let lift = Vec3::Y * CARD_HEIGHT;

    for axis in CARD_AXES {
        let half = axis * CARD_HALF_WIDTH;
        let corners = [
            (base - half).to_array(),
            (base + half).to_array(),
            (base + half + lift).to_array(),
            (base - half + lift).to_array(),
        ];
        let normal = axis.cross(Vec3::Y).to_array();
        batch.push_raw_quad(
            corners,
            normal,
            uvs,
            [shade; 4],
            [0.0, 0.0, CARD_HEIGHT, CARD_HEIGHT],
        );
    }
}
