//! Batched surface geometry: vertex/index accumulation shared by every face
//! of one material across a whole chunk.

use crate::face::FaceDirection;

/// A single vertex in a batched surface.
///
/// `shade` is the baked occlusion/tint multiplier; `sway` is the
/// height-above-base attribute the renderer's wind stage consumes (always 0
/// for terrain geometry). `#[repr(C)]` + Pod so the buffer uploads as-is.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    /// Position in chunk-local column units.
    pub position: [f32; 3],
    /// Face normal.
    pub normal: [f32; 3],
    /// Atlas texture coordinates.
    pub uv: [f32; 2],
    /// Baked ambient-occlusion multiplier.
    pub shade: f32,
    /// Height above the instance base, for wind displacement.
    pub sway: f32,
}

static_assertions::assert_eq_size!(SurfaceVertex, [u8; 40]);

/// Per-quad metadata kept for statistics and tests.
#[derive(Clone, Copy, Debug)]
pub struct QuadInfo {
    /// Face direction for axis-aligned terrain quads; `None` for billboard
    /// and overlay geometry.
    pub direction: Option<FaceDirection>,
}

/// One immutable batch of render geometry.
///
/// All faces of one material across the chunk accumulate here, bounding
/// discrete render objects to a small constant per chunk.
#[derive(Default)]
pub struct BatchedSurface {
    /// Vertex buffer.
    pub vertices: Vec<SurfaceVertex>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u32>,
    /// One entry per emitted quad.
    pub quads: Vec<QuadInfo>,
}

impl BatchedSurface {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes one axis-aligned face quad.
    ///
    /// `corners` are in quad corner order `(u, v), (u+1, v), (u+1, v+1),
    /// (u, v+1)` of the face plane; winding flips for negative directions so
    /// front faces point outward.
    pub fn push_face_quad(
        &mut self,
        direction: FaceDirection,
        corners: [[f32; 3]; 4],
        uvs: [[f32; 2]; 4],
        shades: [f32; 4],
    ) {
        let base = self.vertices.len() as u32;
        let normal = direction.normal();

        for i in 0..4 {
            self.vertices.push(SurfaceVertex {
                position: corners[i],
                normal,
                uv: uvs[i],
                shade: shades[i],
                sway: 0.0,
            });
        }

        if direction.is_positive() {
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        } else {
            self.indices
                .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        }

        self.quads.push(QuadInfo {
            direction: Some(direction),
        });
    }

    /// Pushes one free-form quad (overlay decals, billboard cards).
    pub fn push_raw_quad(
        &mut self,
        corners: [[f32; 3]; 4],
        normal: [f32; 3],
        uvs: [[f32; 2]; 4],
        shades: [f32; 4],
        sways: [f32; 4],
    ) {
        let base = self.vertices.len() as u32;
        for i in 0..4 {
            self.vertices.push(SurfaceVertex {
                position: corners[i],
                normal,
                uv: uvs[i],
                shade: shades[i],
                sway: sways[i],
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        self.quads.push(QuadInfo { direction: None });
    }

    /// Total quads in the batch.
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Quads emitted for one face direction.
    pub fn count_quads_for_direction(&self, direction: FaceDirection) -> usize {
        self.quads
            .iter()
            .filter(|q| q.direction == Some(direction))
            .count()
    }

    /// `true` when the batch holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
