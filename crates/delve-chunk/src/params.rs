//! Validated chunk generation parameters.

use delve_terrain::TerrainParams;
use thiserror::Error;

/// Rejected chunk configuration.
///
/// Parameters are checked once, before any generation stage runs; a chunk is
/// never left half-built over a bad value.
#[derive(Debug, Error, PartialEq)]
pub enum ChunkConfigError {
    /// Width or depth of zero columns.
    #[error("chunk dimensions must be positive, got {width}x{depth}")]
    ZeroDimension {
        /// Requested grid width.
        width: u32,
        /// Requested grid depth.
        depth: u32,
    },

    /// Voxel size that is zero, negative, or not finite.
    #[error("voxel size must be positive and finite, got {0}")]
    InvalidVoxelSize(f32),

    /// Ground-cover density outside the unit interval.
    #[error("ground-cover density must lie in [0, 1], got {0}")]
    DensityOutOfRange(f64),
}

/// Full parameter set for one chunk.
#[derive(Clone, Debug)]
pub struct ChunkParams {
    /// Grid width in columns.
    pub width: u32,
    /// Grid depth in columns.
    pub depth: u32,
    /// World-space edge length of one voxel.
    pub voxel_size: f32,
    /// Starting height of every column.
    pub base_height: u32,
    /// Number of plateau placement attempts.
    pub plateau_count: u32,
    /// Per-column probability of a ground-cover instance.
    pub ground_cover_density: f64,
}

impl Default for ChunkParams {
    fn default() -> Self {
        let terrain = TerrainParams::default();
        Self {
            width: terrain.width,
            depth: terrain.depth,
            voxel_size: 1.0,
            base_height: terrain.base_height,
            plateau_count: terrain.plateau_count,
            ground_cover_density: 0.15,
        }
    }
}

impl ChunkParams {
    /// Checks the parameter set, returning the first violation found.
    pub fn validate(&self) -> Result<(), ChunkConfigError> {
        if self.width == 0 || self.depth == 0 {
            return Err(ChunkConfigError::ZeroDimension {
                width: self.width,
                depth: self.depth,
            });
        }
        if !self.voxel_size.is_finite() || self.voxel_size <= 0.0 {
            return Err(ChunkConfigError::InvalidVoxelSize(self.voxel_size));
        }
        if !(0.0..=1.0).contains(&self.ground_cover_density) {
            return Err(ChunkConfigError::DensityOutOfRange(
                self.ground_cover_density,
            ));
        }
        Ok(())
    }

    /// The synthesis-stage subset of the parameters.
    pub fn terrain_params(&self) -> TerrainParams {
        TerrainParams {
            width: self.width,
            depth: self.depth,
            base_height: self.base_height,
            plateau_count: self.plateau_count,
        }
    }
}
