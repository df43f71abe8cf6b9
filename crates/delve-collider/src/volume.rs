//! Axis-aligned solid volumes for movement collision.

/// An axis-aligned box of solid terrain, in column units.
///
/// Covers columns `min_x..max_x` × `min_z..max_z` (exclusive maxima), solid
/// from level 0 up to `height`. Invariant: `min_x < max_x`, `min_z < max_z`,
/// `height > 0`. Immutable once extracted; the physics consumer scales by
/// the chunk's voxel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColliderVolume {
    /// Inclusive minimum column x.
    pub min_x: u32,
    /// Exclusive maximum column x.
    pub max_x: u32,
    /// Solid height in voxels.
    pub height: u32,
    /// Inclusive minimum column z.
    pub min_z: u32,
    /// Exclusive maximum column z.
    pub max_z: u32,
}

impl ColliderVolume {
    /// Center of the box footprint and height, for centroid-positioned
    /// physics shapes.
    pub fn centroid(&self) -> [f32; 3] {
        [
            (self.min_x + self.max_x) as f32 / 2.0,
            self.height as f32 / 2.0,
            (self.min_z + self.max_z) as f32 / 2.0,
        ]
    }

    /// Half-extents along each axis.
    pub fn half_extents(&self) -> [f32; 3] {
        [
            (self.max_x - self.min_x) as f32 / 2.0,
            self.height as f32 / 2.0,
            (self.max_z - self.min_z) as f32 / 2.0,
        ]
    }

    /// Whether the column at `(x, z)` lies inside the footprint.
    pub fn contains_column(&self, x: u32, z: u32) -> bool {
        x >= self.min_x && x < self.max_x && z >= self.min_z && z < self.max_z
    }

    /// Footprint area in columns.
    pub fn footprint_area(&self) -> u32 {
        (self.max_x - self.min_x) * (self.max_z - self.min_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_and_half_extents() {
        let volume = ColliderVolume {
            min_x: 2,
            max_x: 6,
            height: 3,
            min_z: 0,
            max_z: 2,
        };
        assert_eq!(volume.centroid(), [4.0, 1.5, 1.0]);
        assert_eq!(volume.half_extents(), [2.0, 1.5, 1.0]);
        assert_eq!(volume.footprint_area(), 8);
    }

    #[test]
    fn test_contains_column_excludes_maxima() {
        let volume = ColliderVolume {
            min_x: 1,
            max_x: 3,
            height: 1,
            min_z: 1,
            max_z: 3,
        };
        assert!(volume.contains_column(1, 1));
        assert!(volume.contains_column(2, 2));
        assert!(!volume.contains_column(3, 1));
        assert!(!volume.contains_column(1, 3));
        assert!(!volume.contains_column(0, 1));
    }
}
