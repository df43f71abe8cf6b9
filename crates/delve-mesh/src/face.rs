//! Cardinal directions for voxel face geometry.

/// One of the six cardinal directions a voxel face can point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceDirection {
    /// +X direction.
    PosX = 0,
    /// −X direction.
    NegX = 1,
    /// +Y direction (column top).
    PosY = 2,
    /// −Y direction (column bottom).
    NegY = 3,
    /// +Z direction.
    PosZ = 4,
    /// −Z direction.
    NegZ = 5,
}

impl FaceDirection {
    /// All six directions in order.
    pub const ALL: [FaceDirection; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// The four horizontal directions, in emission order.
    pub const SIDES: [FaceDirection; 4] = [Self::PosX, Self::NegX, Self::PosZ, Self::NegZ];

    /// Returns the sweep axes for face emission: `(layer_axis, u_axis, v_axis)`.
    ///
    /// `layer_axis` is the axis perpendicular to the face; `u_axis` and
    /// `v_axis` span the face plane. Each value is 0=X, 1=Y, 2=Z.
    pub fn sweep_axes(self) -> (usize, usize, usize) {
        match self {
            Self::PosX | Self::NegX => (0, 2, 1), // layer=X, u=Z, v=Y
            Self::PosY | Self::NegY => (1, 0, 2), // layer=Y, u=X, v=Z
            Self::PosZ | Self::NegZ => (2, 0, 1), // layer=Z, u=X, v=Y
        }
    }

    /// Returns the unit normal as `[f32; 3]`.
    pub fn normal(self) -> [f32; 3] {
        match self {
            Self::PosX => [1.0, 0.0, 0.0],
            Self::NegX => [-1.0, 0.0, 0.0],
            Self::PosY => [0.0, 1.0, 0.0],
            Self::NegY => [0.0, -1.0, 0.0],
            Self::PosZ => [0.0, 0.0, 1.0],
            Self::NegZ => [0.0, 0.0, -1.0],
        }
    }

    /// Returns the horizontal column offset toward this direction.
    ///
    /// Vertical directions offset by zero: the neighbor column of a top or
    /// bottom face is the column itself.
    pub fn column_offset(self) -> (i32, i32) {
        match self {
            Self::PosX => (1, 0),
            Self::NegX => (-1, 0),
            Self::PosZ => (0, 1),
            Self::NegZ => (0, -1),
            Self::PosY | Self::NegY => (0, 0),
        }
    }

    /// `true` for the positive-axis directions (affects triangle winding).
    pub fn is_positive(self) -> bool {
        matches!(self, Self::PosX | Self::PosY | Self::PosZ)
    }

    /// Returns the direction index (0–5).
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions_unique() {
        for (i, a) in FaceDirection::ALL.iter().enumerate() {
            for (j, b) in FaceDirection::ALL.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_sides_are_horizontal() {
        for dir in FaceDirection::SIDES {
            assert_ne!(dir.column_offset(), (0, 0));
            assert_eq!(dir.normal()[1], 0.0);
        }
    }

    #[test]
    fn test_normals_match_offsets() {
        assert_eq!(FaceDirection::PosX.column_offset(), (1, 0));
        assert_eq!(FaceDirection::NegZ.column_offset(), (0, -1));
        assert_eq!(FaceDirection::PosY.normal(), [0.0, 1.0, 0.0]);
    }
}
