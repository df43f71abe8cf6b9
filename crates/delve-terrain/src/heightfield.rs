//! Column heightfield storage: a 2D grid of column heights plus the two
//! classification sets the downstream stages consume.

use rustc_hash::FxHashSet;

/// A `width × depth` grid of non-negative integer column heights.
///
/// Each column occupies voxel levels `0..height`. Alongside the heights the
/// field carries two column sets filled during synthesis:
///
/// - `steep_edges` — columns sitting at the foot of a cliff (a 4-connected
///   neighbor is at least 2 voxels higher). These render as exposed soil and
///   never grow ground cover.
/// - `stone_seeds` — columns splatted by random stone disks, independent of
///   height. They bias the top material toward stone and are exported so the
///   gameplay layer can place resource nodes only on flagged columns.
///
/// Dimensions are fixed at construction. Out-of-range lookups follow two
/// deliberate conventions (see [`HeightField::height_at`] and
/// [`HeightField::is_solid`]): neighbor *heights* read as 0 so chunk borders
/// emit a closed skirt of faces, while occlusion *solidity* reads as solid so
/// baked shading never brightens at a chunk seam.
#[derive(Clone, Debug)]
pub struct HeightField {
    width: u32,
    depth: u32,
    /// Row-major, x varies fastest: `heights[z * width + x]`.
    heights: Vec<u32>,
    steep_edges: FxHashSet<(u32, u32)>,
    stone_seeds: FxHashSet<(u32, u32)>,
}

impl HeightField {
    /// Creates a field with every column at `base_height` and empty sets.
    pub fn filled(width: u32, depth: u32, base_height: u32) -> Self {
        Self {
            width,
            depth,
            heights: vec![base_height; (width * depth) as usize],
            steep_edges: FxHashSet::default(),
            stone_seeds: FxHashSet::default(),
        }
    }

    /// Creates a field from explicit column heights (row-major, x fastest).
    ///
    /// # Panics
    ///
    /// Panics if `heights.len() != width * depth`.
    pub fn from_heights(width: u32, depth: u32, heights: Vec<u32>) -> Self {
        assert_eq!(
            heights.len(),
            (width * depth) as usize,
            "heights length must equal width * depth"
        );
        Self {
            width,
            depth,
            heights,
            steep_edges: FxHashSet::default(),
            stone_seeds: FxHashSet::default(),
        }
    }

    /// Grid width (columns along x).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid depth (columns along z).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    fn index(&self, x: u32, z: u32) -> usize {
        (z * self.width + x) as usize
    }

    /// The height of the column at `(x, z)`.
    ///
    /// Out-of-range coordinates read as height 0: a border column therefore
    /// sees an "empty" neighbor on its outward sides and emits side faces all
    /// the way down, closing the chunk silhouette.
    pub fn height_at(&self, x: i32, z: i32) -> u32 {
        if x < 0 || z < 0 || x >= self.width as i32 || z >= self.depth as i32 {
            return 0;
        }
        self.heights[self.index(x as u32, z as u32)]
    }

    /// Overwrites the height of an in-range column.
    ///
    /// Construction-time only: chunks never edit a live field in place — a
    /// voxel edit regenerates the whole chunk from fresh heights.
    pub fn set_height(&mut self, x: u32, z: u32, height: u32) {
        let idx = self.index(x, z);
        self.heights[idx] = height;
    }

    /// Occlusion-purpose solidity of the voxel at `(x, y, z)`.
    ///
    /// Below the grid (`y < 0`) is empty so bottom faces shade fully lit.
    /// Out-of-range columns are treated as solid: baked shading assumes the
    /// terrain continues past the border rather than brightening at a seam.
    pub fn is_solid(&self, x: i32, z: i32, y: i32) -> bool {
        if y < 0 {
            return false;
        }
        if x < 0 || z < 0 || x >= self.width as i32 || z >= self.depth as i32 {
            return true;
        }
        (y as u32) < self.heights[self.index(x as u32, z as u32)]
    }

    /// Whether the column at `(x, z)` is flagged as a steep edge.
    pub fn is_steep_edge(&self, x: u32, z: u32) -> bool {
        self.steep_edges.contains(&(x, z))
    }

    /// Whether the column at `(x, z)` is flagged by a stone-seed splat.
    pub fn is_stone_seed(&self, x: u32, z: u32) -> bool {
        self.stone_seeds.contains(&(x, z))
    }

    /// Flags a column as a steep edge (construction-time only).
    pub fn mark_steep_edge(&mut self, x: u32, z: u32) {
        self.steep_edges.insert((x, z));
    }

    /// Flags a column as a stone seed (construction-time only).
    pub fn mark_stone_seed(&mut self, x: u32, z: u32) {
        self.stone_seeds.insert((x, z));
    }

    /// Iterates all stone-seed columns, for external resource placement.
    pub fn stone_seed_columns(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.stone_seeds.iter().copied()
    }

    /// Number of stone-seed columns.
    pub fn stone_seed_count(&self) -> usize {
        self.stone_seeds.len()
    }

    /// Iterates every in-range column coordinate in row-major order.
    pub fn columns(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        (0..self.depth).flat_map(move |z| (0..width).map(move |x| (x, z)))
    }

    /// Raw heights slice (row-major, x fastest), for hashing and tests.
    pub fn heights(&self) -> &[u32] {
        &self.heights
    }
}
