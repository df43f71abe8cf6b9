//! Greedy scanline extraction of collision boxes from a heightfield.
//!
//! Row-major sweep over a visited bitset: from each unvisited non-empty cell
//! a run grows rightward over equal heights, then downward one full row at a
//! time, and the resulting rectangle becomes one box. Greedy, O(width×depth)
//! and deterministic; the contract is exact cover of the solid voxel set,
//! not a minimal box count.

use delve_terrain::HeightField;

use crate::volume::ColliderVolume;

/// Extracts the collider set covering a heightfield's solid voxels.
///
/// Per column, the single box spanning it reconstructs the column height
/// exactly; boxes never overlap. An empty or all-zero field yields an empty
/// list, which is a valid state.
pub fn extract_colliders(field: &HeightField) -> Vec<ColliderVolume> {
    let width = field.width();
    let depth = field.depth();
    let mut visited = vec![false; (width * depth) as usize];
    let mut volumes = Vec::new();

    for z in 0..depth {
        for x in 0..width {
            if visited[(z * width + x) as usize] {
                continue;
            }
            let height = field.height_at(x as i32, z as i32);
            if height == 0 {
                continue;
            }

            let run = grow_run(field, &visited, x, z, height);
            let rows = grow_rows(field, &visited, x, z, run, height);

            for dz in 0..rows {
                for dx in 0..run {
                    visited[((z + dz) * width + x + dx) as usize] = true;
                }
            }

            volumes.push(ColliderVolume {
                min_x: x,
                max_x: x + run,
                height,
                min_z: z,
                max_z: z + rows,
            });
        }
    }

    volumes
}

/// Grows a run rightward from `(x, z)` while the next cell is unvisited and
/// of equal height. Returns the run length (≥ 1).
fn grow_run(field: &HeightField, visited: &[bool], x: u32, z: u32, height: u32) -> u32 {
    let width = field.width();
    let mut run = 1;
    while x + run < width
        && !visited[(z * width + x + run) as usize]
        && field.height_at((x + run) as i32, z as i32) == height
    {
        run += 1;
    }
    run
}

/// Grows the run downward one full row at a time while every cell under it
/// is unvisited and of equal height. Returns the row count (≥ 1).
fn grow_rows(
    field: &HeightField,
    visited: &[bool],
    x: u32,
    z: u32,
    run: u32,
    height: u32,
) -> u32 {
    let width = field.width();
    let depth = field.depth();
    let mut rows = 1;
    'grow: while z + rows < depth {
        for dx in 0..run {
            if visited[((z + rows) * width + x + dx) as usize]
                || field.height_at((x + dx) as i32, (z + rows) as i32) != height
            {
                break 'grow;
            }
        }
        rows += 1;
    }
    rows
}
