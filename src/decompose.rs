//! Decompose a list of AABBs into a [`Grid`].

use crate::aabb::{Aabb, Axis};
use crate::error::Result;
use crate::grid::{Grid, GridBuilder};

/// Build a [`Grid`] from a slice of AABBs.
///
/// An empty slice yields the canonical empty grid, not an error.
pub fn from_aabbs(aabbs: &[Aabb]) -> Result<Grid> {
    if aabbs.is_empty() {
        return Ok(Grid::empty());
    }

    let mut xs: Vec<_> = aabbs.iter().flat_map(|b| [b.x1, b.x2]).collect();
    let mut ys: Vec<_> = aabbs.iter().flat_map(|b| [b.y1, b.y2]).collect();
    let mut zs: Vec<_> = aabbs.iter().flat_map(|b| [b.z1, b.z2]).collect();
    sort_dedup(&mut xs);
    sort_dedup(&mut ys);
    sort_dedup(&mut zs);

    let mut builder = GridBuilder::new(xs, ys, zs)?;

    for b in aabbs {
        let mut lo = [0usize; 3];
        let mut hi = [0usize; 3];
        for (i, axis) in [Axis::X, Axis::Y, Axis::Z].into_iter().enumerate() {
            let edges = builder.edges(axis);
            lo[i] = edges.partition_point(|&e| e < b.lo(axis));
            hi[i] = edges.partition_point(|&e| e < b.hi(axis));
            debug_assert_eq!(edges[lo[i]], b.lo(axis));
            debug_assert_eq!(edges[hi[i]], b.hi(axis));
        }

        for px in lo[0]..hi[0] {
            for py in lo[1]..hi[1] {
                for pz in lo[2]..hi[2] {
                    builder.mark(px, py, pz);
                }
            }
        }
    }

    Ok(Grid::from_owned(builder.build()))
}

fn sort_dedup(v: &mut Vec<f64>) {
    v.sort_by(|a, b| a.partial_cmp(b).expect("non-finite coordinate"));
    v.dedup();
}
