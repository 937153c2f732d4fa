//! Face extraction: project a thin slab at a fixed coordinate on one axis
//! into a 2D region.

use crate::aabb::{coord3, Axis};
use crate::error::Result;
use crate::grid::{Grid, GridBuilder};
use crate::Scalar;

/// Select the cross-section of `g` normal to `axis` at `pos`, spanning
/// `pos` to `-pos` on that axis. The perpendicular axes keep `g`'s own
/// edges verbatim.
///
/// If `pos` lands exactly on one of `g`'s edges on `axis`, a cell is
/// occupied in the result if either the cell just above or just below that
/// edge was occupied in `g` — a coordinate exactly on a boundary belongs to
/// both of its neighboring cells.
pub fn select_face(g: &Grid, axis: Axis, pos: Scalar) -> Result<Grid> {
    let (a_axis, b_axis) = axis.others();
    let a_edges = g.edges(a_axis).to_vec();
    let b_edges = g.edges(b_axis).to_vec();
    let a_size = a_edges.len();
    let b_size = b_edges.len();

    if a_size == 0 || b_size == 0 {
        return Ok(Grid::empty());
    }

    let lo = pos.min(-pos);
    let hi = pos.max(-pos);
    let normal_edges = vec![lo, hi];

    let (x, y, z) = match axis {
        Axis::X => (normal_edges, a_edges, b_edges),
        Axis::Y => (a_edges, normal_edges, b_edges),
        Axis::Z => (a_edges, b_edges, normal_edges),
    };
    let mut builder = GridBuilder::new(x, y, z)?;

    // A coordinate exactly on an edge is governed by both the cell it
    // originates and its predecessor, if any.
    let candidates: Vec<usize> = match g.bisect(axis, pos) {
        None => Vec::new(),
        Some(idx) => {
            if g.edges(axis)[idx] == pos && idx > 0 {
                vec![idx, idx - 1]
            } else {
                vec![idx]
            }
        }
    };

    for b1 in 0..b_size {
        for a1 in 0..a_size {
            let occupied = candidates.iter().any(|&mi| {
                let (px, py, pz) = coord3(axis, mi, a1, b1);
                g.is_marked(px, py, pz)
            });
            if occupied {
                let (fx, fy, fz) = coord3(axis, 0, a1, b1);
                builder.mark(fx, fy, fz);
            }
        }
    }

    Ok(Grid::from_owned(builder.build()))
}
