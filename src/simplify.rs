//! Redundant-edge elimination: drop interior edges on each axis whose
//! removal changes no cell's occupancy.

use crate::aabb::{coord3, Axis};
use crate::error::Result;
use crate::grid::{Grid, GridBuilder};
use crate::Scalar;

/// Whether the cells on either side of edge `i` on `axis` are identical
/// across every combination of the other two axes, i.e. whether edge `i`
/// carries no occupancy information and can be dropped.
fn edge_is_redundant(g: &Grid, axis: Axis, i: usize) -> bool {
    let (o1, o2) = axis.others();
    let n1 = g.len(o1);
    let n2 = g.len(o2);
    (0..n1).all(|a| {
        (0..n2).all(|b| {
            let (x1, y1, z1) = coord3(axis, i - 1, a, b);
            let (x2, y2, z2) = coord3(axis, i, a, b);
            g.is_marked(x1, y1, z1) == g.is_marked(x2, y2, z2)
        })
    })
}

fn simplify_axis(g: &Grid, axis: Axis) -> Result<Grid> {
    let edges = g.edges(axis);
    let n = edges.len();
    if n <= 2 {
        // Nothing interior to drop.
        return Ok(g.clone());
    }

    let mut keep = vec![true; n];
    for i in 1..n - 1 {
        if edge_is_redundant(g, axis, i) {
            keep[i] = false;
        }
    }
    if keep.iter().all(|&k| k) {
        return Ok(g.clone());
    }

    let kept: Vec<usize> = (0..n).filter(|&i| keep[i]).collect();
    let new_edges: Vec<Scalar> = kept.iter().map(|&i| edges[i]).collect();

    let (o1, o2) = axis.others();
    let edges_o1 = g.edges(o1).to_vec();
    let edges_o2 = g.edges(o2).to_vec();
    let n1 = edges_o1.len();
    let n2 = edges_o2.len();

    let (x, y, z) = match axis {
        Axis::X => (new_edges, edges_o1, edges_o2),
        Axis::Y => (edges_o1, new_edges, edges_o2),
        Axis::Z => (edges_o1, edges_o2, new_edges),
    };
    let mut builder = GridBuilder::new(x, y, z)?;

    for (new_i, &old_i) in kept.iter().enumerate() {
        for a in 0..n1 {
            for b in 0..n2 {
                let (ox, oy, oz) = coord3(axis, old_i, a, b);
                if g.is_marked(ox, oy, oz) {
                    let (nx, ny, nz) = coord3(axis, new_i, a, b);
                    builder.mark(nx, ny, nz);
                }
            }
        }
    }

    Ok(Grid::from_owned(builder.build()))
}

/// Simplify a grid by eliminating redundant edges on each axis in turn.
/// The result represents the same region with no more (and typically
/// fewer) edges.
pub fn simplify(src: &Grid) -> Result<Grid> {
    if src.is_empty() {
        return Ok(src.clone());
    }
    let gx = simplify_axis(src, Axis::X)?;
    let gy = simplify_axis(&gx, Axis::Y)?;
    let gz = simplify_axis(&gy, Axis::Z)?;
    Ok(gz)
}

#[cfg(test)]
mod test_simplify {
    use super::*;
    use crate::aabb::Aabb;
    use crate::decompose::from_aabbs;

    #[test]
    fn test_single_box_unchanged() {
        let b = Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
        let g = from_aabbs(&[b]).unwrap();
        let s = simplify(&g).unwrap();
        assert_eq!(s.len(Axis::X), 2);
        assert_eq!(s.len(Axis::Y), 2);
        assert_eq!(s.len(Axis::Z), 2);
        assert!(s.is_aabb_origin(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_merges_adjacent_identical_slabs() {
        // Two boxes sharing the split plane x=1, identical in y/z, should
        // simplify away the x=1 edge since both half-cells are occupied.
        let a = Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
        let b = Aabb::new(1.0, 0.0, 0.0, 2.0, 1.0, 1.0).unwrap();
        let g = from_aabbs(&[a, b]).unwrap();
        assert_eq!(g.len(Axis::X), 3);
        let s = simplify(&g).unwrap();
        assert_eq!(s.len(Axis::X), 2);
        assert_eq!(s.edges(Axis::X), &[0.0, 2.0]);
        assert!(s.is_aabb_origin(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_stays_empty() {
        let g = Grid::empty();
        let s = simplify(&g).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_scenario_3_containment_extrusion() {
        use crate::boolean::{op, BoolOp};
        use crate::predicates::contains;

        // `ex` extrudes out of `big` on X but stays within it on Y and Z, so
        // the X split it introduces at x=0 carries no new occupancy boundary
        // (big already occupies 0..16) while the Y/Z splits at -15/15 do.
        let big = Aabb::new(-16.0, -16.0, -16.0, 16.0, 16.0, 16.0).unwrap();
        let ex = Aabb::new(0.0, -15.0, -15.0, 45.0, 15.0, 15.0).unwrap();
        let u = op(&from_aabbs(&[big]).unwrap(), &from_aabbs(&[ex]).unwrap(), BoolOp::Or).unwrap();

        let s = simplify(&u).unwrap();
        assert_eq!(s.len(Axis::X), 3);
        assert_eq!(s.len(Axis::Y), 4);
        assert_eq!(s.len(Axis::Z), 4);

        assert!(contains(&u, &from_aabbs(&[big]).unwrap()));
    }
}
