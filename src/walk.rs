//! Reconstruct a grid as a set of disjoint AABBs via a greedy maximal-cuboid
//! walk, driven by a growable FIFO queue of index-space sub-regions.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use crate::aabb::{Aabb, Axis};
use crate::grid::Grid;

const INITIAL_QUEUE_CAPACITY: usize = 32;

/// A sub-region of a grid expressed in edge-array index space, half-open on
/// each axis (`x2`/`y2`/`z2` are exclusive upper bounds on cell-origin
/// indices, mirroring the source's `IndexRegion`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexRegion {
    x1: usize,
    y1: usize,
    z1: usize,
    x2: usize,
    y2: usize,
    z2: usize,
}

/// Within `part`, locate the first occupied vertex in X-major, Y, Z order
/// and grow the maximal cuboid with that vertex as its origin: extend along
/// X while occupied, then along Y while every X slice at that row is
/// occupied, then along Z while every X/Y slice at that slab is occupied.
/// Returns `None` if `part` contains no occupied vertex.
fn find_cuboid(g: &Grid, part: &IndexRegion) -> Option<IndexRegion> {
    let (mut ox, mut oy, mut oz) = (0, 0, 0);
    let mut found = false;
    'search: for x in part.x1..part.x2 {
        for y in part.y1..part.y2 {
            for z in part.z1..part.z2 {
                if g.is_marked(x, y, z) {
                    ox = x;
                    oy = y;
                    oz = z;
                    found = true;
                    break 'search;
                }
            }
        }
    }
    if !found {
        return None;
    }

    let mut x_end = ox + 1;
    while x_end < part.x2 && g.is_marked(x_end, oy, oz) {
        x_end += 1;
    }

    let mut y_end = oy + 1;
    'y: while y_end < part.y2 {
        for xt in ox..x_end {
            if !g.is_marked(xt, y_end, oz) {
                break 'y;
            }
        }
        y_end += 1;
    }

    let mut z_end = oz + 1;
    'z: while z_end < part.z2 {
        for yt in oy..y_end {
            for xt in ox..x_end {
                if !g.is_marked(xt, yt, z_end) {
                    break 'z;
                }
            }
        }
        z_end += 1;
    }

    let cuboid = IndexRegion { x1: ox, y1: oy, z1: oz, x2: x_end, y2: y_end, z2: z_end };
    debug_assert!(cuboid.x2 > cuboid.x1 && cuboid.y2 > cuboid.y1 && cuboid.z2 > cuboid.z1);
    debug_assert!(cuboid.x2 <= part.x2 && cuboid.y2 <= part.y2 && cuboid.z2 <= part.z2);
    Some(cuboid)
}

/// Push onto the queue, logging when the push forces the ring buffer to
/// grow and reorder its storage.
fn enqueue(queue: &mut VecDeque<IndexRegion>, region: IndexRegion) {
    let before = queue.capacity();
    queue.push_back(region);
    let after = queue.capacity();
    if after != before {
        log::debug!("walk queue grew from {before} to {after}");
    }
}

fn cuboid_to_aabb(g: &Grid, c: &IndexRegion) -> Aabb {
    Aabb::new_unchecked(
        g.edges(Axis::X)[c.x1],
        g.edges(Axis::Y)[c.y1],
        g.edges(Axis::Z)[c.z1],
        g.edges(Axis::X)[c.x2],
        g.edges(Axis::Y)[c.y2],
        g.edges(Axis::Z)[c.z2],
    )
}

/// Walk `g`, calling `visit` with every disjoint AABB that reconstructs it,
/// in an unspecified order, until `visit` returns [`ControlFlow::Break`] or
/// the grid is exhausted. Returns the break value, if any.
pub fn walk<T>(g: &Grid, mut visit: impl FnMut(Aabb) -> ControlFlow<T>) -> Option<T> {
    let (nx, ny, nz) = (g.len(Axis::X), g.len(Axis::Y), g.len(Axis::Z));
    if nx == 0 || ny == 0 || nz == 0 {
        return None;
    }

    let mut queue: VecDeque<IndexRegion> = VecDeque::with_capacity(INITIAL_QUEUE_CAPACITY);
    enqueue(&mut queue, IndexRegion { x1: 0, y1: 0, z1: 0, x2: nx - 1, y2: ny - 1, z2: nz - 1 });

    while let Some(next) = queue.pop_front() {
        let Some(cuboid) = find_cuboid(g, &next) else {
            continue;
        };

        if let ControlFlow::Break(v) = visit(cuboid_to_aabb(g, &cuboid)) {
            return Some(v);
        }

        // Subtract cuboid from next, splitting the remainder into up to six
        // disjoint pieces: lengthwise (X) segments first, then vertical (Y)
        // segments of the X-middle slab, then depthwise (Z) segments of the
        // X/Y-middle block.
        let mut pending = next;

        if cuboid.x1 > next.x1 {
            let mut p = pending;
            p.x2 = cuboid.x1;
            enqueue(&mut queue, p);
        }
        if cuboid.x2 < next.x2 {
            let mut p = pending;
            p.x1 = cuboid.x2;
            p.x2 = next.x2;
            enqueue(&mut queue, p);
        }
        pending.x1 = cuboid.x1;
        pending.x2 = cuboid.x2;

        if cuboid.y1 > next.y1 {
            let mut p = pending;
            p.y2 = cuboid.y1;
            enqueue(&mut queue, p);
        }
        if cuboid.y2 < next.y2 {
            let mut p = pending;
            p.y1 = cuboid.y2;
            p.y2 = next.y2;
            enqueue(&mut queue, p);
        }
        pending.y1 = cuboid.y1;
        pending.y2 = cuboid.y2;

        if cuboid.z1 > next.z1 {
            let mut p = pending;
            p.z2 = cuboid.z1;
            enqueue(&mut queue, p);
        }
        if cuboid.z2 < next.z2 {
            let mut p = pending;
            p.z1 = cuboid.z2;
            p.z2 = next.z2;
            enqueue(&mut queue, p);
        }
    }

    None
}

/// Collect every disjoint AABB that reconstructs `g`.
pub fn walk_collect(g: &Grid) -> Vec<Aabb> {
    let mut out = Vec::new();
    walk::<()>(g, |aabb| {
        out.push(aabb);
        ControlFlow::Continue(())
    });
    out
}
