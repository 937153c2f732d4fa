//! Single-AABB convenience operations built atop the boolean engine, using
//! a throwaway borrowed view instead of a full decomposition.

use crate::aabb::Aabb;
use crate::boolean::{op, BoolOp};
use crate::error::Result;
use crate::grid::{BorrowedGrid, Grid};

fn borrowed(b: &Aabb) -> Grid {
    Grid::Borrowed(BorrowedGrid { edges: [b.x1, b.x2, b.y1, b.y2, b.z1, b.z2] })
}

/// Intersect `g` with a single AABB.
pub fn intersect(g: &Grid, b: &Aabb) -> Result<Grid> {
    op(g, &borrowed(b), BoolOp::And)
}

/// Subtract a single AABB from `g`.
pub fn subtract(g: &Grid, b: &Aabb) -> Result<Grid> {
    op(g, &borrowed(b), BoolOp::Sub)
}

/// Union `g` with a single AABB.
pub fn union(g: &Grid, b: &Aabb) -> Result<Grid> {
    op(g, &borrowed(b), BoolOp::Or)
}
