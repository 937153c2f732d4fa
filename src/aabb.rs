//! Axis-aligned bounding boxes, half-open in each axis.

use crate::error::{RegionError, Result};
use crate::Scalar;

/// Advisory numeric tolerance for callers. Never read internally; equality
/// on [`Scalar`]s is always exact within this crate.
pub const E: Scalar = 1.0e-7;

/// An axis selector, replacing the source's bare `AXIS_X`/`AXIS_Y`/`AXIS_Z`
/// integers with an exhaustively-matched enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// The two axes perpendicular to `self`, in a fixed order.
    pub(crate) fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// Assemble `(px, py, pz)` from a `main` index along `axis` and `o1`/`o2`
/// indices along `axis.others()`, in that order.
#[inline]
pub(crate) fn coord3(axis: Axis, main: usize, o1: usize, o2: usize) -> (usize, usize, usize) {
    match axis {
        Axis::X => (main, o1, o2),
        Axis::Y => (o1, main, o2),
        Axis::Z => (o1, o2, main),
    }
}

/// A half-open axis-aligned bounding box `[x1,x2) × [y1,y2) × [z1,z2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum X.
    pub x1: Scalar,
    /// Minimum Y.
    pub y1: Scalar,
    /// Minimum Z.
    pub z1: Scalar,
    /// Maximum X (exclusive).
    pub x2: Scalar,
    /// Maximum Y (exclusive).
    pub y2: Scalar,
    /// Maximum Z (exclusive).
    pub z2: Scalar,
}

impl Aabb {
    /// Construct a new AABB, validating `x1<x2 ∧ y1<y2 ∧ z1<z2`.
    pub fn new(
        x1: Scalar,
        y1: Scalar,
        z1: Scalar,
        x2: Scalar,
        y2: Scalar,
        z2: Scalar,
    ) -> Result<Self> {
        if x1 < x2 && y1 < y2 && z1 < z2 {
            Ok(Aabb { x1, y1, z1, x2, y2, z2 })
        } else {
            Err(RegionError::InvalidAabb { x1, y1, z1, x2, y2, z2 })
        }
    }

    /// Construct a new AABB without validating the ordering invariant.
    /// Call sites must have already established `x1<x2 ∧ y1<y2 ∧ z1<z2`.
    #[inline]
    pub fn new_unchecked(
        x1: Scalar,
        y1: Scalar,
        z1: Scalar,
        x2: Scalar,
        y2: Scalar,
        z2: Scalar,
    ) -> Self {
        debug_assert!(x1 < x2 && y1 < y2 && z1 < z2);
        Aabb { x1, y1, z1, x2, y2, z2 }
    }

    #[inline]
    pub(crate) fn lo(&self, axis: Axis) -> Scalar {
        match axis {
            Axis::X => self.x1,
            Axis::Y => self.y1,
            Axis::Z => self.z1,
        }
    }

    #[inline]
    pub(crate) fn hi(&self, axis: Axis) -> Scalar {
        match axis {
            Axis::X => self.x2,
            Axis::Y => self.y2,
            Axis::Z => self.z2,
        }
    }
}

/// Construct an [`Aabb`], validating its invariant.
#[inline]
pub fn aabb(
    x1: Scalar,
    y1: Scalar,
    z1: Scalar,
    x2: Scalar,
    y2: Scalar,
    z2: Scalar,
) -> Result<Aabb> {
    Aabb::new(x1, y1, z1, x2, y2, z2)
}
