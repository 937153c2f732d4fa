//! Crate error type.

use thiserror::Error;

use crate::aabb::Axis;
use crate::Scalar;

/// Catch-all error for this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RegionError {
    /// An axis would exceed [`crate::grid::MAX_EDGES_PER_AXIS`] distinct
    /// edges, or the derived displacement would overflow its range.
    #[error("axis {axis:?} would require {len} edges, exceeding the {max} limit")]
    TooComplex {
        /// The axis whose edge count overflowed.
        axis: Axis,
        /// The edge count that would have been required.
        len: usize,
        /// The limit that was exceeded.
        max: usize,
    },
    /// Backing storage could not be acquired.
    #[error("allocation failure")]
    AllocFailure,
    /// An AABB violates the strict-ordering invariant `x1<x2 ∧ y1<y2 ∧ z1<z2`.
    #[error("invalid AABB: ({x1}, {y1}, {z1}) .. ({x2}, {y2}, {z2})")]
    InvalidAabb {
        /// Minimum X.
        x1: Scalar,
        /// Minimum Y.
        y1: Scalar,
        /// Minimum Z.
        z1: Scalar,
        /// Maximum X.
        x2: Scalar,
        /// Maximum Y.
        y2: Scalar,
        /// Maximum Z.
        z2: Scalar,
    },
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, RegionError>;
