//! A region algebra library for axis-aligned bounding boxes: decompose
//! lists of AABBs into a [`grid::Grid`], combine grids with the boolean
//! engine, simplify, walk them back into disjoint AABBs, and extract
//! planar faces.

/// The scalar type used throughout this crate.
pub type Scalar = f64;

pub mod aabb;
pub mod boolean;
pub mod convenience;
pub mod decompose;
pub mod error;
pub mod face;
pub mod grid;
pub mod predicates;
pub mod simplify;
pub mod walk;

/// Re-exports of the types most callers need.
pub mod prelude {
    pub use crate::aabb::{Aabb, Axis};
    pub use crate::boolean::BoolOp;
    pub use crate::error::{RegionError, Result};
    pub use crate::grid::Grid;
}
