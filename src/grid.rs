//! The central region representation: per-axis sorted edge arrays plus a
//! packed vertex-occupancy bitset.

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;

use crate::aabb::Axis;
use crate::error::{RegionError, Result};
use crate::Scalar;

/// Exceeding this many distinct edges on any axis is a [`RegionError::TooComplex`].
pub const MAX_EDGES_PER_AXIS: usize = 1023;

/// A single AABB's worth of statically-known edges and occupancy: exactly
/// one cell, with only its origin marked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BorrowedGrid {
    pub(crate) edges: [Scalar; 6],
}

impl BorrowedGrid {
    fn edges(&self, axis: Axis) -> &[Scalar] {
        match axis {
            Axis::X => &self.edges[0..2],
            Axis::Y => &self.edges[2..4],
            Axis::Z => &self.edges[4..6],
        }
    }
}

/// An owned grid: a single allocation holding the concatenated X, Y, Z edge
/// arrays, plus a packed occupancy bitset.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OwnedGrid {
    edges: Box<[Scalar]>,
    nx: usize,
    ny: usize,
    nz: usize,
    disp: u32,
    bits: BitVec<u32, Lsb0>,
}

impl OwnedGrid {
    fn edges(&self, axis: Axis) -> &[Scalar] {
        match axis {
            Axis::X => &self.edges[0..self.nx],
            Axis::Y => &self.edges[self.nx..self.nx + self.ny],
            Axis::Z => &self.edges[self.nx + self.ny..self.nx + self.ny + self.nz],
        }
    }
}

/// The region representation. `Borrowed` is a read-only, statically-backed
/// view onto a single AABB (see [`crate::convenience`]); mutation is only
/// ever expressed by producing a fresh `Owned` grid, never by writing
/// through `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub enum Grid {
    /// A grid built by decomposition, a boolean op, simplification, or face
    /// extraction.
    Owned(OwnedGrid),
    /// A lightweight read-only view of a single AABB.
    Borrowed(BorrowedGrid),
}

/// Return the exponent of the next power of two greater than or equal to
/// `n`, mirroring the reference implementation's `next_power_of_two`
/// exactly (including its quirk of never considering an exponent of zero,
/// so `n <= 2` both yield `1`). Returns `None` if `n` exceeds
/// [`MAX_EDGES_PER_AXIS`].
pub(crate) fn next_power_of_two_exp(n: usize) -> Option<u32> {
    if n > MAX_EDGES_PER_AXIS {
        return None;
    }
    for i in 1..32u32 {
        if (1u64 << i) >= n as u64 {
            return Some(i);
        }
    }
    None
}

/// Number of bits the bitset must hold for the given displacement and axis
/// lengths, matching the reference's `BITSET_SIZE` address-space formula.
pub(crate) fn bitset_len_bits(disp: u32, nx: usize, ny: usize, nz: usize) -> usize {
    (nx << (disp + disp)) + (ny << disp) + nz
}

#[inline]
pub(crate) fn bit_index(disp: u32, px: usize, py: usize, pz: usize) -> usize {
    (px << (disp + disp)) + (py << disp) + pz
}

impl Grid {
    /// The canonical empty region.
    pub fn empty() -> Self {
        Grid::Owned(OwnedGrid {
            edges: Box::new([]),
            nx: 0,
            ny: 0,
            nz: 0,
            disp: 0,
            bits: BitVec::new(),
        })
    }

    pub(crate) fn from_owned(owned: OwnedGrid) -> Self {
        Grid::Owned(owned)
    }

    /// The sorted, distinct edge values on `axis`.
    pub fn edges(&self, axis: Axis) -> &[Scalar] {
        match self {
            Grid::Owned(g) => g.edges(axis),
            Grid::Borrowed(b) => b.edges(axis),
        }
    }

    /// Number of distinct edges on `axis`.
    pub fn len(&self, axis: Axis) -> usize {
        self.edges(axis).len()
    }

    /// The packing displacement `d`.
    pub fn disp(&self) -> u32 {
        match self {
            Grid::Owned(g) => g.disp,
            Grid::Borrowed(_) => 1,
        }
    }

    /// Whether the vertex `(px, py, pz)` is marked as the origin of a cell.
    pub fn is_marked(&self, px: usize, py: usize, pz: usize) -> bool {
        let idx = bit_index(self.disp(), px, py, pz);
        match self {
            Grid::Owned(g) => g.bits.get(idx).map(|b| *b).unwrap_or(false),
            Grid::Borrowed(_) => idx == 0,
        }
    }

    /// Return the position of the greatest edge on `axis` that is `<= v`,
    /// or `None` if every edge on `axis` exceeds `v` (or the axis is empty).
    pub fn bisect(&self, axis: Axis, v: Scalar) -> Option<usize> {
        let edges = self.edges(axis);
        if edges.is_empty() {
            return None;
        }
        // `partition_point` finds the first index where the predicate is
        // false; edges[..p] all satisfy `e <= v`, so p - 1 is the greatest
        // edge not exceeding v (if any exist).
        let p = edges.partition_point(|&e| e <= v);
        if p == 0 {
            None
        } else {
            Some(p - 1)
        }
    }

    /// Whether this region is empty: any axis has no edges, or no vertex is
    /// marked.
    pub fn is_empty(&self) -> bool {
        if self.len(Axis::X) == 0 || self.len(Axis::Y) == 0 || self.len(Axis::Z) == 0 {
            return true;
        }
        !self.any_marked()
    }

    fn any_marked(&self) -> bool {
        match self {
            Grid::Owned(g) => g.bits.any(),
            Grid::Borrowed(_) => true,
        }
    }

    /// Whether `(x, y, z)` is exactly the origin of some marked cell.
    pub fn is_aabb_origin(&self, x: Scalar, y: Scalar, z: Scalar) -> bool {
        let px = match self.bisect(Axis::X, x) {
            Some(p) if self.edges(Axis::X)[p] == x => p,
            _ => return false,
        };
        let py = match self.bisect(Axis::Y, y) {
            Some(p) if self.edges(Axis::Y)[p] == y => p,
            _ => return false,
        };
        let pz = match self.bisect(Axis::Z, z) {
            Some(p) if self.edges(Axis::Z)[p] == z => p,
            _ => return false,
        };
        self.is_marked(px, py, pz)
    }
}

/// Builder used internally by the decomposer, boolean engine, simplifier,
/// and face extractor to assemble a fresh [`OwnedGrid`].
pub(crate) struct GridBuilder {
    x: Vec<Scalar>,
    y: Vec<Scalar>,
    z: Vec<Scalar>,
    disp: u32,
    bits: BitVec<u32, Lsb0>,
}

impl GridBuilder {
    pub(crate) fn new(x: Vec<Scalar>, y: Vec<Scalar>, z: Vec<Scalar>) -> Result<Self> {
        for (axis, edges) in [(Axis::X, &x), (Axis::Y, &y), (Axis::Z, &z)] {
            if edges.len() > MAX_EDGES_PER_AXIS {
                log::warn!(
                    "axis {axis:?} has {len} edges, exceeding the {max} limit",
                    len = edges.len(),
                    max = MAX_EDGES_PER_AXIS
                );
                return Err(RegionError::TooComplex {
                    axis,
                    len: edges.len(),
                    max: MAX_EDGES_PER_AXIS,
                });
            }
        }
        let disp = next_power_of_two_exp(x.len().max(y.len()).max(z.len()))
            .expect("axis lengths already bounds-checked above");
        let bits = BitVec::repeat(false, bitset_len_bits(disp, x.len(), y.len(), z.len()));
        Ok(GridBuilder { x, y, z, disp, bits })
    }

    pub(crate) fn nx(&self) -> usize {
        self.x.len()
    }
    pub(crate) fn ny(&self) -> usize {
        self.y.len()
    }
    pub(crate) fn nz(&self) -> usize {
        self.z.len()
    }
    pub(crate) fn disp(&self) -> u32 {
        self.disp
    }

    pub(crate) fn edges(&self, axis: Axis) -> &[Scalar] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub(crate) fn mark(&mut self, px: usize, py: usize, pz: usize) {
        let idx = bit_index(self.disp, px, py, pz);
        self.bits.set(idx, true);
    }

    pub(crate) fn is_marked(&self, px: usize, py: usize, pz: usize) -> bool {
        let idx = bit_index(self.disp, px, py, pz);
        self.bits.get(idx).map(|b| *b).unwrap_or(false)
    }

    pub(crate) fn build(self) -> OwnedGrid {
        let GridBuilder { x, y, z, disp, bits } = self;
        let nx = x.len();
        let ny = y.len();
        let nz = z.len();
        let mut edges = Vec::with_capacity(nx + ny + nz);
        edges.extend(x);
        edges.extend(y);
        edges.extend(z);
        OwnedGrid { edges: edges.into_boxed_slice(), nx, ny, nz, disp, bits }
    }
}

#[cfg(test)]
mod test_next_power_of_two_exp {
    use super::*;

    #[test]
    fn test_small() {
        assert_eq!(next_power_of_two_exp(0), Some(1));
        assert_eq!(next_power_of_two_exp(1), Some(1));
        assert_eq!(next_power_of_two_exp(2), Some(1));
        assert_eq!(next_power_of_two_exp(3), Some(2));
        assert_eq!(next_power_of_two_exp(4), Some(2));
        assert_eq!(next_power_of_two_exp(5), Some(3));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(next_power_of_two_exp(1024), None);
        assert!(next_power_of_two_exp(1023).is_some());
    }
}

#[cfg(test)]
mod test_bisect {
    use super::*;
    use crate::decompose::from_aabbs;
    use crate::aabb::Aabb;

    #[test]
    fn test_bisect_bounds() {
        let b = Aabb::new(10.0, 10.0, 10.0, 23.0, 11.0, 25.0).unwrap();
        let g = from_aabbs(&[b]).unwrap();
        assert_eq!(g.bisect(Axis::X, 5.0), None);
        assert_eq!(g.bisect(Axis::X, 10.0), Some(0));
        assert_eq!(g.bisect(Axis::X, 15.0), Some(0));
        assert_eq!(g.bisect(Axis::X, 23.0), Some(1));
        assert_eq!(g.bisect(Axis::X, 100.0), Some(1));
    }
}
