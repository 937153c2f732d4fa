//! Whole-region predicates derived from the boolean engine's `evaluate`.

use crate::boolean::{evaluate, BoolOp};
use crate::grid::Grid;

/// Whether `l` and `r` represent exactly the same region.
pub fn equal(l: &Grid, r: &Grid) -> bool {
    !evaluate(l, r, BoolOp::Xor)
}

/// Whether `l` and `r` share at least one point.
pub fn intersects(l: &Grid, r: &Grid) -> bool {
    evaluate(l, r, BoolOp::And)
}

/// Whether every point of `r` lies in `l`.
pub fn contains(l: &Grid, r: &Grid) -> bool {
    !evaluate(r, l, BoolOp::Sub)
}

#[cfg(test)]
mod test_predicates {
    use super::*;
    use crate::aabb::Aabb;
    use crate::decompose::from_aabbs;

    #[test]
    fn test_equal_reflexive() {
        let b = Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
        let g = from_aabbs(&[b]).unwrap();
        assert!(equal(&g, &g));
    }

    #[test]
    fn test_contains_and_intersects() {
        let whole = Aabb::new(0.0, 0.0, 0.0, 4.0, 4.0, 4.0).unwrap();
        let inner = Aabb::new(1.0, 1.0, 1.0, 2.0, 2.0, 2.0).unwrap();
        let disjoint = Aabb::new(10.0, 10.0, 10.0, 11.0, 11.0, 11.0).unwrap();

        let g_whole = from_aabbs(&[whole]).unwrap();
        let g_inner = from_aabbs(&[inner]).unwrap();
        let g_disjoint = from_aabbs(&[disjoint]).unwrap();

        assert!(contains(&g_whole, &g_inner));
        assert!(!contains(&g_inner, &g_whole));
        assert!(intersects(&g_whole, &g_inner));
        assert!(!intersects(&g_whole, &g_disjoint));
        assert!(!equal(&g_whole, &g_inner));
    }
}
