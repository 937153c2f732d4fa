use proptest::prelude::*;

use regionalg::aabb::Aabb;
use regionalg::boolean::{op, BoolOp};
use regionalg::decompose::from_aabbs;
use regionalg::predicates::{contains, equal};
use regionalg::simplify::simplify;
use regionalg::walk::walk_collect;

fn coord() -> impl Strategy<Value = f64> {
    (0i32..6).prop_map(f64::from)
}

fn aabb_strategy() -> impl Strategy<Value = Aabb> {
    (coord(), coord(), coord(), 1i32..3, 1i32..3, 1i32..3).prop_map(
        |(x1, y1, z1, dx, dy, dz)| {
            Aabb::new(x1, y1, z1, x1 + dx as f64, y1 + dy as f64, z1 + dz as f64).unwrap()
        },
    )
}

fn aabbs_strategy() -> impl Strategy<Value = Vec<Aabb>> {
    proptest::collection::vec(aabb_strategy(), 0..5)
}

proptest! {
    #[test]
    fn or_is_commutative(a in aabbs_strategy(), b in aabbs_strategy()) {
        let ga = from_aabbs(&a).unwrap();
        let gb = from_aabbs(&b).unwrap();
        let ab = op(&ga, &gb, BoolOp::Or).unwrap();
        let ba = op(&gb, &ga, BoolOp::Or).unwrap();
        prop_assert!(equal(&ab, &ba));
    }

    #[test]
    fn and_is_commutative(a in aabbs_strategy(), b in aabbs_strategy()) {
        let ga = from_aabbs(&a).unwrap();
        let gb = from_aabbs(&b).unwrap();
        let ab = op(&ga, &gb, BoolOp::And).unwrap();
        let ba = op(&gb, &ga, BoolOp::And).unwrap();
        prop_assert!(equal(&ab, &ba));
    }

    #[test]
    fn self_subtraction_is_empty(a in aabbs_strategy()) {
        let ga = from_aabbs(&a).unwrap();
        let diff = op(&ga, &ga, BoolOp::Sub).unwrap();
        prop_assert!(diff.is_empty());
    }

    #[test]
    fn and_or_sub_reconstructs_left(a in aabbs_strategy(), b in aabbs_strategy()) {
        let ga = from_aabbs(&a).unwrap();
        let gb = from_aabbs(&b).unwrap();
        let intersection = op(&ga, &gb, BoolOp::And).unwrap();
        let difference = op(&ga, &gb, BoolOp::Sub).unwrap();
        let reconstructed = op(&intersection, &difference, BoolOp::Or).unwrap();
        prop_assert!(equal(&reconstructed, &ga));
    }

    #[test]
    fn containment_iff_union_is_left(a in aabbs_strategy(), b in aabbs_strategy()) {
        let ga = from_aabbs(&a).unwrap();
        let gb = from_aabbs(&b).unwrap();
        let union = op(&ga, &gb, BoolOp::Or).unwrap();
        prop_assert_eq!(contains(&ga, &gb), equal(&union, &ga));
    }

    #[test]
    fn simplify_preserves_region(a in aabbs_strategy()) {
        let ga = from_aabbs(&a).unwrap();
        let simplified = simplify(&ga).unwrap();
        prop_assert!(equal(&ga, &simplified));
    }

    #[test]
    fn walk_then_redecompose_round_trips(a in aabbs_strategy()) {
        let ga = from_aabbs(&a).unwrap();
        let pieces = walk_collect(&ga);
        let rebuilt = from_aabbs(&pieces).unwrap();
        prop_assert!(equal(&ga, &rebuilt));
    }
}
