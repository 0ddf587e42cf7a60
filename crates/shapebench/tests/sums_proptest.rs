//! Property tests for the summation runners over arbitrary dataset sizes.

use proptest::prelude::*;
use shapebench::prelude::*;
use shapebench::sum::Strategy;

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn rolled_matches_unrolled(n in 0usize..2_000) {
        let ds = Dataset::generate(n);
        for strategy in Strategy::ALL {
            let r = run(strategy, LoopShape::Rolled, &ds);
            let u = run(strategy, LoopShape::Unrolled, &ds);
            prop_assert!(approx_eq(r, u, SUM_EPS), "{} n={}: {} vs {}", strategy, n, r, u);
        }
    }

    #[test]
    fn strategies_agree(n in 0usize..2_000) {
        let ds = Dataset::generate(n);
        let reference = run(Strategy::Dynamic, LoopShape::Rolled, &ds);
        for strategy in Strategy::ALL {
            for shape in LoopShape::ALL {
                let total = run(strategy, shape, &ds);
                prop_assert!(approx_eq(total, reference, SUM_EPS));
            }
        }
    }

    #[test]
    fn union_and_enum_describe_the_same_shape(i in 0usize..1_000_000) {
        let shape = shapebench::dataset::shape_at(i);
        let su = ShapeUnion::from(shape);
        prop_assert_eq!(su.tag, kind_for(i));
        prop_assert_eq!(su.width, dimension(i));
        prop_assert_eq!(su.height, dimension(i));
        prop_assert_eq!(su.area(), shape.area());
        prop_assert_eq!(area_by_table(&su), shape.area());
    }

    #[test]
    fn generation_is_deterministic(n in 0usize..500) {
        let a = Dataset::generate(n);
        let b = Dataset::generate(n);
        prop_assert_eq!(a.unions(), b.unions());
        prop_assert_eq!(a.closed(), b.closed());
    }
}
