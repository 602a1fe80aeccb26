use expand_core::{compute_geometry, ExpandError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn geometry_invariants_hold(
        width in 1u32..5_000,
        height in 1u32..5_000,
        ratio in 0.01f64..30.0,
    ) {
        let expected_width = (height as f64 * ratio).round();

        match compute_geometry(width, height, ratio) {
            Ok(g) => {
                prop_assert_eq!(g.new_width as f64, expected_width);
                prop_assert_eq!(g.new_height, height);
                prop_assert_eq!(g.left_padding + width + g.right_padding, g.new_width);
                prop_assert!(g.right_padding - g.left_padding <= 1);
            }
            Err(ExpandError::InvalidGeometry(_)) => {
                prop_assert!(expected_width < width as f64);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn geometry_is_deterministic(
        width in 1u32..2_000,
        height in 1u32..2_000,
        ratio in 0.5f64..20.0,
    ) {
        let first = compute_geometry(width, height, ratio).ok();
        let second = compute_geometry(width, height, ratio).ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_positive_ratio_is_invalid_geometry(
        width in 1u32..2_000,
        height in 1u32..2_000,
        ratio in -50.0f64..=0.0,
    ) {
        prop_assert!(matches!(
            compute_geometry(width, height, ratio),
            Err(ExpandError::InvalidGeometry(_))
        ));
    }
}
