mod support;

use conus::{
    ConeError, ConeSpec, GeometryConstraint, RenderConfig, compute_layout,
    float_types::{PI, Real, TAU},
    render,
};
use proptest::prelude::*;

/// Valid (base, cut, height) triples with the cut anywhere from 0 to 95% of the base.
fn cone_spec() -> impl Strategy<Value = ConeSpec> {
    (1.0..2000.0 as Real, 0.0..0.95 as Real, 0.1..3000.0 as Real, prop::bool::weighted(0.2))
        .prop_map(|(base, cut_ratio, height, full)| {
            let cut = if full { 0.0 } else { base * cut_ratio };
            ConeSpec::new(base, cut, height)
        })
}

proptest! {
    #[test]
    fn radii_ordered_and_angle_in_open_interval(spec in cone_spec()) {
        let layout = compute_layout(spec).unwrap();
        prop_assert!(layout.short_radius() <= layout.long_radius());
        prop_assert!(layout.sector_angle() > 0.0);
        prop_assert!(layout.sector_angle() < TAU);
    }

    #[test]
    fn developed_base_arc_is_base_circumference(spec in cone_spec()) {
        let layout = compute_layout(spec).unwrap();
        prop_assert!(support::rel_eq(layout.developed_base_arc(), PI * spec.base_diameter, 1e-12));
        prop_assert!(support::rel_eq(layout.developed_cut_arc(), PI * spec.cut_diameter, 1e-12));
    }

    #[test]
    fn scaling_inputs_scales_lengths_not_angle(spec in cone_spec(), k in 0.01..100.0 as Real) {
        let layout = compute_layout(spec).unwrap();
        let scaled = compute_layout(spec.scaled(k)).unwrap();
        prop_assert!(support::rel_eq(scaled.short_radius(), layout.short_radius() * k, 1e-10));
        prop_assert!(support::rel_eq(scaled.long_radius(), layout.long_radius() * k, 1e-10));
        prop_assert!(support::rel_eq(scaled.chord_base(), layout.chord_base() * k, 1e-9));
        prop_assert!(support::rel_eq(scaled.chord_cut(), layout.chord_cut() * k, 1e-9));
        prop_assert!(support::approx_eq(scaled.sector_angle(), layout.sector_angle(), 1e-10));
    }

    #[test]
    fn layout_is_scale_free_across_magnitudes(spec in cone_spec(), exponent in -150i32..150) {
        let k = (10.0 as Real).powi(exponent);
        let layout = compute_layout(spec).unwrap();
        let scaled = compute_layout(spec.scaled(k)).unwrap();
        prop_assert!(((scaled.long_radius() / k) / layout.long_radius() - 1.0).abs() < 1e-9);
        prop_assert!(support::approx_eq(scaled.sector_angle(), layout.sector_angle(), 1e-9));
    }

    #[test]
    fn full_cone_apex_points_collapse(base in 1.0..2000.0 as Real, height in 0.1..3000.0 as Real) {
        let layout = compute_layout(ConeSpec::full(base, height)).unwrap();
        prop_assert_eq!(layout.short_radius(), 0.0);
        prop_assert_eq!(layout.a().coords.norm(), 0.0);
        prop_assert_eq!(layout.d().coords.norm(), 0.0);
    }

    #[test]
    fn equal_diameters_never_produce_a_layout(d in 0.001..5000.0 as Real, height in 0.1..3000.0 as Real) {
        prop_assert_eq!(
            compute_layout(ConeSpec::new(d, d, height)),
            Err(ConeError::InvalidGeometry(GeometryConstraint::CutNotBelowBase { base: d, cut: d }))
        );
    }

    #[test]
    fn pattern_bounds_contain_every_corner(spec in cone_spec()) {
        let layout = compute_layout(spec).unwrap();
        let config = RenderConfig::default();
        let rect = render(&layout, &config).bounding_rect().unwrap();
        let eps = 1e-9 * layout.long_radius() * config.factor();
        for p in [layout.a(), layout.b(), layout.c(), layout.d()] {
            let q = p * config.factor();
            prop_assert!(q.x >= rect.min().x - eps && q.x <= rect.max().x + eps);
            prop_assert!(q.y >= rect.min().y - eps && q.y <= rect.max().y + eps);
        }
    }
}
