//! Integration tests for the animation module.

use propview_core::animation::*;
use proptest::prelude::*;
use std::time::Duration;

#[test]
fn ease_in_out_is_monotonic() {
    let mut prev = 0.0f64;
    for i in 0..=1000 {
        let t = f64::from(i) / 1000.0;
        let v = ease_in_out(t);
        assert!(v >= prev - 1e-12, "easing should be monotonic at t={t}");
        prev = v;
    }
}

#[test]
fn fixed_speed_fade_takes_distance_over_speed() {
    let duration = fade_duration(400.0, 600.0, 200.0);
    assert_eq!(duration, Duration::from_secs(1));
    let halfway = interpolate(Duration::from_millis(500), duration, 600.0, 200.0);
    assert!(
        (halfway - 400.0).abs() < 1e-9,
        "halfway through a symmetric ease should be the midpoint, got {halfway}"
    );
}

proptest! {
    #[test]
    fn interpolate_stays_within_endpoints(
        elapsed_ms in 0u64..10_000,
        duration_ms in 0u64..5_000,
        from in -10_000.0f64..10_000.0,
        to in -10_000.0f64..10_000.0,
    ) {
        let v = interpolate(
            Duration::from_millis(elapsed_ms),
            Duration::from_millis(duration_ms),
            from,
            to,
        );
        prop_assert!(v >= from.min(to) && v <= from.max(to), "{v} escaped [{from}, {to}]");
    }

    #[test]
    fn interpolate_is_target_once_finished(
        duration_ms in 0u64..5_000,
        extra_ms in 0u64..5_000,
        from in -10_000.0f64..10_000.0,
        to in -10_000.0f64..10_000.0,
    ) {
        let v = interpolate(
            Duration::from_millis(duration_ms + extra_ms),
            Duration::from_millis(duration_ms),
            from,
            to,
        );
        prop_assert_eq!(v, to);
    }

    #[test]
    fn ease_output_is_unit_bounded(t in -2.0f64..3.0) {
        let v = ease_in_out(t);
        prop_assert!((0.0..=1.0).contains(&v), "ease_in_out({t}) = {v}");
    }
}
