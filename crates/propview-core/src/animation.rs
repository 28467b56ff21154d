#![forbid(unsafe_code)]

//! Easing and time-based interpolation.
//!
//! Animations here are stateless: the caller stores a timestamp (for hover
//! feedback, the moment a row was last under the pointer) and asks for the
//! value at "now". Nothing ticks, so there is no per-frame bookkeeping and
//! no drift.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f64) -> f64;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Rational ease-in-out: `t² / (2(t² − t) + 1)`.
///
/// Symmetric about `(0.5, 0.5)` with zero slope at both ends. The
/// denominator is at least 0.5 on [0, 1], so it never divides by zero.
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let tt = t * t;
    tt / (2.0 * (tt - t) + 1.0)
}

/// Linear interpolation from `a` to `b`.
#[inline]
pub fn lerp(a: f64, b: f64, amount: f64) -> f64 {
    a + amount * (b - a)
}

// ---------------------------------------------------------------------------
// Time-based interpolation
// ---------------------------------------------------------------------------

/// Fraction of `duration` covered by `elapsed`, saturated to [0, 1].
///
/// A zero duration counts as already finished.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Eased value between `from` and `to` after `elapsed` of a `duration`-long
/// transition.
///
/// The result always lies in `[min(from, to), max(from, to)]` and is exactly
/// `to` once `elapsed >= duration`.
pub fn interpolate(elapsed: Duration, duration: Duration, from: f64, to: f64) -> f64 {
    interpolate_with(elapsed, duration, from, to, ease_in_out)
}

/// [`interpolate`] with a caller-chosen easing curve.
pub fn interpolate_with(
    elapsed: Duration,
    duration: Duration,
    from: f64,
    to: f64,
    easing: EasingFn,
) -> f64 {
    let t = progress(elapsed, duration);
    if t >= 1.0 {
        return to;
    }
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    lerp(from, to, easing(t)).clamp(lo, hi)
}

/// Time needed to travel from `from` to `to` at `speed` units per second.
///
/// Passing the result as the duration of [`interpolate`] turns a
/// fixed-duration fade into a fixed-speed one. Non-positive or non-finite
/// speeds yield [`Duration::ZERO`] (the transition is instant).
pub fn fade_duration(speed: f64, from: f64, to: f64) -> Duration {
    if !(speed > 0.0) || !speed.is_finite() {
        return Duration::ZERO;
    }
    let distance = (to - from).abs();
    Duration::try_from_secs_f64(distance / speed).unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_250: Duration = Duration::from_millis(250);
    const MS_500: Duration = Duration::from_millis(500);
    const SEC_1: Duration = Duration::from_secs(1);

    // ---- Easing tests ----

    #[test]
    fn ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let a = ease_in_out(t);
            let b = 1.0 - ease_in_out(1.0 - t);
            assert!((a - b).abs() < 1e-12, "asymmetric at t={t}");
        }
    }

    #[test]
    fn ease_in_out_clamps_input() {
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn ease_in_out_starts_slow() {
        // Quarter of the way in, less than a quarter of the distance is covered.
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn lerp_basics() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(20.0, 10.0, 0.5), 15.0);
    }

    // ---- Interpolation tests ----

    #[test]
    fn progress_saturates() {
        assert_eq!(progress(Duration::ZERO, SEC_1), 0.0);
        assert!((progress(MS_250, SEC_1) - 0.25).abs() < 1e-12);
        assert_eq!(progress(Duration::from_secs(5), SEC_1), 1.0);
    }

    #[test]
    fn zero_duration_is_finished() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
        assert_eq!(interpolate(Duration::ZERO, Duration::ZERO, 3.0, 9.0), 9.0);
    }

    #[test]
    fn interpolate_reaches_target_exactly() {
        assert_eq!(interpolate(SEC_1, SEC_1, 0.1, 0.7), 0.7);
        assert_eq!(interpolate(Duration::from_secs(3), SEC_1, 0.1, 0.7), 0.7);
    }

    #[test]
    fn interpolate_starts_at_source() {
        assert_eq!(interpolate(Duration::ZERO, SEC_1, 400.0, 120.0), 400.0);
    }

    #[test]
    fn interpolate_midpoint() {
        let v = interpolate(MS_500, SEC_1, 400.0, 100.0);
        assert!((v - 250.0).abs() < 1e-9);
    }

    #[test]
    fn interpolate_with_linear() {
        let v = interpolate_with(MS_250, SEC_1, 0.0, 100.0, linear);
        assert!((v - 25.0).abs() < 1e-9);
    }

    // ---- Fade duration tests ----

    #[test]
    fn fade_duration_is_distance_over_speed() {
        assert_eq!(fade_duration(400.0, 100.0, 500.0), SEC_1);
        assert_eq!(fade_duration(400.0, 500.0, 100.0), SEC_1);
    }

    #[test]
    fn fade_duration_degenerate_speed_is_instant() {
        assert_eq!(fade_duration(0.0, 0.0, 100.0), Duration::ZERO);
        assert_eq!(fade_duration(-1.0, 0.0, 100.0), Duration::ZERO);
        assert_eq!(fade_duration(f64::NAN, 0.0, 100.0), Duration::ZERO);
        assert_eq!(fade_duration(f64::INFINITY, 0.0, 100.0), Duration::ZERO);
    }

    #[test]
    fn fade_duration_zero_distance() {
        assert_eq!(fade_duration(400.0, 42.0, 42.0), Duration::ZERO);
    }
}
