#![forbid(unsafe_code)]

//! Hover detection and highlight animation for property rows.
//!
//! A row remembers only when the pointer was last over it. Each frame the
//! highlight's right edge is derived from that timestamp: fully extended
//! while hovered, then easing back to hug the name at a fixed pixel speed.

use std::time::Duration;

use propview_core::animation;
use propview_core::event::{FrameClock, PointerState};

/// Fixed-speed highlight fade, faster on wider panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverAnimator {
    speed: f64,
}

impl HoverAnimator {
    /// Animator moving `speed` pixels per second regardless of panel width.
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Scale `base_speed` up by one step for every full `bracket_width` of
    /// panel width, so wide panels take about as long as narrow ones.
    pub fn for_panel_width(base_speed: f64, bracket_width: i32, panel_width: i32) -> Self {
        let steps = if bracket_width > 0 {
            1 + panel_width.max(0) / bracket_width
        } else {
            1
        };
        Self::new(base_speed * f64::from(steps))
    }

    /// Pixels per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Time the edge needs to travel between `from` and `to`.
    pub fn fade_duration(&self, from: i32, to: i32) -> Duration {
        animation::fade_duration(self.speed, f64::from(from), f64::from(to))
    }

    /// Right edge of a row's highlight at `now`.
    ///
    /// `hover_edge` is the fully extended edge and `rest_edge` the one that
    /// hugs the name. A row never hovered rests.
    pub fn highlight_edge(
        &self,
        now: Duration,
        last_hovered: Option<Duration>,
        hovered: bool,
        hover_edge: i32,
        rest_edge: i32,
    ) -> i32 {
        if hovered {
            return hover_edge;
        }
        let Some(since) = last_hovered else {
            return rest_edge;
        };
        let elapsed = now.saturating_sub(since);
        let duration = self.fade_duration(hover_edge, rest_edge);
        if elapsed >= duration {
            return rest_edge;
        }
        animation::interpolate(elapsed, duration, f64::from(hover_edge), f64::from(rest_edge))
            .round() as i32
    }
}

/// How the pointer relates to one row this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowHover {
    /// The pointer is over the row now.
    pub direct: bool,
    /// The pointer crossed the row between the previous sample and this one.
    pub swept: bool,
}

impl RowHover {
    /// Test the row spanning `[x, x_max]` horizontally and `[y, y_next)`
    /// vertically. Both flags stay false when hover is not allowed.
    pub fn detect(pointer: &PointerState, x: i32, x_max: i32, y: i32, y_next: i32) -> Self {
        if !pointer.hover_allowed() {
            return Self::default();
        }
        let horizontal = x <= pointer.x && pointer.x <= x_max;
        if !horizontal {
            return Self::default();
        }
        let (lo, hi) = pointer.swept_rows();
        Self {
            direct: y <= pointer.y && pointer.y < y_next,
            swept: lo < y_next && hi >= y,
        }
    }

    /// New `last_hovered` stamp for the row, if any.
    ///
    /// A swept row is stamped as if hovered on the previous frame.
    pub fn stamp(&self, clock: &FrameClock) -> Option<Duration> {
        if self.direct {
            Some(clock.now)
        } else if self.swept {
            Some(clock.previous())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propview_core::event::PointerFlags;

    const NOW: Duration = Duration::from_secs(10);

    #[test]
    fn speed_brackets() {
        assert_eq!(HoverAnimator::for_panel_width(400.0, 600, 300).speed(), 400.0);
        assert_eq!(HoverAnimator::for_panel_width(400.0, 600, 600).speed(), 800.0);
        assert_eq!(HoverAnimator::for_panel_width(400.0, 600, 1300).speed(), 1200.0);
        assert_eq!(HoverAnimator::for_panel_width(400.0, 0, 1300).speed(), 400.0);
    }

    #[test]
    fn fade_duration_is_distance_over_speed() {
        let animator = HoverAnimator::new(400.0);
        assert_eq!(animator.fade_duration(0, 200), Duration::from_millis(500));
        assert_eq!(animator.fade_duration(200, 0), Duration::from_millis(500));
    }

    #[test]
    fn edge_when_hovered_and_at_rest() {
        let animator = HoverAnimator::new(400.0);
        assert_eq!(animator.highlight_edge(NOW, Some(NOW), true, 300, 100), 300);
        assert_eq!(animator.highlight_edge(NOW, None, false, 300, 100), 100);
        let long_ago = NOW - Duration::from_secs(5);
        assert_eq!(animator.highlight_edge(NOW, Some(long_ago), false, 300, 100), 100);
    }

    #[test]
    fn edge_eases_back() {
        let animator = HoverAnimator::new(400.0);
        // 200px at 400px/s takes 500ms; halfway the eased curve is at 0.5.
        let since = NOW - Duration::from_millis(250);
        assert_eq!(animator.highlight_edge(NOW, Some(since), false, 300, 100), 200);

        let early = NOW - Duration::from_millis(50);
        let edge = animator.highlight_edge(NOW, Some(early), false, 300, 100);
        assert!(edge > 200 && edge <= 300, "edge {edge}");
    }

    #[test]
    fn direct_hover() {
        let pointer = PointerState::at(20, 35);
        let hover = RowHover::detect(&pointer, 10, 100, 30, 46);
        assert!(hover.direct);
        assert!(hover.swept);
        assert!(!RowHover::detect(&pointer, 10, 100, 46, 62).direct);
    }

    #[test]
    fn horizontal_bound_applies() {
        let pointer = PointerState::at(5, 35);
        assert_eq!(RowHover::detect(&pointer, 10, 100, 30, 46), RowHover::default());
    }

    #[test]
    fn sweep_covers_skipped_rows() {
        let pointer = PointerState::at(20, 100).moved_from(10);
        let hover = RowHover::detect(&pointer, 10, 100, 40, 56);
        assert!(!hover.direct);
        assert!(hover.swept);

        let clock = FrameClock::new(NOW, Duration::from_millis(16));
        assert_eq!(hover.stamp(&clock), Some(NOW - Duration::from_millis(16)));
    }

    #[test]
    fn suppressed_hover() {
        let pointer = PointerState::at(20, 35).with_flags(PointerFlags::empty());
        let hover = RowHover::detect(&pointer, 10, 100, 30, 46);
        assert_eq!(hover, RowHover::default());
        assert_eq!(hover.stamp(&FrameClock::new(NOW, Duration::ZERO)), None);
    }
}
