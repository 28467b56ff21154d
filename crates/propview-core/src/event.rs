#![forbid(unsafe_code)]

//! Per-frame input handed to a panel.
//!
//! The panel layout system owns the real event loop; each frame it lends a
//! panel a snapshot of the pointer and the clock. Nothing here is queued:
//! a frame sees exactly one [`FrameInput`].
//!
//! # Design Notes
//!
//! - Pointer coordinates are window pixels, matching [`Bounds`](crate::geometry::Bounds).
//! - `prev_y` is the pointer row sampled on the previous frame. Rows swept
//!   between the two samples count as "virtually" hovered.
//! - Flags use bitflags so hosts can combine them from whatever input API they use.

use bitflags::bitflags;
use std::time::Duration;

bitflags! {
    /// Pointer state bits for the current frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointerFlags: u8 {
        /// No other panel or widget currently owns the pointer.
        const HOVER_ALLOWED = 0b0000_0001;
        /// The primary button went down during this frame.
        const PRIMARY_PRESSED = 0b0000_0010;
    }
}

/// Pointer sample for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    /// Current x position.
    pub x: i32,
    /// Current y position.
    pub y: i32,
    /// Y position on the previous frame.
    pub prev_y: i32,
    /// Hover/click state.
    pub flags: PointerFlags,
    /// Wheel notches this frame. Positive scrolls content up (reveals rows below).
    pub wheel: i32,
}

impl PointerState {
    /// Create a stationary pointer at `(x, y)` with hover allowed.
    #[must_use]
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            prev_y: y,
            flags: PointerFlags::HOVER_ALLOWED,
            wheel: 0,
        }
    }

    /// Set the previous-frame y sample.
    #[must_use]
    pub const fn moved_from(mut self, prev_y: i32) -> Self {
        self.prev_y = prev_y;
        self
    }

    /// Mark the primary button as pressed this frame.
    #[must_use]
    pub fn clicked(mut self) -> Self {
        self.flags |= PointerFlags::PRIMARY_PRESSED;
        self
    }

    /// Replace the flag set.
    #[must_use]
    pub const fn with_flags(mut self, flags: PointerFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the wheel delta.
    #[must_use]
    pub const fn with_wheel(mut self, notches: i32) -> Self {
        self.wheel = notches;
        self
    }

    /// Whether hover feedback may be shown.
    #[inline]
    pub const fn hover_allowed(&self) -> bool {
        self.flags.contains(PointerFlags::HOVER_ALLOWED)
    }

    /// Whether the primary button was pressed this frame.
    #[inline]
    pub const fn primary_pressed(&self) -> bool {
        self.flags.contains(PointerFlags::PRIMARY_PRESSED)
    }

    /// Inclusive `(min, max)` of the rows swept since the previous frame.
    #[inline]
    pub const fn swept_rows(&self) -> (i32, i32) {
        if self.y < self.prev_y {
            (self.y, self.prev_y)
        } else {
            (self.prev_y, self.y)
        }
    }
}

/// Monotonic frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameClock {
    /// Time since an arbitrary fixed origin.
    pub now: Duration,
    /// Duration of the previous frame.
    pub delta: Duration,
}

impl FrameClock {
    /// Create a clock reading.
    #[must_use]
    pub const fn new(now: Duration, delta: Duration) -> Self {
        Self { now, delta }
    }

    /// Timestamp of the previous frame, saturating at the origin.
    #[inline]
    pub fn previous(&self) -> Duration {
        self.now.saturating_sub(self.delta)
    }

    /// Advance by one frame of `delta`.
    #[must_use]
    pub fn tick(self, delta: Duration) -> Self {
        Self {
            now: self.now.saturating_add(delta),
            delta,
        }
    }
}

/// Everything a panel reads from the outside world during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub pointer: PointerState,
    pub clock: FrameClock,
}

impl FrameInput {
    /// Create a frame input.
    #[must_use]
    pub const fn new(pointer: PointerState, clock: FrameClock) -> Self {
        Self { pointer, clock }
    }
}
