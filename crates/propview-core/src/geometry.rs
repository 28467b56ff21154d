#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Everything is in signed pixel coordinates with the origin at the top-left
//! of the host window. Rows scrolled above the panel produce negative `y`
//! values, which is why these are `i32` rather than unsigned.

/// An edge-described rectangle: the client area handed to a panel each frame.
///
/// `xmax`/`ymax` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    /// Left edge (inclusive).
    pub xmin: i32,
    /// Top edge (inclusive).
    pub ymin: i32,
    /// Right edge (exclusive).
    pub xmax: i32,
    /// Bottom edge (exclusive).
    pub ymax: i32,
}

impl Bounds {
    /// Create bounds from its four edges.
    #[inline]
    pub const fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Create bounds from an origin and a size.
    #[inline]
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Horizontal extent. Never negative.
    #[inline]
    pub const fn width(&self) -> i32 {
        let w = self.xmax.saturating_sub(self.xmin);
        if w < 0 { 0 } else { w }
    }

    /// Vertical extent. Never negative.
    #[inline]
    pub const fn height(&self) -> i32 {
        let h = self.ymax.saturating_sub(self.ymin);
        if h < 0 { 0 } else { h }
    }
}

/// Per-side distances for padding/margin.
///
/// Signed, since row padding may pull an edge inward (negative bottom padding
/// tucks a highlight under the next row's text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    /// Create new sides with specific values.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}
