#![forbid(unsafe_code)]

//! The host rendering surface.

use crate::color::ColorCategory;

/// Immediate-mode drawing target supplied by the host each frame.
///
/// Coordinates are window pixels. Implementations are expected to clip to
/// whatever scissor region the host set up for the panel; callers may issue
/// geometry that extends past the client area.
pub trait Surface {
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: ColorCategory);

    /// Fill an axis-aligned rectangle. Non-positive sizes draw nothing.
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: ColorCategory);

    /// Draw a one-pixel line segment.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: ColorCategory);

    /// Width in pixels of `text` rendered at `size`.
    fn measure_text_width(&self, text: &str, size: i32) -> i32;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: ColorCategory) {
        (**self).draw_text(text, x, y, size, color);
    }

    #[inline]
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: ColorCategory) {
        (**self).draw_rect(x, y, width, height, color);
    }

    #[inline]
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: ColorCategory) {
        (**self).draw_line(x1, y1, x2, y2, color);
    }

    #[inline]
    fn measure_text_width(&self, text: &str, size: i32) -> i32 {
        (**self).measure_text_width(text, size)
    }
}
