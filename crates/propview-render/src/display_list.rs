#![forbid(unsafe_code)]

//! A [`Surface`] that records draw calls instead of rasterizing them.
//!
//! Used for headless rendering (the demo prints it) and as the assertion
//! target in tests. Text is measured with a fixed per-cell advance and
//! `unicode-width` cell counts, so measurements are deterministic.

use crate::color::ColorCategory;
use crate::surface::Surface;
use propview_core::geometry::Bounds;
use unicode_width::UnicodeWidthStr;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Text {
        text: String,
        x: i32,
        y: i32,
        size: i32,
        color: ColorCategory,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: ColorCategory,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: ColorCategory,
    },
}

impl DrawCommand {
    /// Color category of the command.
    pub const fn color(&self) -> ColorCategory {
        match self {
            Self::Text { color, .. } | Self::Rect { color, .. } | Self::Line { color, .. } => {
                *color
            }
        }
    }
}

/// Fixed-advance text metrics: every terminal cell of text is
/// `size * numerator / denominator` pixels wide (at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    pub numerator: i32,
    pub denominator: i32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            numerator: 1,
            denominator: 1,
        }
    }
}

impl MonospaceMetrics {
    /// Pixel advance of one cell at `size`.
    #[inline]
    pub fn advance(&self, size: i32) -> i32 {
        let denominator = self.denominator.max(1);
        (size.saturating_mul(self.numerator) / denominator).max(1)
    }

    /// Width of the widest line of `text`.
    pub fn measure(&self, text: &str, size: i32) -> i32 {
        let cells = text
            .split('\n')
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);
        i32::try_from(cells)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.advance(size))
    }
}

/// Recording surface.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    metrics: MonospaceMetrics,
}

impl DisplayList {
    /// Create an empty list with 1:1 metrics (a glyph is `size` pixels wide).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom text metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: MonospaceMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Recorded commands, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget every recorded command, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded text, in issue order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Position of the first text command whose content equals `needle`.
    pub fn text_position(&self, needle: &str) -> Option<(i32, i32)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, x, y, .. } if text == needle => Some((*x, *y)),
            _ => None,
        })
    }

    /// All recorded rectangles as `(bounds, color)`.
    pub fn rects(&self) -> impl Iterator<Item = (Bounds, ColorCategory)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => Some((Bounds::from_origin_size(*x, *y, *width, *height), *color)),
            _ => None,
        })
    }

    /// All recorded lines as `((x1, y1), (x2, y2), color)`.
    pub fn lines(&self) -> impl Iterator<Item = ((i32, i32), (i32, i32), ColorCategory)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => Some(((*x1, *y1), (*x2, *y2), *color)),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: ColorCategory) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            size,
            color,
        });
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: ColorCategory) {
        if width <= 0 || height <= 0 {
            return;
        }
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: ColorCategory) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    fn measure_text_width(&self, text: &str, size: i32) -> i32 {
        self.metrics.measure(text, size)
    }
}
