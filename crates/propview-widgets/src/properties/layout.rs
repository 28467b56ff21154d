#![forbid(unsafe_code)]

//! Content pass: row heights, hover state, collapse toggling and text.
//!
//! One forward walk over the store. Rows inside a collapsed collection are
//! still indexed (their bottom edge repeats the previous one) so the
//! grouping pass can read heights by store index. The walk stops at the
//! first row that starts below the panel.

use std::time::Duration;

use propview_core::event::{FrameClock, FrameInput};
use propview_core::geometry::Bounds;
use propview_render::{ColorCategory, Surface};

use super::config::PropertiesConfig;
use super::entry::{Label, PropertyEntry, ValueEntry};
use super::hover::{HoverAnimator, RowHover};
use super::store::PropertyStore;
use super::value::{line_count, resolve};

/// Pixel landmarks of the panel for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMetrics {
    /// Client rectangle.
    pub bounds: Bounds,
    /// Left edge of depth-zero names.
    pub x_baseline: i32,
    /// Right edge of row content.
    pub x_max: i32,
    /// Top of the first row, after scrolling.
    pub start_y: i32,
    /// Rows starting below this are not processed.
    pub bottom: i32,
    /// Left edge of the divider bar.
    pub divider_x: i32,
    /// Left edge of value text.
    pub value_x: i32,
    /// Client width.
    pub panel_width: i32,
}

impl PanelMetrics {
    pub fn new(bounds: Bounds, config: &PropertiesConfig, scroll_y: i32) -> Self {
        let divider_x = bounds.xmin + config.divider_x - config.padding_x;
        Self {
            bounds,
            x_baseline: bounds.xmin + config.padding_x,
            x_max: bounds.xmax - config.padding_x,
            start_y: bounds.ymin.saturating_add(config.padding_y).saturating_sub(scroll_y),
            bottom: bounds.ymax,
            divider_x,
            value_x: divider_x + config.divider_width + config.padding_x,
            panel_width: bounds.width(),
        }
    }
}

/// Outcome of [`run_content_pass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPass {
    /// Number of store entries walked; the rest start below the panel.
    pub visible_count: usize,
    /// Header toggled by a click this frame.
    pub toggled: Option<usize>,
    /// Bottom edge of the last walked entry.
    pub end_y: i32,
}

impl ContentPass {
    /// Whether every entry in a store of `len` entries was walked.
    pub fn is_complete(&self, len: usize) -> bool {
        self.visible_count == len
    }
}

/// Walk `store`, drawing each visible row and recording its bottom edge.
///
/// `line_heights` is cleared and refilled with one value per walked entry.
/// `scratch` backs linked values' text.
#[allow(clippy::too_many_arguments)]
pub fn run_content_pass<S: Surface + ?Sized>(
    store: &mut PropertyStore<'_>,
    surface: &mut S,
    config: &PropertiesConfig,
    metrics: &PanelMetrics,
    input: &FrameInput,
    scratch: &mut String,
    line_heights: &mut Vec<i32>,
) -> ContentPass {
    line_heights.clear();

    let painter = RowPainter {
        config,
        metrics,
        input,
        animator: HoverAnimator::for_panel_width(
            config.hover_speed,
            config.hover_bracket_width,
            metrics.panel_width,
        ),
    };
    let line_height = config.row_height();

    let mut y = metrics.start_y;
    let mut depth: i32 = 0;
    // Depth of the collapsed header being skipped over, if any.
    let mut hide_until: Option<i32> = None;
    let mut toggled = None;
    let mut visible_count = store.len();

    for (index, entry) in store.entries_mut().iter_mut().enumerate() {
        if y > metrics.bottom {
            visible_count = index;
            break;
        }

        if let Some(hidden_depth) = hide_until {
            match entry {
                PropertyEntry::Header(_) => depth += 1,
                PropertyEntry::Closer => {
                    depth -= 1;
                    if depth == hidden_depth {
                        hide_until = None;
                    }
                }
                PropertyEntry::Value(_) => {}
            }
            line_heights.push(line_heights.last().copied().unwrap_or(metrics.start_y));
            continue;
        }

        let y_next = match entry {
            PropertyEntry::Closer => {
                depth -= 1;
                y.saturating_add(config.closer_row_height())
            }
            PropertyEntry::Header(header) => {
                let x = painter.column(depth);
                let y_next = y.saturating_add(line_height);
                let hover = painter.paint_highlight(
                    surface,
                    x,
                    y,
                    y_next,
                    &mut header.label,
                    &mut header.last_hovered,
                    header.kind.color(),
                );
                if hover.direct && input.pointer.primary_pressed() {
                    header.collapsed = !header.collapsed;
                    toggled = Some(index);
                    propview_core::debug!(
                        index,
                        name = header.label.as_str(),
                        collapsed = header.collapsed,
                        "header collapse toggled"
                    );
                }
                surface.draw_text(
                    header.label.as_str(),
                    x,
                    y,
                    config.font_size,
                    ColorCategory::Foreground,
                );
                if header.collapsed {
                    hide_until = Some(depth);
                }
                depth += 1;
                y_next
            }
            PropertyEntry::Value(ValueEntry {
                label,
                kind,
                source,
                last_hovered,
            }) => {
                let x = painter.column(depth);
                let text = resolve(source, scratch);
                let lines = i32::try_from(line_count(text)).unwrap_or(i32::MAX);
                let y_next = y.saturating_add(line_height.saturating_mul(lines));
                painter.paint_highlight(surface, x, y, y_next, label, last_hovered, kind.color());
                surface.draw_text(label.as_str(), x, y, config.font_size, ColorCategory::Foreground);
                let mut line_y = y;
                for line in text.split('\n') {
                    surface.draw_text(
                        line,
                        metrics.value_x,
                        line_y,
                        config.font_size,
                        ColorCategory::Foreground,
                    );
                    line_y = line_y.saturating_add(line_height);
                }
                y_next
            }
        };

        line_heights.push(y_next);
        y = y_next;
    }

    ContentPass {
        visible_count,
        toggled,
        end_y: y,
    }
}

/// Per-frame constants for drawing rows.
struct RowPainter<'p> {
    config: &'p PropertiesConfig,
    metrics: &'p PanelMetrics,
    input: &'p FrameInput,
    animator: HoverAnimator,
}

impl RowPainter<'_> {
    fn column(&self, depth: i32) -> i32 {
        self.metrics.x_baseline + depth.max(0) * self.config.indent_size
    }

    fn clock(&self) -> &FrameClock {
        &self.input.clock
    }

    /// Update the row's hover stamp and draw its highlight.
    #[allow(clippy::too_many_arguments)]
    fn paint_highlight<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        y_next: i32,
        label: &mut Label<'_>,
        last_hovered: &mut Option<Duration>,
        color: ColorCategory,
    ) -> RowHover {
        let hover = RowHover::detect(&self.input.pointer, x, self.metrics.x_max, y, y_next);
        if let Some(stamp) = hover.stamp(self.clock()) {
            *last_hovered = Some(stamp);
        }

        let font_size = self.config.font_size;
        let name_width = label.width_or_measure(|name| surface.measure_text_width(name, font_size));
        let pad = self.config.row_padding;
        let rest_edge = x + name_width + pad.right;
        let hover_edge = self.metrics.x_max + pad.right;
        let right = self.animator.highlight_edge(
            self.clock().now,
            *last_hovered,
            hover.direct,
            hover_edge,
            rest_edge,
        );

        let left = x - pad.left;
        let top = y.saturating_sub(pad.top);
        let bottom = y_next.saturating_add(pad.bottom);
        surface.draw_rect(left, top, right - left, bottom.saturating_sub(top), color);
        hover
    }
}
