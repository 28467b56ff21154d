#![forbid(unsafe_code)]

//! Grouping pass: bracket connectors between headers and their closers.
//!
//! Reads the bottom edges recorded by the content pass and rebuilds nesting
//! with a stack. A connector is drawn when its collection is popped: a
//! vertical run down the collection's indent column, then a horizontal run
//! to the right edge. Collections still open at the end are closed at the
//! panel's bottom edge.

use smallvec::SmallVec;

use propview_render::Surface;

use super::config::{ConnectorAnchor, PropertiesConfig};
use super::diagnostics::Diagnostic;
use super::entry::{CollectionKind, HeaderEntry, PropertyEntry};
use super::layout::PanelMetrics;
use super::store::PropertyStore;

/// Collections deeper than this spill the stack to the heap.
const INLINE_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy)]
struct OpenCollection {
    kind: CollectionKind,
    /// Bottom edge of the header row.
    header_bottom: i32,
}

/// Draw header rules and connectors for the entries the content pass walked.
///
/// Problems are appended to `diagnostics`; the affected connector is skipped
/// and the pass carries on.
pub fn run_grouping_pass<S: Surface + ?Sized>(
    store: &PropertyStore<'_>,
    line_heights: &[i32],
    surface: &mut S,
    config: &PropertiesConfig,
    metrics: &PanelMetrics,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut stack: SmallVec<[OpenCollection; INLINE_DEPTH]> = SmallVec::new();
    let mut previous = metrics.start_y;

    for (index, (entry, &bottom)) in store.iter().zip(line_heights).enumerate() {
        let y = previous;
        previous = bottom;
        // Zero height: hidden inside a collapsed collection.
        if bottom == y {
            continue;
        }

        let column = column_of(metrics, config, stack.len());
        match entry {
            PropertyEntry::Header(header) => {
                let x = column + config.indent_size;
                draw_header_rules(surface, config, metrics, header, x, y, bottom);
                if !header.is_collapsed() {
                    stack.push(OpenCollection {
                        kind: header.kind(),
                        header_bottom: bottom,
                    });
                }
            }
            PropertyEntry::Closer => match stack.pop() {
                Some(open) => {
                    let end = match config.connector_anchor {
                        ConnectorAnchor::RowTop => y,
                        ConnectorAnchor::RowMiddle => y + config.row_height() / 2,
                    };
                    draw_connector(surface, config, metrics, open, column, end, index, diagnostics);
                }
                None => diagnostics.push(Diagnostic::StackUnderflow { index }),
            },
            PropertyEntry::Value(_) => {}
        }
    }

    let past_end = line_heights.len();
    while let Some(open) = stack.pop() {
        // Started below the panel; nothing of it is on screen.
        if connector_top(config, open) >= metrics.bottom {
            continue;
        }
        let column = column_of(metrics, config, stack.len() + 1);
        draw_connector(
            surface,
            config,
            metrics,
            open,
            column,
            metrics.bottom,
            past_end,
            diagnostics,
        );
    }
}

/// Indent column of the innermost of `open` collections.
fn column_of(metrics: &PanelMetrics, config: &PropertiesConfig, open: usize) -> i32 {
    let depth = i32::try_from(open).unwrap_or(i32::MAX);
    metrics.x_baseline + (depth - 1) * config.indent_size
}

fn connector_top(config: &PropertiesConfig, open: OpenCollection) -> i32 {
    open.header_bottom.saturating_sub(config.half_font_to_line())
}

/// Rule from the end of a header's name to the right edge. A collapsed
/// header also gets a lower rule that closes its bracket.
fn draw_header_rules<S: Surface + ?Sized>(
    surface: &mut S,
    config: &PropertiesConfig,
    metrics: &PanelMetrics,
    header: &HeaderEntry<'_>,
    x: i32,
    y: i32,
    bottom: i32,
) {
    let name_width = header
        .label()
        .cached_width()
        .unwrap_or_else(|| surface.measure_text_width(header.name(), config.font_size));
    let start = x + name_width + config.row_padding.left;
    let end = metrics.x_max;
    if end < start {
        return;
    }
    let color = header.kind().color();
    let upper = y + config.font_size / 2;
    surface.draw_line(start, upper, end, upper, color);
    if header.is_collapsed() {
        let lower = bottom.saturating_sub(config.line_height - config.font_size);
        surface.draw_line(start, lower, end, lower, color);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_connector<S: Surface + ?Sized>(
    surface: &mut S,
    config: &PropertiesConfig,
    metrics: &PanelMetrics,
    open: OpenCollection,
    column: i32,
    end: i32,
    index: usize,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let start = connector_top(config, open);
    if start > end {
        diagnostics.push(Diagnostic::InvertedGeometry { index, start, end });
        return;
    }
    let color = open.kind.color();
    if start < end {
        surface.draw_line(column, start, column, end, color);
    }
    if column < metrics.x_max {
        surface.draw_line(column, end, metrics.x_max, end, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::layout::run_content_pass;
    use propview_core::event::{FrameClock, FrameInput, PointerState};
    use propview_core::geometry::Bounds;
    use propview_render::{ColorCategory, DisplayList};
    use std::time::Duration;

    struct Frame {
        surface: DisplayList,
        diagnostics: Vec<Diagnostic>,
    }

    fn render(store: &mut PropertyStore<'_>, config: &PropertiesConfig, height: i32) -> Frame {
        let metrics = PanelMetrics::new(Bounds::new(0, 0, 400, height), config, 0);
        let input = FrameInput::new(
            PointerState::at(-50, -50),
            FrameClock::new(Duration::ZERO, Duration::ZERO),
        );
        let mut content = DisplayList::new();
        let mut scratch = String::new();
        let mut heights = Vec::new();
        run_content_pass(
            store,
            &mut content,
            config,
            &metrics,
            &input,
            &mut scratch,
            &mut heights,
        );

        let mut surface = DisplayList::new();
        let mut diagnostics = Vec::new();
        run_grouping_pass(store, &heights, &mut surface, config, &metrics, &mut diagnostics);
        Frame {
            surface,
            diagnostics,
        }
    }

    fn object_a() -> PropertyStore<'static> {
        let mut store = PropertyStore::new();
        store.add_object_header("A").unwrap();
        store.add_int("x", 5).unwrap();
        store.add_closer().unwrap();
        store
    }

    #[test]
    fn bracket_for_open_collection() {
        let mut store = object_a();
        let frame = render(&mut store, &PropertiesConfig::default(), 300);
        let lines: Vec<_> = frame.surface.lines().collect();
        assert!(frame.diagnostics.is_empty());
        // Header rule: past "A" (8px) plus padding, at half the font height.
        assert_eq!(lines[0], ((16, 9), (395, 9), ColorCategory::Object));
        // Connector from header bottom - 5 down to the closer's top, then right.
        assert_eq!(lines[1], ((5, 16), (5, 37), ColorCategory::Object));
        assert_eq!(lines[2], ((5, 37), (395, 37), ColorCategory::Object));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn row_middle_anchor() {
        let mut store = object_a();
        let config = PropertiesConfig::default().with_connector_anchor(ConnectorAnchor::RowMiddle);
        let frame = render(&mut store, &config, 300);
        let lines: Vec<_> = frame.surface.lines().collect();
        assert_eq!(lines[1], ((5, 16), (5, 45), ColorCategory::Object));
    }

    #[test]
    fn collapsed_collection_closes_with_lower_rule() {
        let mut store = object_a();
        store.set_collapsed(0, true).unwrap();
        let frame = render(&mut store, &PropertiesConfig::default(), 300);
        let lines: Vec<_> = frame.surface.lines().collect();
        assert!(frame.diagnostics.is_empty());
        assert_eq!(
            lines,
            vec![
                ((16, 9), (395, 9), ColorCategory::Object),
                ((16, 13), (395, 13), ColorCategory::Object),
            ]
        );
    }

    #[test]
    fn closer_without_header_underflows() {
        let mut store = PropertyStore::new();
        store.add_closer().unwrap();
        let frame = render(&mut store, &PropertiesConfig::default(), 300);
        assert_eq!(frame.diagnostics, vec![Diagnostic::StackUnderflow { index: 0 }]);
        assert_eq!(frame.surface.lines().count(), 0);
    }

    #[test]
    fn unterminated_collection_closes_at_bottom() {
        let mut store = PropertyStore::new();
        store.add_map_header("m").unwrap();
        store.add_int("x", 1).unwrap();
        let frame = render(&mut store, &PropertiesConfig::default(), 300);
        let lines: Vec<_> = frame.surface.lines().collect();
        assert!(frame.diagnostics.is_empty());
        assert_eq!(lines[1], ((5, 16), (5, 300), ColorCategory::Map));
        assert_eq!(lines[2], ((5, 300), (395, 300), ColorCategory::Map));
    }

    #[test]
    fn nested_columns() {
        let mut store = PropertyStore::new();
        store.add_object_header("o").unwrap();
        store.add_array_header("a").unwrap();
        store.add_int("x", 1).unwrap();
        store.add_closer().unwrap();
        store.add_closer().unwrap();
        let frame = render(&mut store, &PropertiesConfig::default(), 300);
        let verticals: Vec<_> = frame
            .surface
            .lines()
            .filter(|((x1, _), (x2, _), _)| x1 == x2)
            .collect();
        // Inner array closes first, one indent to the right of the object.
        assert_eq!(verticals[0], ((13, 32), (13, 53), ColorCategory::Array));
        assert_eq!(verticals[1], ((5, 16), (5, 61), ColorCategory::Object));
    }

    #[test]
    fn inverted_connector_is_skipped() {
        let store = object_a();
        let config = PropertiesConfig::default();
        let metrics = PanelMetrics::new(Bounds::new(0, 0, 400, 300), &config, 0);
        // Heights that put the closer above its header.
        let heights = [60, 40, 50];
        let mut surface = DisplayList::new();
        let mut diagnostics = Vec::new();
        run_grouping_pass(&store, &heights, &mut surface, &config, &metrics, &mut diagnostics);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::InvertedGeometry {
                index: 2,
                start: 55,
                end: 40
            }]
        );
    }
}
