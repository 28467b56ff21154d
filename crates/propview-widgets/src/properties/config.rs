#![forbid(unsafe_code)]

//! Panel configuration.

use propview_core::geometry::Sides;

/// Where a closed collection's connector ends vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorAnchor {
    /// Top of the closer row.
    #[default]
    RowTop,
    /// Vertical middle of the closer row.
    RowMiddle,
}

/// Layout constants for a [`PropertiesPanel`](super::PropertiesPanel).
///
/// All lengths are pixels. Defaults reproduce the classic inspector look.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertiesConfig {
    /// Maximum number of entries a store accepts.
    pub capacity: usize,
    /// Height of a header or value row.
    pub line_height: i32,
    /// Text size passed to the surface.
    pub font_size: i32,
    /// Horizontal indent per nesting level.
    pub indent_size: i32,
    /// Height of a visible closer row.
    pub closer_height: i32,
    /// Inset of the content from the panel's left/right edges.
    pub padding_x: i32,
    /// Inset of the content from the panel's top edge.
    pub padding_y: i32,
    /// Padding around a row's name when drawing its highlight.
    pub row_padding: Sides,
    /// Distance of the name/value divider from the panel's left edge.
    pub divider_x: i32,
    /// Width of the divider bar.
    pub divider_width: i32,
    /// Base highlight fade speed in pixels per second.
    pub hover_speed: f64,
    /// Panel width that doubles the fade speed.
    pub hover_bracket_width: i32,
    /// Pixels scrolled per wheel notch.
    pub scroll_step: i32,
    /// Whether new headers start collapsed.
    pub default_collapsed: bool,
    /// Vertical end of closed connectors.
    pub connector_anchor: ConnectorAnchor,
    /// Check header/closer balance before every frame.
    pub check_balance: bool,
}

impl PropertiesConfig {
    /// Default capacity of a property store.
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Gap between the text's vertical center and the row's top edge.
    pub const fn half_font_to_line(&self) -> i32 {
        (self.line_height - self.font_size) / 2 + 1
    }

    /// Row height, never below one pixel.
    pub fn row_height(&self) -> i32 {
        self.line_height.max(1)
    }

    /// Closer height, never below one pixel.
    pub fn closer_row_height(&self) -> i32 {
        self.closer_height.max(1)
    }

    /// Set the store capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Start new headers collapsed.
    #[must_use]
    pub fn with_default_collapsed(mut self, collapsed: bool) -> Self {
        self.default_collapsed = collapsed;
        self
    }

    /// Choose where closed connectors end.
    #[must_use]
    pub fn with_connector_anchor(mut self, anchor: ConnectorAnchor) -> Self {
        self.connector_anchor = anchor;
        self
    }

    /// Enable or disable the per-frame balance check.
    #[must_use]
    pub fn with_balance_check(mut self, check: bool) -> Self {
        self.check_balance = check;
        self
    }

    /// Set the divider position.
    #[must_use]
    pub fn with_divider_x(mut self, divider_x: i32) -> Self {
        self.divider_x = divider_x;
        self
    }
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        let line_height = 16;
        let font_size = 8;
        let half_font_to_line = (line_height - font_size) / 2 + 1;
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            line_height,
            font_size,
            indent_size: 8,
            closer_height: 8,
            padding_x: 5,
            padding_y: 5,
            row_padding: Sides::new(2, 3, -half_font_to_line, 3),
            divider_x: 150,
            divider_width: 3,
            hover_speed: 400.0,
            hover_bracket_width: 600,
            scroll_step: 16,
            default_collapsed: false,
            connector_anchor: ConnectorAnchor::RowTop,
            check_balance: cfg!(debug_assertions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PropertiesConfig::default();
        assert_eq!(config.line_height, 16);
        assert_eq!(config.closer_height, 8);
        assert_eq!(config.half_font_to_line(), 5);
        assert_eq!(config.row_padding.bottom, -5);
        assert_eq!(config.capacity, 1024);
    }

    #[test]
    fn heights_are_clamped() {
        let config = PropertiesConfig {
            line_height: 0,
            closer_height: -4,
            ..PropertiesConfig::default()
        };
        assert_eq!(config.row_height(), 1);
        assert_eq!(config.closer_row_height(), 1);
    }

    #[test]
    fn builders() {
        let config = PropertiesConfig::default()
            .with_capacity(3)
            .with_default_collapsed(true)
            .with_connector_anchor(ConnectorAnchor::RowMiddle);
        assert_eq!(config.capacity, 3);
        assert!(config.default_collapsed);
        assert_eq!(config.connector_anchor, ConnectorAnchor::RowMiddle);
    }
}
