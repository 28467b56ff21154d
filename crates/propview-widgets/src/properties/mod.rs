#![forbid(unsafe_code)]

//! Property inspector panel.
//!
//! A flat list of headers, values and closers rendered as a collapsible
//! tree every frame. The host owns a [`PropertiesState`], fills its store
//! whenever the inspected subject changes, and calls
//! [`PropertiesPanel::render`] once per frame with the panel's client
//! rectangle, the pointer and the clock.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use propview_core::event::FrameInput;
//! use propview_core::geometry::Bounds;
//! use propview_render::DisplayList;
//! use propview_widgets::properties::PropertiesPanel;
//!
//! let hits = Cell::new(3);
//! let panel = PropertiesPanel::new();
//! let mut state = panel.state();
//! if state.show_for(7) {
//!     let store = state.store_mut();
//!     store.add_object_header("target").unwrap();
//!     store.add_linked_int("hits", "{}", &hits).unwrap();
//!     store.add_closer().unwrap();
//! }
//!
//! let mut surface = DisplayList::new();
//! let report = panel.render(
//!     Bounds::new(0, 0, 320, 200),
//!     &FrameInput::default(),
//!     &mut surface,
//!     &mut state,
//! );
//! assert_eq!(report.visible_count, 3);
//! assert!(surface.texts().any(|t| t == "3"));
//! ```
//!
//! # Frame order
//!
//! 1. Optional balance check over the whole store.
//! 2. Wheel scrolling.
//! 3. [`layout::run_content_pass`]: rows, highlights, collapse clicks.
//! 4. [`grouping::run_grouping_pass`]: header rules and connectors.
//! 5. The divider bar.

mod config;
mod diagnostics;
mod entry;
mod error;
pub mod format;
pub mod grouping;
pub mod hover;
pub mod layout;
mod store;
pub mod value;

pub use config::{ConnectorAnchor, PropertiesConfig};
pub use diagnostics::{Diagnostic, RenderReport, Severity};
pub use entry::{
    CollectionKind, HeaderEntry, Label, LinkTarget, Linked, PropertyEntry, ValueEntry, ValueKind,
    ValueSource,
};
pub use error::PropertyError;
pub use format::{Conversion, FormatError, FormatSpec};
pub use hover::HoverAnimator;
pub use store::{Balance, PropertyStore};
pub use value::ValueResolver;

use propview_core::event::FrameInput;
use propview_core::geometry::Bounds;
use propview_render::{ColorCategory, Surface};

use grouping::run_grouping_pass;
use layout::{PanelMetrics, run_content_pass};

/// Per-panel state that persists across frames.
#[derive(Debug)]
pub struct PropertiesState<'a> {
    store: PropertyStore<'a>,
    showing_for: Option<u64>,
    scroll_y: i32,
    /// Largest useful scroll offset, known once a frame walked every entry.
    max_scroll: Option<i32>,
    resolver: ValueResolver,
    line_heights: Vec<i32>,
    report: RenderReport,
}

impl<'a> PropertiesState<'a> {
    pub fn new(store: PropertyStore<'a>) -> Self {
        Self {
            store,
            showing_for: None,
            scroll_y: 0,
            max_scroll: None,
            resolver: ValueResolver::new(),
            line_heights: Vec::new(),
            report: RenderReport::default(),
        }
    }

    pub fn store(&self) -> &PropertyStore<'a> {
        &self.store
    }

    /// Mutable access to the store. The scroll range is measured again on
    /// the next complete frame.
    pub fn store_mut(&mut self) -> &mut PropertyStore<'a> {
        self.max_scroll = None;
        &mut self.store
    }

    /// Switch the panel to the subject `id`.
    ///
    /// Returns `true` when the subject changed; the store has then been
    /// cleared, scrolled to the top, and must be repopulated.
    pub fn show_for(&mut self, id: u64) -> bool {
        if self.showing_for == Some(id) {
            return false;
        }
        self.showing_for = Some(id);
        self.store.clear();
        self.scroll_y = 0;
        self.max_scroll = None;
        true
    }

    /// Forget the current subject, clear the store and scroll to the top.
    pub fn clear(&mut self) {
        self.showing_for = None;
        self.store.clear();
        self.scroll_y = 0;
        self.max_scroll = None;
    }

    pub fn showing_for(&self) -> Option<u64> {
        self.showing_for
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    /// Scroll so that content `offset` pixels down is at the top.
    pub fn set_scroll_y(&mut self, offset: i32) {
        self.scroll_y = self.clamp_scroll(offset);
    }

    fn clamp_scroll(&self, offset: i32) -> i32 {
        match self.max_scroll {
            Some(max) => offset.clamp(0, max),
            None => offset.max(0),
        }
    }

    /// Bottom edge of each entry walked in the last frame.
    pub fn line_heights(&self) -> &[i32] {
        &self.line_heights
    }

    /// Result of the last frame.
    pub fn report(&self) -> &RenderReport {
        &self.report
    }
}

/// Renders a [`PropertiesState`] onto a [`Surface`].
#[derive(Debug, Clone, Default)]
pub struct PropertiesPanel {
    config: PropertiesConfig,
}

impl PropertiesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PropertiesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PropertiesConfig {
        &self.config
    }

    /// Fresh state whose store follows this panel's capacity and defaults.
    pub fn state<'a>(&self) -> PropertiesState<'a> {
        PropertiesState::new(PropertyStore::from_config(&self.config))
    }

    /// Draw one frame inside `bounds`.
    ///
    /// Never fails: problems are logged and listed in the returned report.
    pub fn render<'s, S: Surface + ?Sized>(
        &self,
        bounds: Bounds,
        input: &FrameInput,
        surface: &mut S,
        state: &'s mut PropertiesState<'_>,
    ) -> &'s RenderReport {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "properties_render",
            entries = state.store.len(),
            x = bounds.xmin,
            y = bounds.ymin,
            w = bounds.width(),
            h = bounds.height(),
            scroll_y = state.scroll_y
        )
        .entered();

        let config = &self.config;
        state.report.reset();

        if config.check_balance {
            let balance = state.store.balance();
            if !balance.is_balanced() {
                state.report.diagnostics.push(Diagnostic::Imbalanced {
                    surplus: balance.surplus,
                    first_underflow: balance.first_underflow,
                });
            }
        }

        if input.pointer.wheel != 0 {
            let delta = input.pointer.wheel.saturating_mul(config.scroll_step);
            state.scroll_y = state.clamp_scroll(state.scroll_y.saturating_add(delta));
        }

        let metrics = PanelMetrics::new(bounds, config, state.scroll_y);
        let pass = run_content_pass(
            &mut state.store,
            surface,
            config,
            &metrics,
            input,
            state.resolver.scratch_mut(),
            &mut state.line_heights,
        );
        state.report.visible_count = pass.visible_count;
        state.report.toggled = pass.toggled;

        if pass.is_complete(state.store.len()) {
            let content_height = pass.end_y.saturating_sub(metrics.start_y);
            let viewport = bounds.height().saturating_sub(config.padding_y);
            let max = content_height.saturating_sub(viewport).max(0);
            state.max_scroll = Some(max);
            state.scroll_y = state.scroll_y.min(max);
        } else {
            state.max_scroll = None;
        }

        run_grouping_pass(
            &state.store,
            &state.line_heights,
            surface,
            config,
            &metrics,
            &mut state.report.diagnostics,
        );

        surface.draw_rect(
            metrics.divider_x,
            bounds.ymin,
            config.divider_width,
            bounds.height(),
            ColorCategory::Accent,
        );

        for diagnostic in &state.report.diagnostics {
            diagnostic.emit();
        }
        &state.report
    }
}
