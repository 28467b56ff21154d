#![forbid(unsafe_code)]

//! propview public facade crate.
//!
//! Re-exports the types a host needs to populate and draw a property panel,
//! plus a prelude.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use propview_core::event::{FrameClock, FrameInput, PointerFlags, PointerState};
pub use propview_core::geometry::{Bounds, Sides};

// --- Render re-exports -----------------------------------------------------

pub use propview_render::{
    ColorCategory, DisplayList, DrawCommand, MonospaceMetrics, PackedRgba, Surface,
};

// --- Style re-exports ------------------------------------------------------

pub use propview_style::Palette;

// --- Widget re-exports -----------------------------------------------------

pub use propview_widgets::{
    Balance, CollectionKind, ConnectorAnchor, Diagnostic, FormatError, FormatSpec,
    PropertiesConfig, PropertiesPanel, PropertiesState, PropertyEntry, PropertyError,
    PropertyStore, RenderReport, Severity, ValueKind, ValueResolver,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for propview hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A store mutation was rejected.
    Property(PropertyError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Property(err) => Some(err),
        }
    }
}

impl From<PropertyError> for Error {
    fn from(err: PropertyError) -> Self {
        Self::Property(err)
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Self::Property(PropertyError::InvalidFormat(err))
    }
}

/// Standard result type for propview APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Bounds, CollectionKind, DisplayList, Error, FrameClock, FrameInput, PointerState,
        PropertiesConfig, PropertiesPanel, PropertiesState, PropertyStore, Result, Surface,
        ValueKind,
    };

    pub use crate::{core, render, style, widgets};
}

pub use propview_core as core;
pub use propview_render as render;
pub use propview_style as style;
pub use propview_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::error::Error as _;

    fn populate(store: &mut PropertyStore<'_>) -> Result<()> {
        store.add_object_header("root")?;
        store.add_int("n", 1)?;
        store.add_closer()?;
        Ok(())
    }

    #[test]
    fn question_mark_converts_store_errors() {
        let mut store = PropertyStore::with_capacity(2);
        let err = populate(&mut store).unwrap_err();
        assert_eq!(
            err,
            Error::Property(crate::PropertyError::CapacityExceeded { capacity: 2 })
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn prelude_renders() {
        let panel = PropertiesPanel::new();
        let mut state = panel.state();
        populate(state.store_mut()).unwrap();
        let mut surface = DisplayList::new();
        let report = panel.render(
            Bounds::new(0, 0, 200, 100),
            &FrameInput::default(),
            &mut surface,
            &mut state,
        );
        assert_eq!(report.visible_count, 3);
    }
}
