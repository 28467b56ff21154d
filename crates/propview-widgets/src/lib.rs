#![forbid(unsafe_code)]

//! Widgets for propview.
//!
//! Currently a single widget: the [`properties`] panel, a scrollable,
//! collapsible tree of named values rendered immediately every frame.

pub mod properties;

pub use properties::{
    Balance, CollectionKind, ConnectorAnchor, Diagnostic, FormatError, FormatSpec,
    PropertiesConfig, PropertiesPanel, PropertiesState, PropertyEntry, PropertyError,
    PropertyStore, RenderReport, Severity, ValueKind, ValueResolver,
};
