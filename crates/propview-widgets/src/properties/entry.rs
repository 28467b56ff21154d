#![forbid(unsafe_code)]

//! Property entries.
//!
//! The tree is stored flat. A [`PropertyEntry::Header`] opens a collection,
//! a [`PropertyEntry::Closer`] ends the most recently opened one, and
//! [`PropertyEntry::Value`]s sit in between. Nesting is implied by order.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::time::Duration;

use propview_render::ColorCategory;

use super::format::FormatSpec;

/// Kind of collection a header opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Object,
    Array,
    Map,
}

impl CollectionKind {
    /// Color category for the header row and its connector.
    pub const fn color(self) -> ColorCategory {
        match self {
            Self::Object => ColorCategory::Object,
            Self::Array => ColorCategory::Array,
            Self::Map => ColorCategory::Map,
        }
    }
}

/// Data type of a value row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Byte,
    Int,
    Float,
    String,
    Any,
}

impl ValueKind {
    /// Color category for the value row.
    pub const fn color(self) -> ColorCategory {
        match self {
            Self::Bool => ColorCategory::Bool,
            Self::Byte => ColorCategory::Byte,
            Self::Int => ColorCategory::Int,
            Self::Float => ColorCategory::Float,
            Self::String => ColorCategory::String,
            Self::Any => ColorCategory::Any,
        }
    }

    /// Lowercase name for messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Any => "any",
        }
    }
}

/// A row name plus its lazily measured pixel width.
///
/// The width is only valid for the current text; [`Label::set`] drops it.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    text: Cow<'a, str>,
    width: Option<i32>,
}

impl<'a> Label<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            width: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the text, invalidating the cached width.
    pub fn set(&mut self, text: impl Into<Cow<'a, str>>) {
        self.text = text.into();
        self.width = None;
    }

    /// Width from the last measurement, if still valid.
    pub fn cached_width(&self) -> Option<i32> {
        self.width
    }

    /// Cached width, measuring with `measure` on a miss.
    pub fn width_or_measure(&mut self, measure: impl FnOnce(&str) -> i32) -> i32 {
        match self.width {
            Some(width) => width,
            None => {
                let width = measure(&self.text);
                self.width = Some(width);
                width
            }
        }
    }
}

/// Live storage a linked value reads every frame.
///
/// Borrowed, never owned: the store's lifetime parameter guarantees the
/// target outlives every entry that points at it.
#[derive(Debug, Clone, Copy)]
pub enum LinkTarget<'a> {
    Bool(&'a Cell<bool>),
    Byte(&'a Cell<u8>),
    Int(&'a Cell<i32>),
    Float(&'a Cell<f32>),
    String(&'a RefCell<String>),
}

impl LinkTarget<'_> {
    /// Value kind implied by the target type.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Byte(_) => ValueKind::Byte,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
        }
    }
}

/// Linked value: a target plus the template used to display it.
#[derive(Debug, Clone)]
pub struct Linked<'a> {
    pub(crate) target: LinkTarget<'a>,
    pub(crate) format: FormatSpec,
}

impl<'a> Linked<'a> {
    pub fn target(&self) -> LinkTarget<'a> {
        self.target
    }

    pub fn format(&self) -> &FormatSpec {
        &self.format
    }
}

/// Where a value row's text comes from.
#[derive(Debug, Clone)]
pub enum ValueSource<'a> {
    /// Text fixed when the entry was added. Either borrowed from the host or
    /// owned by the entry; owned text is dropped with the entry.
    Literal(Cow<'a, str>),
    /// Re-read and formatted on every frame.
    Linked(Linked<'a>),
}

impl ValueSource<'_> {
    /// Whether the entry owns heap text.
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Literal(Cow::Owned(_)))
    }
}

/// A collection header.
#[derive(Debug, Clone)]
pub struct HeaderEntry<'a> {
    pub(crate) label: Label<'a>,
    pub(crate) kind: CollectionKind,
    pub(crate) collapsed: bool,
    pub(crate) last_hovered: Option<Duration>,
}

impl HeaderEntry<'_> {
    pub fn name(&self) -> &str {
        self.label.as_str()
    }

    pub fn label(&self) -> &Label<'_> {
        &self.label
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Frame time at which the pointer was last over this row.
    pub fn last_hovered(&self) -> Option<Duration> {
        self.last_hovered
    }
}

/// A named value.
#[derive(Debug, Clone)]
pub struct ValueEntry<'a> {
    pub(crate) label: Label<'a>,
    pub(crate) kind: ValueKind,
    pub(crate) source: ValueSource<'a>,
    pub(crate) last_hovered: Option<Duration>,
}

impl<'a> ValueEntry<'a> {
    pub fn name(&self) -> &str {
        self.label.as_str()
    }

    pub fn label(&self) -> &Label<'a> {
        &self.label
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn source(&self) -> &ValueSource<'a> {
        &self.source
    }

    /// Frame time at which the pointer was last over this row.
    pub fn last_hovered(&self) -> Option<Duration> {
        self.last_hovered
    }
}

/// One slot of the flat property sequence.
#[derive(Debug, Clone)]
pub enum PropertyEntry<'a> {
    /// Ends the most recently opened collection.
    Closer,
    /// Opens a collection.
    Header(HeaderEntry<'a>),
    /// A name/value row.
    Value(ValueEntry<'a>),
}

impl<'a> PropertyEntry<'a> {
    /// Row name; `None` for closers.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Closer => None,
            Self::Header(header) => Some(header.name()),
            Self::Value(value) => Some(value.name()),
        }
    }

    /// Change in nesting depth caused by this entry.
    pub const fn depth_delta(&self) -> i32 {
        match self {
            Self::Closer => -1,
            Self::Header(_) => 1,
            Self::Value(_) => 0,
        }
    }

    pub fn as_header(&self) -> Option<&HeaderEntry<'a>> {
        match self {
            Self::Header(header) => Some(header),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&ValueEntry<'a>> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_closer(&self) -> bool {
        matches!(self, Self::Closer)
    }

    /// Highlight color category.
    pub const fn color(&self) -> ColorCategory {
        match self {
            Self::Closer => ColorCategory::Accent,
            Self::Header(header) => header.kind.color(),
            Self::Value(value) => value.kind.color(),
        }
    }

    pub(crate) fn label_mut(&mut self) -> Option<&mut Label<'a>> {
        match self {
            Self::Closer => None,
            Self::Header(header) => Some(&mut header.label),
            Self::Value(value) => Some(&mut value.label),
        }
    }
}
