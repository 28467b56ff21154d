#![forbid(unsafe_code)]

//! The property store.
//!
//! An append-only sequence of [`PropertyEntry`] values, cleared wholesale
//! between subjects. The host rebuilds it whenever the inspected thing
//! changes; the panel only mutates collapse and hover state in place.
//!
//! # Ownership
//!
//! Names and literals are `Cow<'a, str>`: borrowed text costs nothing, owned
//! text is freed when its entry is dropped by [`PropertyStore::clear`] or
//! replaced by [`PropertyStore::set_literal`]. Linked values hold shared
//! references to `Cell`s, so `'a` also bounds how long the targets must live.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;

use super::config::PropertiesConfig;
use super::entry::{
    CollectionKind, HeaderEntry, Label, LinkTarget, Linked, PropertyEntry, ValueEntry, ValueKind,
    ValueSource,
};
use super::error::PropertyError;
use super::format::FormatSpec;

/// Result of scanning header/closer nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    /// Headers minus closers over the whole store.
    pub surplus: i32,
    /// First closer that drove the running depth below zero.
    pub first_underflow: Option<usize>,
}

impl Balance {
    /// Every header has a matching closer, in order.
    pub const fn is_balanced(&self) -> bool {
        self.surplus == 0 && self.first_underflow.is_none()
    }
}

/// Ordered, bounded list of property entries.
#[derive(Debug, Clone)]
pub struct PropertyStore<'a> {
    entries: Vec<PropertyEntry<'a>>,
    capacity: usize,
    default_collapsed: bool,
}

impl Default for PropertyStore<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PropertyStore<'a> {
    /// Create an empty store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(PropertiesConfig::DEFAULT_CAPACITY)
    }

    /// Create an empty store that accepts at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            default_collapsed: false,
        }
    }

    /// Create an empty store sized and defaulted from `config`.
    pub fn from_config(config: &PropertiesConfig) -> Self {
        Self::with_capacity(config.capacity).with_default_collapsed(config.default_collapsed)
    }

    /// Start headers added without an explicit state collapsed.
    #[must_use]
    pub fn with_default_collapsed(mut self, collapsed: bool) -> Self {
        self.default_collapsed = collapsed;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&PropertyEntry<'a>> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[PropertyEntry<'a>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyEntry<'a>> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [PropertyEntry<'a>] {
        &mut self.entries
    }

    /// Drop every entry, freeing owned text. Safe to call when empty.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // ------------------------------------------------------------------
    // Appending
    // ------------------------------------------------------------------

    /// Append `entry`, returning its index.
    pub fn push(&mut self, entry: PropertyEntry<'a>) -> Result<usize, PropertyError> {
        if self.is_full() {
            propview_core::error!(
                capacity = self.capacity,
                name = entry.name().unwrap_or("<closer>"),
                "property store is full, entry rejected"
            );
            return Err(PropertyError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.entries.push(entry);
        Ok(self.entries.len() - 1)
    }

    /// Append a value row.
    pub fn add_value(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        kind: ValueKind,
        source: ValueSource<'a>,
    ) -> Result<usize, PropertyError> {
        self.push(PropertyEntry::Value(ValueEntry {
            label: Label::new(name),
            kind,
            source,
            last_hovered: None,
        }))
    }

    fn add_literal(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        kind: ValueKind,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<usize, PropertyError> {
        self.add_value(name, kind, ValueSource::Literal(text.into()))
    }

    pub fn add_bool(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        value: bool,
    ) -> Result<usize, PropertyError> {
        let text = if value { "true" } else { "false" };
        self.add_literal(name, ValueKind::Bool, text)
    }

    pub fn add_byte(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        value: u8,
    ) -> Result<usize, PropertyError> {
        self.add_literal(name, ValueKind::Byte, value.to_string())
    }

    pub fn add_int(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        value: i64,
    ) -> Result<usize, PropertyError> {
        self.add_literal(name, ValueKind::Int, value.to_string())
    }

    pub fn add_float(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        value: f64,
    ) -> Result<usize, PropertyError> {
        self.add_literal(name, ValueKind::Float, value.to_string())
    }

    /// Append an owned string value.
    pub fn add_string(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        value: impl Into<String>,
    ) -> Result<usize, PropertyError> {
        self.add_literal(name, ValueKind::String, value.into())
    }

    /// Append a borrowed string value without copying it.
    pub fn add_str(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        value: &'a str,
    ) -> Result<usize, PropertyError> {
        self.add_literal(name, ValueKind::String, value)
    }

    /// Append a string value spanning several lines.
    ///
    /// Each `\n`-separated line gets its own row height.
    pub fn add_multiline(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<usize, PropertyError> {
        self.add_literal(name, ValueKind::String, text)
    }

    /// Append a value formatted now, e.g. `store.add_fmt("pos", ValueKind::Any, format_args!("{x}, {y}"))`.
    ///
    /// Arguments without placeholders are stored borrowed.
    pub fn add_fmt(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        kind: ValueKind,
        args: fmt::Arguments<'_>,
    ) -> Result<usize, PropertyError> {
        let text: Cow<'a, str> = match args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(fmt::format(args)),
        };
        self.add_literal(name, kind, text)
    }

    /// Append the `Debug` rendering of `value` as an `Any` value.
    pub fn add_debug(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        value: &impl fmt::Debug,
    ) -> Result<usize, PropertyError> {
        self.add_literal(name, ValueKind::Any, format!("{value:?}"))
    }

    fn add_linked(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        format: &str,
        target: LinkTarget<'a>,
    ) -> Result<usize, PropertyError> {
        let kind = target.kind();
        let format = FormatSpec::parse(format)?;
        format.validate_for(kind)?;
        self.add_value(name, kind, ValueSource::Linked(Linked { target, format }))
    }

    /// Append a value that re-reads `target` every frame.
    pub fn add_linked_bool(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        format: &str,
        target: &'a Cell<bool>,
    ) -> Result<usize, PropertyError> {
        self.add_linked(name, format, LinkTarget::Bool(target))
    }

    pub fn add_linked_byte(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        format: &str,
        target: &'a Cell<u8>,
    ) -> Result<usize, PropertyError> {
        self.add_linked(name, format, LinkTarget::Byte(target))
    }

    pub fn add_linked_int(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        format: &str,
        target: &'a Cell<i32>,
    ) -> Result<usize, PropertyError> {
        self.add_linked(name, format, LinkTarget::Int(target))
    }

    pub fn add_linked_float(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        format: &str,
        target: &'a Cell<f32>,
    ) -> Result<usize, PropertyError> {
        self.add_linked(name, format, LinkTarget::Float(target))
    }

    pub fn add_linked_string(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        format: &str,
        target: &'a RefCell<String>,
    ) -> Result<usize, PropertyError> {
        self.add_linked(name, format, LinkTarget::String(target))
    }

    /// Append a header using the store's default collapse state.
    pub fn add_header(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        kind: CollectionKind,
    ) -> Result<usize, PropertyError> {
        let collapsed = self.default_collapsed;
        self.push_header(name, kind, collapsed)
    }

    /// Append a header that starts collapsed.
    pub fn add_collapsed_header(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        kind: CollectionKind,
    ) -> Result<usize, PropertyError> {
        self.push_header(name, kind, true)
    }

    fn push_header(
        &mut self,
        name: impl Into<Cow<'a, str>>,
        kind: CollectionKind,
        collapsed: bool,
    ) -> Result<usize, PropertyError> {
        self.push(PropertyEntry::Header(HeaderEntry {
            label: Label::new(name),
            kind,
            collapsed,
            last_hovered: None,
        }))
    }

    pub fn add_object_header(
        &mut self,
        name: impl Into<Cow<'a, str>>,
    ) -> Result<usize, PropertyError> {
        self.add_header(name, CollectionKind::Object)
    }

    pub fn add_array_header(
        &mut self,
        name: impl Into<Cow<'a, str>>,
    ) -> Result<usize, PropertyError> {
        self.add_header(name, CollectionKind::Array)
    }

    pub fn add_map_header(
        &mut self,
        name: impl Into<Cow<'a, str>>,
    ) -> Result<usize, PropertyError> {
        self.add_header(name, CollectionKind::Map)
    }

    /// Close the most recently opened collection.
    pub fn add_closer(&mut self) -> Result<usize, PropertyError> {
        self.push(PropertyEntry::Closer)
    }

    // ------------------------------------------------------------------
    // In-place edits
    // ------------------------------------------------------------------

    fn entry_mut(&mut self, index: usize) -> Result<&mut PropertyEntry<'a>, PropertyError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(PropertyError::IndexOutOfRange { index, len })
    }

    fn header_mut(&mut self, index: usize) -> Result<&mut HeaderEntry<'a>, PropertyError> {
        match self.entry_mut(index)? {
            PropertyEntry::Header(header) => Ok(header),
            _ => Err(PropertyError::NotAHeader { index }),
        }
    }

    /// Replace a value's text with a literal. The previous text, if owned, is freed.
    pub fn set_literal(
        &mut self,
        index: usize,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<(), PropertyError> {
        match self.entry_mut(index)? {
            PropertyEntry::Value(value) => {
                value.source = ValueSource::Literal(text.into());
                Ok(())
            }
            _ => Err(PropertyError::NotAValue { index }),
        }
    }

    /// Replace an entry's name. Its measured width is recomputed on the next frame.
    pub fn rename(
        &mut self,
        index: usize,
        name: impl Into<Cow<'a, str>>,
    ) -> Result<(), PropertyError> {
        let label = self
            .entry_mut(index)?
            .label_mut()
            .ok_or(PropertyError::Unnamed { index })?;
        label.set(name);
        Ok(())
    }

    pub fn set_collapsed(&mut self, index: usize, collapsed: bool) -> Result<(), PropertyError> {
        self.header_mut(index)?.collapsed = collapsed;
        Ok(())
    }

    /// Flip a header's collapse state, returning the new state.
    pub fn toggle_collapsed(&mut self, index: usize) -> Result<bool, PropertyError> {
        let header = self.header_mut(index)?;
        header.collapsed = !header.collapsed;
        Ok(header.collapsed)
    }

    pub fn is_collapsed(&self, index: usize) -> Result<bool, PropertyError> {
        match self.entries.get(index) {
            Some(PropertyEntry::Header(header)) => Ok(header.collapsed),
            Some(_) => Err(PropertyError::NotAHeader { index }),
            None => Err(PropertyError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Scan header/closer nesting across the whole store.
    pub fn balance(&self) -> Balance {
        let mut balance = Balance::default();
        for (index, entry) in self.entries.iter().enumerate() {
            balance.surplus += entry.depth_delta();
            if balance.surplus < 0 && balance.first_underflow.is_none() {
                balance.first_underflow = Some(index);
            }
        }
        balance
    }
}

impl<'s, 'a> IntoIterator for &'s PropertyStore<'a> {
    type Item = &'s PropertyEntry<'a>;
    type IntoIter = std::slice::Iter<'s, PropertyEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
