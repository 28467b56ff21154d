#![forbid(unsafe_code)]

//! Display text for value entries.

use super::entry::{LinkTarget, Linked, ValueEntry, ValueSource};
use super::format::FormatArg;

/// Shown in place of a linked string the host is mutably borrowing.
pub const BORROWED_PLACEHOLDER: &str = "<borrowed>";

/// Produce the display text for `source`.
///
/// Literals are returned as stored. Linked values are read now and formatted
/// into `scratch`, which is cleared first; nothing is allocated once
/// `scratch` has grown to fit the longest value.
pub fn resolve<'s>(source: &'s ValueSource<'_>, scratch: &'s mut String) -> &'s str {
    match source {
        ValueSource::Literal(text) => text.as_ref(),
        ValueSource::Linked(linked) => {
            scratch.clear();
            write_linked(linked, scratch);
            scratch.as_str()
        }
    }
}

fn write_linked(linked: &Linked<'_>, out: &mut String) {
    let format = linked.format();
    match linked.target() {
        LinkTarget::Bool(cell) => format.write_value(out, FormatArg::Bool(cell.get())),
        LinkTarget::Byte(cell) => format.write_value(out, FormatArg::Byte(cell.get())),
        LinkTarget::Int(cell) => format.write_value(out, FormatArg::Int(cell.get())),
        LinkTarget::Float(cell) => format.write_value(out, FormatArg::Float(cell.get())),
        LinkTarget::String(cell) => match cell.try_borrow() {
            Ok(text) => format.write_value(out, FormatArg::Str(&text)),
            Err(_) => format.write_value(out, FormatArg::Str(BORROWED_PLACEHOLDER)),
        },
    }
}

/// Number of rows `text` occupies: one plus its embedded newlines.
pub fn line_count(text: &str) -> usize {
    1 + text.bytes().filter(|&b| b == b'\n').count()
}

/// Resolver that owns its scratch buffer.
///
/// Keep one per panel so the buffer's capacity carries over between frames.
#[derive(Debug, Default)]
pub struct ValueResolver {
    scratch: String,
}

impl ValueResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display text of `value`. Never mutates the entry.
    pub fn resolve<'s>(&'s mut self, value: &'s ValueEntry<'_>) -> &'s str {
        resolve(value.source(), &mut self.scratch)
    }

    pub(crate) fn scratch_mut(&mut self) -> &mut String {
        &mut self.scratch
    }
}
