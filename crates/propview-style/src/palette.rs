#![forbid(unsafe_code)]

//! Category → color mapping.
//!
//! The property panel distinguishes rows by data type, not by widget state,
//! so the palette is a flat table with one entry per [`ColorCategory`].
//! Row colors are half-transparent so highlight rectangles tint whatever is
//! behind them instead of hiding it.

use propview_render::{ColorCategory, PackedRgba};

/// A complete category → color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: PackedRgba,
    pub accent: PackedRgba,
    pub bool: PackedRgba,
    pub byte: PackedRgba,
    pub int: PackedRgba,
    pub float: PackedRgba,
    pub string: PackedRgba,
    pub any: PackedRgba,
    pub object: PackedRgba,
    pub array: PackedRgba,
    pub map: PackedRgba,
}

impl Palette {
    /// The default inspector palette.
    pub const DEFAULT: Self = Self {
        foreground: PackedRgba::WHITE,
        accent: PackedRgba::rgba(255, 255, 255, 32),
        bool: PackedRgba::rgba(144, 0, 2, 127),    // maroon
        byte: PackedRgba::rgba(0, 109, 102, 127),  // sherpa blue
        int: PackedRgba::rgba(44, 222, 174, 127),  // sea green
        float: PackedRgba::rgba(157, 255, 63, 127), // yellow green
        string: PackedRgba::rgba(248, 3, 204, 127), // magenta
        any: PackedRgba::rgba(10, 10, 10, 127),
        object: PackedRgba::rgba(0, 163, 230, 127),
        array: PackedRgba::rgba(252, 200, 39, 127), // gold
        map: PackedRgba::rgba(0, 88, 196, 127),
    };

    /// Color for a category.
    #[inline]
    pub const fn color(&self, category: ColorCategory) -> PackedRgba {
        match category {
            ColorCategory::Foreground => self.foreground,
            ColorCategory::Accent => self.accent,
            ColorCategory::Bool => self.bool,
            ColorCategory::Byte => self.byte,
            ColorCategory::Int => self.int,
            ColorCategory::Float => self.float,
            ColorCategory::String => self.string,
            ColorCategory::Any => self.any,
            ColorCategory::Object => self.object,
            ColorCategory::Array => self.array,
            ColorCategory::Map => self.map,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
