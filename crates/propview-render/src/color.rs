#![forbid(unsafe_code)]

//! Colors and color categories.
//!
//! Draw calls carry a [`ColorCategory`], never a concrete color. The mapping
//! from category to [`PackedRgba`] is fixed per host (see `propview-style`),
//! which keeps layout code free of theme decisions.

/// A 32-bit RGBA color packed as `0xRRGGBBAA`.
///
/// Straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

impl std::fmt::Display for PackedRgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

/// What a drawn element represents. Hosts map each category to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    /// Plain text.
    Foreground,
    /// Neutral panel chrome (divider, un-typed highlights).
    Accent,
    /// Boolean value rows.
    Bool,
    /// Byte value rows.
    Byte,
    /// Integer value rows.
    Int,
    /// Floating-point value rows.
    Float,
    /// String value rows.
    String,
    /// Rows of any other type.
    Any,
    /// Object headers and their connectors.
    Object,
    /// Array headers and their connectors.
    Array,
    /// Map headers and their connectors.
    Map,
}

impl ColorCategory {
    /// Every category, in declaration order.
    pub const ALL: [ColorCategory; 11] = [
        Self::Foreground,
        Self::Accent,
        Self::Bool,
        Self::Byte,
        Self::Int,
        Self::Float,
        Self::String,
        Self::Any,
        Self::Object,
        Self::Array,
        Self::Map,
    ];

    /// Short lowercase name, stable for logs and snapshots.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Accent => "accent",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Any => "any",
            Self::Object => "object",
            Self::Array => "array",
            Self::Map => "map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(PackedRgba::rgb(1, 2, 3).a(), 255);
        assert_eq!(PackedRgba::rgba(144, 0, 2, 127), PackedRgba(0x9000_027f));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(PackedRgba::rgba(0xff, 0, 0x10, 0x20).to_string(), "#ff001020");
    }

    #[test]
    fn category_names_are_unique() {
        let mut names: Vec<_> = ColorCategory::ALL.iter().map(|c| c.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ColorCategory::ALL.len());
    }
}
