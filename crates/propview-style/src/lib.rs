#![forbid(unsafe_code)]

//! Style: the fixed mapping from [`ColorCategory`] to concrete colors.

pub mod palette;

pub use palette::Palette;
pub use propview_render::{ColorCategory, PackedRgba};
