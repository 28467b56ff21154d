#![forbid(unsafe_code)]

//! Render: the drawing seam between panels and the host renderer.
//!
//! Panels never talk to a graphics API. They issue text/rect/line calls
//! against a [`Surface`](surface::Surface) tagged with a
//! [`ColorCategory`](color::ColorCategory); the host decides what each
//! category looks like. [`DisplayList`](display_list::DisplayList) is a
//! surface that simply records those calls.

pub mod color;
pub mod display_list;
pub mod surface;

pub use color::{ColorCategory, PackedRgba};
pub use display_list::{DisplayList, DrawCommand, MonospaceMetrics};
pub use surface::Surface;
