#![forbid(unsafe_code)]

//! Core: pixel geometry, per-frame pointer/clock input, and easing.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};
