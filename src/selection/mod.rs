//! Delimiter-aware selection
//!
//! Works on a single flat text node. Offsets are UTF-16 code units so the
//! result can be handed straight to a DOM `Range`.

pub mod search;
pub mod locator;

pub use locator::{locate, SpanLocator};
