//! Browser adapter
//!
//! The only part of the crate that touches the DOM. Each entry point reads
//! page state once, calls the pure core in `text` or `selection`, and
//! applies the result once.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and DOM lookups
//! - `focus`: normalize the focused textarea, input or content-editable
//! - `click`: Ctrl+click delimited selection
//! - `triggers`: keydown and click listener installation
//! - `exports`: core functions callable directly from JavaScript

pub mod helpers;
pub mod focus;
pub mod click;
pub mod triggers;
pub mod exports;

pub use focus::{clean_focused_element, FocusedEditable};
pub use click::select_delimited_text;
pub use triggers::install_triggers;
pub use exports::{locate_delimited_span, normalize_text};
