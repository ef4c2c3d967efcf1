//! Models module for the translation utilities
//!
//! Plain data shared by the text normalizer, the delimiter locator and
//! the browser adapter. Nothing here touches the DOM.

pub mod rules;
pub mod delimiter;
pub mod editable;

// Re-export commonly used types
pub use rules::{ReplacementRule, RuleKind};
pub use delimiter::{DelimiterPair, Span};
pub use editable::EditableKind;
