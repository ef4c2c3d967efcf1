//! Text normalization
//!
//! Pure string-to-string cleaning of translated text, with no knowledge of
//! the element it came from.
//!
//! ## Modules
//!
//! - `entities`: numeric and named HTML entity decoding
//! - `normalizer`: entity decoding plus ordered glossary substitution

pub mod entities;
pub mod normalizer;

// Re-exports for convenience
pub use entities::{decode_entities, lookup_entity, ENTITY_MAP};
pub use normalizer::{normalize, Normalizer};
