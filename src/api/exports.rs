//! Core functions exported to JavaScript
//!
//! Lets page scripts use the normalizer and locator without going through
//! the event triggers.

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::selection::SpanLocator;
use crate::text::normalize;

/// Normalize text with the shipped glossary
#[wasm_bindgen(js_name = normalizeText)]
pub fn normalize_text(text: &str) -> String {
    normalize(text)
}

/// Locate the delimited span around `cursor` (UTF-16 offset)
///
/// Returns `{ start, end }`, or `undefined` when there is no span.
#[wasm_bindgen(js_name = locateDelimitedSpan)]
pub fn locate_delimited_span(text: &str, cursor: usize) -> Result<JsValue, JsValue> {
    let span = SpanLocator::shipped().locate(text, cursor);
    serialize(&span, "Span serialization error")
}
