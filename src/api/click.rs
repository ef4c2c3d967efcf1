//! Ctrl+click delimited selection
//!
//! Reads the click target's text and the caret offset the click produced,
//! locates the enclosing delimited span and replaces the page selection
//! with it. Only spans inside the target's first text node can be
//! selected.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Node, Selection};

use crate::api::helpers::{document, dom_error, window};
use crate::config::shipped_config;
use crate::models::Span;
use crate::selection::SpanLocator;
use crate::{wasm_info, wasm_log};

/// Select the delimited span under a modified click
///
/// Returns whether the selection was changed.
#[wasm_bindgen(js_name = selectDelimitedText)]
pub fn select_delimited_text(event: &MouseEvent) -> Result<bool, JsValue> {
    let triggers = &shipped_config().triggers;
    if !triggers
        .select_modifier
        .is_held(event.ctrl_key(), event.alt_key(), event.shift_key(), event.meta_key())
    {
        return Ok(false);
    }

    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(false);
    };

    let selection = window()?
        .get_selection()?
        .ok_or_else(|| dom_error("Window has no selection"))?;

    select_in_element(&document()?, &selection, &target, &SpanLocator::shipped())
}

/// Locate and select a span inside `target`, using the selection's caret
pub fn select_in_element(
    document: &Document,
    selection: &Selection,
    target: &Element,
    locator: &SpanLocator<'_>,
) -> Result<bool, JsValue> {
    if selection.range_count() == 0 {
        wasm_log!("selectDelimitedText: no caret");
        return Ok(false);
    }
    let cursor = selection.get_range_at(0)?.start_offset()? as usize;

    let text = target.text_content().unwrap_or_default();
    let Some(span) = locator.locate(&text, cursor) else {
        wasm_log!("selectDelimitedText: no delimited span at offset {}", cursor);
        return Ok(false);
    };

    let Some(node) = target.first_child() else {
        return Ok(false);
    };

    let node_len = node.text_content().map(|t| t.encode_utf16().count()).unwrap_or(0);
    if span.end > node_len {
        wasm_log!(
            "selectDelimitedText: span {:?} leaves the first text node ({} units)",
            span,
            node_len
        );
        return Ok(false);
    }

    apply_selection(document, selection, &node, span)?;
    wasm_info!("Selected delimited span {}..{}", span.start, span.end);
    Ok(true)
}

/// Replace the page selection with `span` inside `node`
pub fn apply_selection(
    document: &Document,
    selection: &Selection,
    node: &Node,
    span: Span,
) -> Result<(), JsValue> {
    let range = document.create_range()?;
    range.set_start(node, span.start as u32)?;
    range.set_end(node, span.end as u32)?;
    selection.remove_all_ranges()?;
    selection.add_range(&range)?;
    Ok(())
}
