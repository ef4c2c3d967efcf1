//! Normalize the focused editable element
//!
//! Reads the element's content once, normalizes it, and writes it back in
//! a single assignment. Unchanged content is not written, so the caret and
//! the page's own change tracking are left alone.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::api::helpers::{document, dom_error};
use crate::models::EditableKind;
use crate::text::Normalizer;
use crate::{wasm_info, wasm_log};

/// The focused element together with how to read and write it
pub struct FocusedEditable {
    element: Element,
    kind: EditableKind,
}

impl FocusedEditable {
    /// The document's active element, if it holds editable text
    pub fn from_document(document: &Document) -> Option<Self> {
        let element = document.active_element()?;
        Self::from_element(element)
    }

    pub fn from_element(element: Element) -> Option<Self> {
        let input_type = element.dyn_ref::<HtmlInputElement>().map(|input| input.type_());
        let content_editable = element
            .dyn_ref::<HtmlElement>()
            .map(|html| html.content_editable())
            .unwrap_or_default();

        let kind =
            EditableKind::classify(&element.tag_name(), input_type.as_deref(), &content_editable)?;
        Some(Self { element, kind })
    }

    pub fn kind(&self) -> EditableKind {
        self.kind
    }

    /// Current content: `value` for form controls, `innerHTML` otherwise
    pub fn read(&self) -> Result<String, JsValue> {
        match self.kind {
            EditableKind::TextArea => self
                .element
                .dyn_ref::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .ok_or_else(|| dom_error("Focused element is not a textarea")),
            EditableKind::TextInput => self
                .element
                .dyn_ref::<HtmlInputElement>()
                .map(|input| input.value())
                .ok_or_else(|| dom_error("Focused element is not an input")),
            EditableKind::ContentEditable => Ok(self.element.inner_html()),
        }
    }

    /// Replace the content in one assignment
    pub fn write(&self, content: &str) -> Result<(), JsValue> {
        match self.kind {
            EditableKind::TextArea => self
                .element
                .dyn_ref::<HtmlTextAreaElement>()
                .map(|area| area.set_value(content))
                .ok_or_else(|| dom_error("Focused element is not a textarea")),
            EditableKind::TextInput => self
                .element
                .dyn_ref::<HtmlInputElement>()
                .map(|input| input.set_value(content))
                .ok_or_else(|| dom_error("Focused element is not an input")),
            EditableKind::ContentEditable => {
                self.element.set_inner_html(content);
                Ok(())
            }
        }
    }
}

/// Normalize content, `None` if nothing changed
pub fn clean_content(normalizer: &Normalizer<'_>, content: &str) -> Option<String> {
    let cleaned = normalizer.normalize(content);
    if cleaned == content {
        None
    } else {
        Some(cleaned)
    }
}

/// Normalize one editable element in place
///
/// Returns whether the content was rewritten.
pub fn clean_element(
    editable: &FocusedEditable,
    normalizer: &Normalizer<'_>,
) -> Result<bool, JsValue> {
    let content = editable.read()?;
    match clean_content(normalizer, &content) {
        Some(cleaned) => {
            editable.write(&cleaned)?;
            wasm_info!(
                "Cleaned {:?}: {} -> {} chars",
                editable.kind(),
                content.chars().count(),
                cleaned.chars().count()
            );
            Ok(true)
        }
        None => {
            wasm_log!("Content of {:?} already clean", editable.kind());
            Ok(false)
        }
    }
}

/// Normalize the content of the currently focused element
///
/// A no-op returning `false` when focus is not on a textarea, text input
/// or content-editable region.
#[wasm_bindgen(js_name = cleanFocusedElement)]
pub fn clean_focused_element() -> Result<bool, JsValue> {
    let document = document()?;
    let Some(editable) = FocusedEditable::from_document(&document) else {
        wasm_log!("cleanFocusedElement: focused element is not editable");
        return Ok(false);
    };

    clean_element(&editable, &Normalizer::shipped())
}
