//! Kinds of focused editable elements
//!
//! The adapter classifies the focused element from its tag name, input
//! type and `contentEditable` attribute before reading any content.

use serde::{Deserialize, Serialize};

/// Input types whose `value` is free text
const TEXT_INPUT_TYPES: &[&str] = &["", "text", "search", "url"];

/// Where an element keeps its editable content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditableKind {
    /// `<textarea>`, content in `value`
    TextArea,
    /// Text-like `<input>`, content in `value`
    TextInput,
    /// `contenteditable` region, content in `innerHTML`
    ContentEditable,
}

impl EditableKind {
    /// Classify an element, `None` if it is not editable text
    pub fn classify(
        tag_name: &str,
        input_type: Option<&str>,
        content_editable: &str,
    ) -> Option<Self> {
        match tag_name.to_ascii_lowercase().as_str() {
            "textarea" => return Some(EditableKind::TextArea),
            "input" => {
                let input_type = input_type.unwrap_or("").to_ascii_lowercase();
                if TEXT_INPUT_TYPES.contains(&input_type.as_str()) {
                    return Some(EditableKind::TextInput);
                }
                return None;
            }
            _ => {}
        }

        if content_editable == "true" {
            Some(EditableKind::ContentEditable)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_textarea() {
        let kind = EditableKind::classify("TEXTAREA", None, "inherit");
        assert_eq!(kind, Some(EditableKind::TextArea));
    }

    #[test]
    fn test_classify_inputs() {
        let kind = EditableKind::classify("input", Some("text"), "inherit");
        assert_eq!(kind, Some(EditableKind::TextInput));
        assert_eq!(EditableKind::classify("INPUT", None, "inherit"), Some(EditableKind::TextInput));
        assert_eq!(EditableKind::classify("input", Some("checkbox"), "inherit"), None);
    }

    #[test]
    fn test_classify_content_editable() {
        let kind = EditableKind::classify("div", None, "true");
        assert_eq!(kind, Some(EditableKind::ContentEditable));
        assert_eq!(EditableKind::classify("div", None, "inherit"), None);
        assert_eq!(EditableKind::classify("body", None, "false"), None);
    }
}
