//! Marker search over UTF-16 code units
//!
//! Same semantics as JavaScript's `lastIndexOf` / `indexOf` with a start
//! position: an occurrence counts when it *begins* at or before (or at or
//! after) the position, even if it extends past it.

/// Last occurrence of `needle` beginning at or before `from`
pub fn rfind_at_or_before(text: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > text.len() {
        return None;
    }
    let last = from.min(text.len() - needle.len());
    (0..=last).rev().find(|&i| &text[i..i + needle.len()] == needle)
}

/// First occurrence of `needle` beginning at or after `from`
pub fn find_at_or_after(text: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > text.len() {
        return None;
    }
    let last = text.len() - needle.len();
    if from > last {
        return None;
    }
    (from..=last).find(|&i| &text[i..i + needle.len()] == needle)
}

/// Whether `needle` occurs anywhere in `text`
pub fn contains(text: &[u16], needle: &[u16]) -> bool {
    !needle.is_empty() && text.windows(needle.len()).any(|w| w == needle)
}

/// Whether the units immediately before `pos` are exactly `needle`
pub fn is_preceded_by(text: &[u16], pos: usize, needle: &[u16]) -> bool {
    pos >= needle.len() && pos <= text.len() && &text[pos - needle.len()..pos] == needle
}

/// Whether the units starting at `pos` are exactly `needle`
pub fn is_followed_by(text: &[u16], pos: usize, needle: &[u16]) -> bool {
    pos.checked_add(needle.len()).map_or(false, |end| end <= text.len())
        && &text[pos..pos + needle.len()] == needle
}
